//! Session store: the single source of truth for authentication state.
//!
//! The live session is an `RwSignal<Session>` provided via context from
//! `App`, so the router guard and the HTTP client read the same record
//! synchronously and react to changes. The token and user profile are
//! mirrored to `localStorage` so a session survives a reload; the persisted
//! copy is only ever written after the backend confirms a login, and only
//! ever removed by `logout`.
//!
//! INVARIANT
//! =========
//! `user` is present only while `token` is present. Restore discards an
//! orphaned profile, and login/logout always set or clear both together.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::types::{ApiMessage, LoginResponse, User};
use crate::util::storage;

/// localStorage key holding the raw token string.
pub const TOKEN_KEY: &str = "token";
/// localStorage key holding the JSON-encoded user profile.
pub const USER_KEY: &str = "user";

/// Current authentication state: a bearer token and the profile it belongs
/// to, both absent while logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// Whether a credential is currently held. Derived from `token` on
    /// every call, never cached.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Rebuild a session from raw persisted values.
    ///
    /// Missing or malformed entries yield the unauthenticated default, and
    /// a user record without a token is discarded.
    pub fn from_persisted(token: Option<String>, user_json: Option<String>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        let user = match (&token, user_json) {
            (Some(_), Some(raw)) => serde_json::from_str(&raw).ok(),
            _ => None,
        };
        Self { token, user }
    }

    /// Read the persisted session from localStorage at startup.
    pub fn restore() -> Self {
        Self::from_persisted(storage::get(TOKEN_KEY), storage::get(USER_KEY))
    }

    pub(crate) fn apply_login(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    pub(crate) fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}

/// Authenticate against `POST /auth/login.php`.
///
/// On success the token and profile are stored in memory and in
/// localStorage before this resolves. On any failure (transport error,
/// error status, or a `success: false` payload) the session is left
/// untouched and the returned message is suitable for display.
pub async fn login(
    session: RwSignal<Session>,
    username: &str,
    password: &str,
) -> Result<(), String> {
    let body = serde_json::json!({
        "nombre_de_usuario": username,
        "password": password,
    });
    let resp: LoginResponse = api::post_json(session, "/auth/login.php", &body).await?;
    let (token, user) = login_result(resp)?;

    storage::set(TOKEN_KEY, &token);
    if let Ok(raw) = serde_json::to_string(&user) {
        storage::set(USER_KEY, &raw);
    }
    session.update(|s| s.apply_login(token, user));
    Ok(())
}

/// Create an account via `POST /usuario/registrar.php`.
///
/// Returns the backend's payload untouched; registration never establishes
/// a session, the caller decides where to send the user next.
pub async fn register(
    session: RwSignal<Session>,
    username: &str,
    password: &str,
) -> Result<ApiMessage, String> {
    let body = serde_json::json!({
        "nombre_de_usuario": username,
        "password": password,
    });
    api::post_json(session, "/usuario/registrar.php", &body).await
}

/// Drop the session: clear both fields in memory and remove both
/// localStorage entries. Idempotent.
pub fn logout(session: RwSignal<Session>) {
    session.update(Session::clear);
    storage::remove(TOKEN_KEY);
    storage::remove(USER_KEY);
}

/// Reduce a login payload to its usable outcome.
///
/// A `success: true` response missing its token or user is treated as a
/// failure; the backend's own message wins over the generic one.
pub(crate) fn login_result(resp: LoginResponse) -> Result<(String, User), String> {
    let fail = |message: Option<String>| {
        message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| api::CONNECTION_ERROR.to_owned())
    };

    if !resp.success {
        return Err(fail(resp.message));
    }
    match (resp.token, resp.user) {
        (Some(token), Some(user)) if !token.is_empty() => Ok((token, user)),
        _ => Err(fail(resp.message)),
    }
}
