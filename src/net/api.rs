//! HTTP client for the remote agenda API.
//!
//! All requests go through one dispatch path against a single configured
//! base URL: the current session token is attached as a bearer credential
//! on the way out, and every response is screened for HTTP 401 on the way
//! in. A 401 from any endpoint tears down the local session and forces a
//! hard redirect to the login page.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and error responses are both recovered into
//! `Err(message)` with a human-readable message (the response body's
//! `message` field when present, a generic connection error otherwise).
//! Callers never see a panic or a raw transport error.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the API is only
//! reachable from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::RwSignal;

use crate::state::session::Session;

/// Fallback message when no usable `message` field is available.
pub(crate) const CONNECTION_ERROR: &str = "Error de conexión";

/// Default deployment address; override at build time with
/// `AGENDA_API_BASE`.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// The configured API base URL.
pub fn base_url() -> &'static str {
    option_env!("AGENDA_API_BASE").unwrap_or(DEFAULT_BASE_URL)
}

/// Absolute URL for an API path.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", base_url())
}

/// Format the authorization header value for a token, if one exists.
pub fn bearer(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {t}"))
}

/// Whether a status code means the backend no longer accepts our session.
pub fn session_expired(status: u16) -> bool {
    status == 401
}

/// Extract a human-readable message from an error response body.
///
/// Prefers a non-empty JSON `message` field; anything else (missing body,
/// non-JSON body, empty message) falls back to the generic connection error.
pub fn error_message(body: Option<&str>) -> String {
    body.and_then(|raw| serde_json::from_str::<serde_json::Value>(raw).ok())
        .and_then(|v| v.get("message").and_then(serde_json::Value::as_str).map(str::to_owned))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| CONNECTION_ERROR.to_owned())
}

/// Single request/response funnel: bearer injection, dispatch, 401 teardown,
/// error normalization.
#[cfg(feature = "hydrate")]
async fn dispatch(
    session: RwSignal<Session>,
    method: gloo_net::http::Method,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Response, String> {
    use leptos::prelude::WithUntracked;

    let url = endpoint(path);

    // Token as of the moment of dispatch; untracked so network calls never
    // become reactive subscribers.
    let token = session.with_untracked(|s| s.token().map(str::to_owned));

    let mut builder = gloo_net::http::RequestBuilder::new(&url)
        .method(method)
        .header("Content-Type", "application/json");
    if let Some(header) = bearer(token.as_deref()) {
        builder = builder.header("Authorization", &header);
    }

    let request = match body {
        Some(value) => builder.json(value).map_err(|e| {
            log::error!("failed to encode request body for {url}: {e}");
            CONNECTION_ERROR.to_owned()
        })?,
        None => builder.build().map_err(|e| {
            log::error!("failed to build request for {url}: {e}");
            CONNECTION_ERROR.to_owned()
        })?,
    };

    let resp = request.send().await.map_err(|e| {
        log::warn!("transport error for {url}: {e}");
        CONNECTION_ERROR.to_owned()
    })?;

    if session_expired(resp.status()) {
        // A 401 from any endpoint invalidates the whole session.
        log::warn!("401 from {url}, tearing down session");
        crate::state::session::logout(session);
        crate::util::nav::hard_redirect(crate::routes::LOGIN_PATH);
        return Err(error_message(resp.text().await.ok().as_deref()));
    }

    if !resp.ok() {
        return Err(error_message(resp.text().await.ok().as_deref()));
    }

    Ok(resp)
}

/// `GET` an API path and decode the JSON response.
pub async fn get_json<T: serde::de::DeserializeOwned>(
    session: RwSignal<Session>,
    path: &str,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = dispatch(session, gloo_net::http::Method::GET, path, None).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path);
        Err(server_stub())
    }
}

/// `POST` a JSON body to an API path and decode the JSON response.
pub async fn post_json<T: serde::de::DeserializeOwned>(
    session: RwSignal<Session>,
    path: &str,
    body: &serde_json::Value,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = dispatch(session, gloo_net::http::Method::POST, path, Some(body)).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path, body);
        Err(server_stub())
    }
}

/// `PUT` a JSON body to an API path and decode the JSON response.
pub async fn put_json<T: serde::de::DeserializeOwned>(
    session: RwSignal<Session>,
    path: &str,
    body: &serde_json::Value,
) -> Result<T, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = dispatch(session, gloo_net::http::Method::PUT, path, Some(body)).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path, body);
        Err(server_stub())
    }
}

/// `DELETE` an API path, discarding any response body.
pub async fn delete(session: RwSignal<Session>, path: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        dispatch(session, gloo_net::http::Method::DELETE, path, None).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path);
        Err(server_stub())
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, String> {
    resp.json::<T>().await.map_err(|e| {
        log::warn!("failed to decode response: {e}");
        CONNECTION_ERROR.to_owned()
    })
}

#[cfg(not(feature = "hydrate"))]
fn server_stub() -> String {
    "not available on server".to_owned()
}
