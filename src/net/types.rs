//! Wire types shared with the remote agenda API.
//!
//! The backend is a PHP service; field names follow its JSON contract
//! (`nombre_de_usuario`, `nombre`, `telefono`). Response envelopes are
//! lenient: every field defaults so a partial payload decodes instead of
//! failing outright.

/// Authenticated user profile, as returned by the login endpoint and
/// persisted alongside the token.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: i64,
    pub nombre_de_usuario: String,
}

/// Payload of `POST /auth/login.php`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic success/message envelope used by registration and the contact
/// mutation endpoints.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// A contact in the agenda.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Contact {
    pub id: i64,
    pub nombre: String,
    pub telefono: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Fields for creating or updating a contact (no server-assigned id).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ContactInput {
    pub nombre: String,
    pub telefono: String,
    pub email: Option<String>,
}
