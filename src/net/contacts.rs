//! Contact CRUD endpoints.
//!
//! All calls ride the central `api` dispatch path, so they inherit bearer
//! injection and the 401 teardown without doing anything themselves.

use leptos::prelude::RwSignal;

use crate::net::api;
use crate::net::types::{ApiMessage, Contact, ContactInput};
use crate::state::session::Session;

fn input_body(input: &ContactInput) -> serde_json::Value {
    serde_json::json!({
        "nombre": input.nombre,
        "telefono": input.telefono,
        "email": input.email,
    })
}

/// Fetch the full contact list.
pub async fn list(session: RwSignal<Session>) -> Result<Vec<Contact>, String> {
    api::get_json(session, "/contactos/listar.php").await
}

/// Fetch a single contact by id.
pub async fn get(session: RwSignal<Session>, id: i64) -> Result<Contact, String> {
    api::get_json(session, &format!("/contactos/obtener.php?id={id}")).await
}

/// Create a contact.
pub async fn create(
    session: RwSignal<Session>,
    input: &ContactInput,
) -> Result<ApiMessage, String> {
    api::post_json(session, "/contactos/crear.php", &input_body(input)).await
}

/// Update an existing contact.
pub async fn update(
    session: RwSignal<Session>,
    id: i64,
    input: &ContactInput,
) -> Result<ApiMessage, String> {
    let mut body = input_body(input);
    body["id"] = serde_json::json!(id);
    api::put_json(session, "/contactos/actualizar.php", &body).await
}

/// Delete a contact by id.
pub async fn delete(session: RwSignal<Session>, id: i64) -> Result<(), String> {
    api::delete(session, &format!("/contactos/eliminar.php?id={id}")).await
}
