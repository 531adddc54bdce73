//! # agenda-web
//!
//! Leptos + WASM single-page client for the agenda contact service.
//!
//! The core is three cooperating pieces: the session store
//! ([`state::session`]) holding the token/user pair with localStorage
//! persistence, the HTTP client ([`net::api`]) attaching the bearer token
//! outbound and tearing the session down on any 401 inbound, and the
//! navigation guard ([`routes`]) enforcing per-route access tags before a
//! view renders. Pages and components are thin wiring around those three.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: set up panic reporting and console logging, then
/// hydrate the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::hydrate_body(crate::app::App);
}
