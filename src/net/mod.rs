//! Networking: wire types and the REST client for the agenda API.

pub mod api;
pub mod contacts;
pub mod types;
