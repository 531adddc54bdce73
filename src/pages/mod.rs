//! Routed views. Thin by design: forms and lists that delegate to the
//! session store and the contacts API.

pub mod agenda;
pub mod contact_create;
pub mod contact_edit;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
