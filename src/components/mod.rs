//! Reusable view components.

pub mod contact_form;
pub mod nav_bar;
