//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `contacts`) so views depend on
//! small focused models. The structs are plain data with pure mutators;
//! reactivity comes from wrapping them in `RwSignal` at the `App` root.

pub mod contacts;
pub mod session;
