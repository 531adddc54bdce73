//! Browser environment helpers.

pub mod nav;
pub mod storage;
