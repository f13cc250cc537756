//! Domain types and pure rules for the Yatube API.
//!
//! Nothing in this crate performs I/O. The repository layer (`yatube_db`) and
//! the HTTP layer (`yatube_api`) both depend on it.

pub mod error;
pub mod follow;
pub mod pagination;
pub mod permissions;
pub mod search;
pub mod types;
pub mod validation;
