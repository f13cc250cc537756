//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `yatube_db`, call the permission
//! checks explicitly, and map errors via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod comments;
pub mod follow;
pub mod groups;
pub mod posts;
pub mod users;
