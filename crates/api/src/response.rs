//! Shared response body types for API handlers.

use serde::Serialize;
use yatube_core::pagination::Page;

/// Body of a list endpoint that supports optional pagination.
///
/// Serializes as a bare JSON array when the client did not ask for a page,
/// or as `{count, next, previous, results}` when it did.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ListResponse<T: Serialize> {
    All(Vec<T>),
    Page(Page<T>),
}
