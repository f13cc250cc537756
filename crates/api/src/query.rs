//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Pagination parameters (`?limit=&offset=`).
///
/// Listing is unpaginated when `limit` is absent. Values are clamped by
/// [`yatube_core::pagination::PageWindow::from_params`].
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Free-text search parameter (`?search=`).
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
}
