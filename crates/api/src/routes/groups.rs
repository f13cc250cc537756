//! Route definitions for the `/groups` resource (read-only).

use axum::routing::get;
use axum::Router;

use crate::handlers::groups;
use crate::state::AppState;

/// Routes mounted at `/groups`.
///
/// ```text
/// GET    /          -> list
/// GET    /{id}      -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(groups::list))
        .route("/{id}", get(groups::get_by_id))
}
