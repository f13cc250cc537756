//! Route definitions for the `/follow` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::follow;
use crate::state::AppState;

/// Routes mounted at `/follow`.
///
/// ```text
/// GET    /          -> list (?search=)
/// POST   /          -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(follow::list).post(follow::create))
}
