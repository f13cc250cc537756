//! Route definitions for the `/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST   /login     -> login
/// POST   /refresh   -> refresh
/// POST   /verify    -> verify
/// POST   /logout    -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/verify", post(auth::verify))
        .route("/logout", post(auth::logout))
}
