pub mod auth;
pub mod follow;
pub mod groups;
pub mod health;
pub mod posts;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                              login (public)
/// /auth/refresh                            refresh (public)
/// /auth/verify                             verify access token (public)
/// /auth/logout                             logout (requires auth)
///
/// /users                                   register (public)
///
/// /posts                                   list, create
/// /posts/{id}                              get, replace, patch, delete
/// /posts/{post_id}/comments                list, create
/// /posts/{post_id}/comments/{id}           get, replace, patch, delete
///
/// /groups                                  list (read-only)
/// /groups/{id}                             get (read-only)
///
/// /follow                                  list, create (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/posts", posts::router())
        .nest("/groups", groups::router())
        .nest("/follow", follow::router())
}
