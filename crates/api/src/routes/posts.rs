//! Route definitions for the `/posts` resource.
//!
//! Also nests comment routes under `/posts/{post_id}/comments`. The post
//! id segment uses one parameter name across both trees.

use axum::routing::get;
use axum::Router;

use crate::handlers::{comments, posts};
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /                               -> list
/// POST   /                               -> create
/// GET    /{post_id}                      -> get_by_id
/// PUT    /{post_id}                      -> update
/// PATCH  /{post_id}                      -> partial_update
/// DELETE /{post_id}                      -> delete
///
/// GET    /{post_id}/comments             -> list_by_post
/// POST   /{post_id}/comments             -> create
/// GET    /{post_id}/comments/{id}        -> get_by_id
/// PUT    /{post_id}/comments/{id}        -> update
/// PATCH  /{post_id}/comments/{id}        -> partial_update
/// DELETE /{post_id}/comments/{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    let comment_routes = Router::new()
        .route("/", get(comments::list_by_post).post(comments::create))
        .route(
            "/{id}",
            get(comments::get_by_id)
                .put(comments::update)
                .patch(comments::partial_update)
                .delete(comments::delete),
        );

    Router::new()
        .route("/", get(posts::list).post(posts::create))
        .route(
            "/{post_id}",
            get(posts::get_by_id)
                .put(posts::update)
                .patch(posts::partial_update)
                .delete(posts::delete),
        )
        .nest("/{post_id}/comments", comment_routes)
}
