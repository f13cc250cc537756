//! Handlers for the `/comments` resource.
//!
//! Comments are nested under posts:
//! `/posts/{post_id}/comments[/{id}]`
//!
//! Every handler resolves the parent post first, so an unknown `post_id`
//! is a 404 regardless of the comment id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yatube_core::error::CoreError;
use yatube_core::types::DbId;
use yatube_db::models::comment::{Comment, CreateComment, PatchComment};
use yatube_db::models::post::Post;
use yatube_db::repositories::CommentRepo;
use yatube_db::DbPool;

use super::posts::load_post;
use crate::error::{AppError, AppResult};
use crate::middleware::permissions::Requester;
use crate::middleware::validated_json::{DeferredJson, ValidatedJson};
use crate::state::AppState;

/// Resolve the parent post named in the path. Not cached; the post may be
/// deleted between requests.
pub async fn resolve_post(pool: &DbPool, post_id: DbId) -> AppResult<Post> {
    load_post(pool, post_id).await
}

/// Load a comment that belongs to `post_id`, or fail with 404.
async fn load_comment(pool: &DbPool, post_id: DbId, id: DbId) -> AppResult<Comment> {
    let post = resolve_post(pool, post_id).await?;
    CommentRepo::find_in_post(pool, post.id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))
}

/// GET /api/v1/posts/{post_id}/comments
pub async fn list_by_post(
    State(state): State<AppState>,
    _requester: Requester,
    Path(post_id): Path<DbId>,
) -> AppResult<Json<Vec<Comment>>> {
    let post = resolve_post(&state.pool, post_id).await?;
    let comments = CommentRepo::list_by_post(&state.pool, post.id).await?;
    Ok(Json(comments))
}

/// POST /api/v1/posts/{post_id}/comments
///
/// The parent post comes from the path and the author is the requester.
pub async fn create(
    State(state): State<AppState>,
    requester: Requester,
    Path(post_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateComment>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let user = requester.require_user()?;
    let post = resolve_post(&state.pool, post_id).await?;

    let comment = CommentRepo::create(&state.pool, post.id, user.user_id, &input.text).await?;
    tracing::info!(
        comment_id = comment.id,
        post_id = post.id,
        user_id = user.user_id,
        "Comment created"
    );
    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /api/v1/posts/{post_id}/comments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _requester: Requester,
    Path((post_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Comment>> {
    Ok(Json(load_comment(&state.pool, post_id, id).await?))
}

/// PUT /api/v1/posts/{post_id}/comments/{id}
pub async fn update(
    State(state): State<AppState>,
    requester: Requester,
    Path((post_id, id)): Path<(DbId, DbId)>,
    body: DeferredJson,
) -> AppResult<Json<Comment>> {
    let comment = load_comment(&state.pool, post_id, id).await?;
    requester.authorize(&comment)?;
    let input: CreateComment = body.validated()?;

    let comment = CommentRepo::update_text(&state.pool, id, &input.text)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;
    tracing::info!(comment_id = id, post_id, "Comment updated");
    Ok(Json(comment))
}

/// PATCH /api/v1/posts/{post_id}/comments/{id}
///
/// An empty patch returns the comment unchanged.
pub async fn partial_update(
    State(state): State<AppState>,
    requester: Requester,
    Path((post_id, id)): Path<(DbId, DbId)>,
    body: DeferredJson,
) -> AppResult<Json<Comment>> {
    let comment = load_comment(&state.pool, post_id, id).await?;
    requester.authorize(&comment)?;
    let input: PatchComment = body.validated()?;

    let Some(text) = input.text else {
        return Ok(Json(comment));
    };
    let comment = CommentRepo::update_text(&state.pool, id, &text)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;
    tracing::info!(comment_id = id, post_id, "Comment updated");
    Ok(Json(comment))
}

/// DELETE /api/v1/posts/{post_id}/comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    requester: Requester,
    Path((post_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let comment = load_comment(&state.pool, post_id, id).await?;
    requester.authorize(&comment)?;

    if CommentRepo::delete(&state.pool, id).await? {
        tracing::info!(comment_id = id, post_id, "Comment deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))
    }
}
