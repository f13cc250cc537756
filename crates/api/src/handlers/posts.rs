//! Handlers for the `/posts` resource.
//!
//! Reads are open to everyone; writes require authentication, and updates
//! or deletes are reserved for the post's author.

use axum::extract::{OriginalUri, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use yatube_core::error::CoreError;
use yatube_core::pagination::{Page, PageWindow};
use yatube_core::types::DbId;
use yatube_db::models::post::{CreatePost, PatchPost, Post};
use yatube_db::repositories::{GroupRepo, PostRepo};
use yatube_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::permissions::Requester;
use crate::middleware::validated_json::{DeferredJson, ValidatedJson};
use crate::query::PaginationParams;
use crate::response::ListResponse;
use crate::state::AppState;

/// Load a post or fail with 404.
pub(crate) async fn load_post(pool: &DbPool, id: DbId) -> AppResult<Post> {
    PostRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))
}

/// Reject a group reference that does not resolve to an existing group.
async fn ensure_group_exists(pool: &DbPool, group: Option<DbId>) -> AppResult<()> {
    if let Some(id) = group {
        if GroupRepo::find_by_id(pool, id).await?.is_none() {
            return Err(CoreError::invalid_field(
                "group",
                format!("Invalid pk \"{id}\" - object does not exist."),
            )
            .into());
        }
    }
    Ok(())
}

/// GET /api/v1/posts
///
/// Returns every post, or one page of posts when `limit` is supplied.
pub async fn list(
    State(state): State<AppState>,
    _requester: Requester,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<ListResponse<Post>>> {
    let Some(window) = PageWindow::from_params(params.limit, params.offset) else {
        let posts = PostRepo::list(&state.pool).await?;
        return Ok(Json(ListResponse::All(posts)));
    };

    let count = PostRepo::count(&state.pool).await?;
    let posts = PostRepo::list_page(&state.pool, window.limit, window.offset).await?;
    Ok(Json(ListResponse::Page(Page::new(
        window,
        uri.path(),
        uri.query(),
        count,
        posts,
    ))))
}

/// POST /api/v1/posts
///
/// The author is always the requesting user.
pub async fn create(
    State(state): State<AppState>,
    requester: Requester,
    ValidatedJson(input): ValidatedJson<CreatePost>,
) -> AppResult<(StatusCode, Json<Post>)> {
    let user = requester.require_user()?;
    ensure_group_exists(&state.pool, input.group).await?;

    let post = PostRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(post_id = post.id, user_id = user.user_id, "Post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// GET /api/v1/posts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _requester: Requester,
    Path(id): Path<DbId>,
) -> AppResult<Json<Post>> {
    Ok(Json(load_post(&state.pool, id).await?))
}

/// PUT /api/v1/posts/{id}
pub async fn update(
    State(state): State<AppState>,
    requester: Requester,
    Path(id): Path<DbId>,
    body: DeferredJson,
) -> AppResult<Json<Post>> {
    let post = load_post(&state.pool, id).await?;
    requester.authorize(&post)?;
    let input: CreatePost = body.validated()?;
    ensure_group_exists(&state.pool, input.group).await?;

    let post = PostRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    tracing::info!(post_id = id, "Post replaced");
    Ok(Json(post))
}

/// PATCH /api/v1/posts/{id}
pub async fn partial_update(
    State(state): State<AppState>,
    requester: Requester,
    Path(id): Path<DbId>,
    body: DeferredJson,
) -> AppResult<Json<Post>> {
    let post = load_post(&state.pool, id).await?;
    requester.authorize(&post)?;
    let input: PatchPost = body.validated()?;
    ensure_group_exists(&state.pool, input.new_group()).await?;

    let post = PostRepo::patch(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;
    tracing::info!(post_id = id, "Post updated");
    Ok(Json(post))
}

/// DELETE /api/v1/posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    requester: Requester,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let post = load_post(&state.pool, id).await?;
    requester.authorize(&post)?;

    if PostRepo::delete(&state.pool, id).await? {
        tracing::info!(post_id = id, "Post deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Post", id }))
    }
}
