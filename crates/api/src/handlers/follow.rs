//! Handlers for the `/follow` resource.
//!
//! Both endpoints require authentication and only ever touch the
//! requester's own outgoing edges.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use yatube_core::error::CoreError;
use yatube_core::follow::{already_following_error, validate_new_follow};
use yatube_core::search::search_terms;
use yatube_db::models::follow::{CreateFollow, Follow};
use yatube_db::repositories::{FollowRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::validated_json::ValidatedJson;
use crate::query::SearchParams;
use crate::state::AppState;

/// GET /api/v1/follow
///
/// Lists the users the requester follows. `?search=` filters on the
/// followed user's username.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Follow>>> {
    let terms = search_terms(&params.search);
    let follows = FollowRepo::list_for_user(&state.pool, user.user_id, &terms).await?;
    Ok(Json(follows))
}

/// POST /api/v1/follow
///
/// The follower is always the requester; any `user` field in the body is
/// ignored.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateFollow>,
) -> AppResult<(StatusCode, Json<Follow>)> {
    let username = input.following.trim();
    let target = UserRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or_else(|| {
            CoreError::invalid_field(
                "following",
                format!("Object with username={username} does not exist."),
            )
        })?;

    let already_following = FollowRepo::exists(&state.pool, user.user_id, target.id).await?;
    validate_new_follow(user.user_id, target.id, already_following)?;

    // A concurrent request may insert the same edge after the check above.
    let follow = FollowRepo::create(&state.pool, user.user_id, target.id)
        .await?
        .ok_or_else(already_following_error)?;
    tracing::info!(
        user_id = user.user_id,
        following_id = target.id,
        "Follow created"
    );
    Ok((StatusCode::CREATED, Json(follow)))
}
