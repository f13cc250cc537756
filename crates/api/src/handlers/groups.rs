//! Handlers for the `/groups` resource (read-only).

use axum::extract::{Path, State};
use axum::Json;
use yatube_core::error::CoreError;
use yatube_core::types::DbId;
use yatube_db::models::group::Group;
use yatube_db::repositories::GroupRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::permissions::Requester;
use crate::state::AppState;

/// GET /api/v1/groups
pub async fn list(
    State(state): State<AppState>,
    _requester: Requester,
) -> AppResult<Json<Vec<Group>>> {
    let groups = GroupRepo::list(&state.pool).await?;
    Ok(Json(groups))
}

/// GET /api/v1/groups/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _requester: Requester,
    Path(id): Path<DbId>,
) -> AppResult<Json<Group>> {
    let group = GroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Group",
            id,
        }))?;
    Ok(Json(group))
}
