//! Follow edge model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use yatube_core::types::{DbId, Timestamp};

/// A row from `follows` joined with both usernames.
///
/// Serializes as `{"user": <follower>, "following": <followed>}`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Follow {
    #[serde(skip_serializing)]
    pub id: DbId,
    #[serde(skip_serializing)]
    pub user_id: DbId,
    /// Username of the follower.
    pub user: String,
    #[serde(skip_serializing)]
    pub following_id: DbId,
    /// Username of the followed user.
    pub following: String,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
}

/// DTO for creating a follow edge.
///
/// The follower is always the requesting user; a `user` field in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFollow {
    #[validate(custom(function = "yatube_core::validation::not_blank"))]
    pub following: String,
}
