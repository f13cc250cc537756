//! Comment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use yatube_core::permissions::Authored;
use yatube_core::types::{DbId, Timestamp};

/// A comment row joined with its author's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub author_id: DbId,
    pub author: String,
    pub text: String,
    pub created: Timestamp,
    /// Parent post; always taken from the request path, never from input.
    #[serde(rename = "post")]
    pub post_id: DbId,
}

impl Authored for Comment {
    fn author_id(&self) -> DbId {
        self.author_id
    }
}

/// DTO for creating a comment, also used for full replacement (PUT).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComment {
    #[validate(custom(function = "yatube_core::validation::not_blank"))]
    pub text: String,
}

/// DTO for a partial update (PATCH).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PatchComment {
    #[validate(custom(function = "yatube_core::validation::not_blank"))]
    pub text: Option<String>,
}
