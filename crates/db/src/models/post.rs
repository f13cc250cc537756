//! Post entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use yatube_core::permissions::Authored;
use yatube_core::types::{DbId, Timestamp};

use crate::models::double_option;

/// A post row joined with its author's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub author_id: DbId,
    /// Username of the author.
    pub author: String,
    pub text: String,
    pub pub_date: Timestamp,
    #[serde(rename = "group")]
    pub group_id: Option<DbId>,
}

impl Authored for Post {
    fn author_id(&self) -> DbId {
        self.author_id
    }
}

/// DTO for creating a post, also used for full replacement (PUT).
///
/// `author` and `pub_date` are read-only and ignored if supplied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePost {
    #[validate(custom(function = "yatube_core::validation::not_blank"))]
    pub text: String,
    pub group: Option<DbId>,
}

/// DTO for a partial update (PATCH). Absent fields are left unchanged;
/// `"group": null` detaches the post from its group.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PatchPost {
    #[validate(custom(function = "yatube_core::validation::not_blank"))]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub group: Option<Option<DbId>>,
}

impl PatchPost {
    /// The group id the patch assigns, if it touches the group at all.
    pub fn new_group(&self) -> Option<DbId> {
        self.group.flatten()
    }
}
