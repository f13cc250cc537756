//! Group entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yatube_core::types::DbId;

/// A group row from the `groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Group {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
}

/// DTO for provisioning a group. Groups are not writable over the API.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroup {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}
