//! Repository for the `comments` table.
//!
//! Lookups are always scoped to a parent post.

use sqlx::PgPool;
use yatube_core::types::DbId;

use crate::models::comment::Comment;

/// Projection over `c` (comments) and `u` (users).
const PROJECTION: &str = "c.id, c.author_id, u.username AS author, c.text, c.created, c.post_id";

const RETURNING: &str = "id, post_id, author_id, text, created";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment under `post_id` authored by `author_id`.
    pub async fn create(
        pool: &PgPool,
        post_id: DbId,
        author_id: DbId,
        text: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "WITH c AS (
                INSERT INTO comments (post_id, author_id, text)
                VALUES ($1, $2, $3)
                RETURNING {RETURNING}
             )
             SELECT {PROJECTION} FROM c JOIN users u ON u.id = c.author_id"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .bind(author_id)
            .bind(text.trim())
            .fetch_one(pool)
            .await
    }

    /// Find a comment by ID within a specific post.
    ///
    /// A comment that exists under a different post is not returned.
    pub async fn find_in_post(
        pool: &PgPool,
        post_id: DbId,
        id: DbId,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECTION} FROM comments c JOIN users u ON u.id = c.author_id
             WHERE c.post_id = $1 AND c.id = $2"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all comments of a post, oldest first.
    pub async fn list_by_post(pool: &PgPool, post_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECTION} FROM comments c JOIN users u ON u.id = c.author_id
             WHERE c.post_id = $1
             ORDER BY c.created ASC, c.id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the text of a comment.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_text(
        pool: &PgPool,
        id: DbId,
        text: &str,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "WITH c AS (
                UPDATE comments SET text = $2
                WHERE id = $1
                RETURNING {RETURNING}
             )
             SELECT {PROJECTION} FROM c JOIN users u ON u.id = c.author_id"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(text.trim())
            .fetch_optional(pool)
            .await
    }

    /// Delete a comment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
