//! Repository for the `posts` table.
//!
//! Every query returns rows joined with `users` so the author's username is
//! available for serialization. Writes use a CTE so the joined row comes back
//! in the same round trip.

use sqlx::PgPool;
use yatube_core::types::DbId;

use crate::models::post::{CreatePost, PatchPost, Post};

/// Projection over `p` (posts) and `u` (users).
const PROJECTION: &str = "p.id, p.author_id, u.username AS author, p.text, p.pub_date, p.group_id";

/// Columns returned by writes into the `p` CTE.
const RETURNING: &str = "id, author_id, group_id, text, pub_date";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post authored by `author_id`.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreatePost,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                INSERT INTO posts (author_id, group_id, text)
                VALUES ($1, $2, $3)
                RETURNING {RETURNING}
             )
             SELECT {PROJECTION} FROM p JOIN users u ON u.id = p.author_id"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(author_id)
            .bind(input.group)
            .bind(input.text.trim())
            .fetch_one(pool)
            .await
    }

    /// Find a post by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECTION} FROM posts p JOIN users u ON u.id = p.author_id
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every post, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECTION} FROM posts p JOIN users u ON u.id = p.author_id
             ORDER BY p.pub_date ASC, p.id ASC"
        );
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    /// List one window of posts, in the same order as [`PostRepo::list`].
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!(
            "SELECT {PROJECTION} FROM posts p JOIN users u ON u.id = p.author_id
             ORDER BY p.pub_date ASC, p.id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of posts.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(pool)
            .await
    }

    /// Replace the editable fields of a post.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &CreatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                UPDATE posts SET text = $2, group_id = $3
                WHERE id = $1
                RETURNING {RETURNING}
             )
             SELECT {PROJECTION} FROM p JOIN users u ON u.id = p.author_id"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(input.text.trim())
            .bind(input.group)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update. Only fields present in `input` change.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn patch(
        pool: &PgPool,
        id: DbId,
        input: &PatchPost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                UPDATE posts SET
                    text = COALESCE($2, text),
                    group_id = CASE WHEN $3 THEN $4 ELSE group_id END
                WHERE id = $1
                RETURNING {RETURNING}
             )
             SELECT {PROJECTION} FROM p JOIN users u ON u.id = p.author_id"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(input.text.as_deref().map(str::trim))
            .bind(input.group.is_some())
            .bind(input.new_group())
            .fetch_optional(pool)
            .await
    }

    /// Delete a post and, by cascade, its comments. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
