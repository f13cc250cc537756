//! Repository for the `follows` table.

use sqlx::PgPool;
use yatube_core::search::contains_pattern;
use yatube_core::types::DbId;

use crate::models::follow::Follow;

/// Projection over `f` (follows), `u` (follower) and `t` (followed user).
const PROJECTION: &str = "f.id, f.user_id, u.username AS \"user\", \
                          f.following_id, t.username AS following, f.created_at";

/// Provides create and scoped list operations for follow edges.
pub struct FollowRepo;

impl FollowRepo {
    /// Insert the edge `user_id -> following_id`.
    ///
    /// Returns `None` if the edge already exists. Self-follows violate
    /// `ck_follows_not_self`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        following_id: DbId,
    ) -> Result<Option<Follow>, sqlx::Error> {
        let query = format!(
            "WITH f AS (
                INSERT INTO follows (user_id, following_id)
                VALUES ($1, $2)
                ON CONFLICT ON CONSTRAINT uq_follows_user_following DO NOTHING
                RETURNING id, user_id, following_id, created_at
             )
             SELECT {PROJECTION} FROM f
             JOIN users u ON u.id = f.user_id
             JOIN users t ON t.id = f.following_id"
        );
        sqlx::query_as::<_, Follow>(&query)
            .bind(user_id)
            .bind(following_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether `user_id` already follows `following_id`.
    pub async fn exists(
        pool: &PgPool,
        user_id: DbId,
        following_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM follows WHERE user_id = $1 AND following_id = $2)",
        )
        .bind(user_id)
        .bind(following_id)
        .fetch_one(pool)
        .await
    }

    /// List the outgoing edges of `user_id`.
    ///
    /// Each entry of `terms` must appear, case-insensitively, in the followed
    /// user's username. An empty slice applies no filter.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        terms: &[String],
    ) -> Result<Vec<Follow>, sqlx::Error> {
        let filters: String = (0..terms.len())
            .map(|i| format!(" AND t.username ILIKE ${}", i + 2))
            .collect();
        let query = format!(
            "SELECT {PROJECTION} FROM follows f
             JOIN users u ON u.id = f.user_id
             JOIN users t ON t.id = f.following_id
             WHERE f.user_id = $1{filters}
             ORDER BY f.id ASC"
        );

        let mut q = sqlx::query_as::<_, Follow>(&query).bind(user_id);
        for term in terms {
            q = q.bind(contains_pattern(term));
        }
        q.fetch_all(pool).await
    }
}
