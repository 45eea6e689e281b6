//! Comment Like Repository Implementation
//!
//! PostgreSQL implementation of the LikeRepository trait.
//! Likes are stored one row per (comment, user) with a unique constraint,
//! so a toggle is a delete-or-insert inside one transaction, serialized per
//! pair with a transaction-scoped advisory lock.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::domain::{AddLike, LikeRepository, LikeState};
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

/// PostgreSQL like repository implementation.
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
    ids: Arc<IdGenerator>,
}

impl PgLikeRepository {
    pub fn new(pool: PgPool, ids: Arc<IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    async fn add_like(&self, like: &AddLike) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO comments_like (id, comment_id, user_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (comment_id, user_id) DO NOTHING
            "#,
        )
        .bind(self.ids.next_id("like"))
        .bind(&like.comment_id)
        .bind(&like.user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn verify_like_existing(&self, like: &AddLike) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comments_like WHERE comment_id = $1 AND user_id = $2)",
        )
        .bind(&like.comment_id)
        .bind(&like.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn delete_like(&self, like: &AddLike) -> Result<(), AppError> {
        sqlx::query("DELETE FROM comments_like WHERE comment_id = $1 AND user_id = $2")
            .bind(&like.comment_id)
            .bind(&like.user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn toggle_like(&self, like: &AddLike) -> Result<LikeState, AppError> {
        let mut tx = self.pool.begin().await?;

        // Toggles on the same (comment, user) pair run one at a time.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1::text || ':' || $2::text))")
            .bind(&like.comment_id)
            .bind(&like.user_id)
            .execute(&mut *tx)
            .await?;

        let removed = delete_pair(&mut tx, like).await?;

        let state = if removed > 0 {
            LikeState::Unliked
        } else {
            let inserted = sqlx::query(
                r#"
                INSERT INTO comments_like (id, comment_id, user_id)
                VALUES ($1, $2, $3)
                ON CONFLICT (comment_id, user_id) DO NOTHING
                "#,
            )
            .bind(self.ids.next_id("like"))
            .bind(&like.comment_id)
            .bind(&like.user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

            if inserted > 0 {
                LikeState::Liked
            } else {
                // An add_like outside the lock committed the row first.
                delete_pair(&mut tx, like).await?;
                LikeState::Unliked
            }
        };

        tx.commit().await?;

        Ok(state)
    }

    async fn get_like_count_by_comment_id(&self, comment_id: &str) -> Result<u64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM comments_like WHERE comment_id = $1",
        )
        .bind(comment_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}

async fn delete_pair(tx: &mut Transaction<'_, Postgres>, like: &AddLike) -> Result<u64, AppError> {
    let removed = sqlx::query("DELETE FROM comments_like WHERE comment_id = $1 AND user_id = $2")
        .bind(&like.comment_id)
        .bind(&like.user_id)
        .execute(&mut **tx)
        .await?
        .rows_affected();

    Ok(removed)
}
