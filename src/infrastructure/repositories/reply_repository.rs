//! Reply Repository Implementation
//!
//! PostgreSQL implementation of the ReplyRepository trait.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddReply, AddedReply, ReplyRecord, ReplyRepository};
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

#[derive(Debug, sqlx::FromRow)]
struct ReplyRow {
    id: String,
    content: String,
    date: DateTime<Utc>,
    username: String,
    is_deleted: bool,
}

impl ReplyRow {
    fn into_record(self) -> ReplyRecord {
        ReplyRecord {
            id: self.id,
            content: self.content,
            date: self.date,
            username: self.username,
            is_deleted: self.is_deleted,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AddedReplyRow {
    id: String,
    content: String,
    owner: String,
}

/// PostgreSQL reply repository implementation.
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
    ids: Arc<IdGenerator>,
}

impl PgReplyRepository {
    pub fn new(pool: PgPool, ids: Arc<IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    async fn add_reply(&self, reply: &AddReply) -> Result<AddedReply, AppError> {
        let id = self.ids.next_id("reply");

        let row = sqlx::query_as::<_, AddedReplyRow>(
            r#"
            INSERT INTO replies (id, comment_id, content, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&reply.comment_id)
        .bind(&reply.content)
        .bind(&reply.owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedReply {
            id: row.id,
            content: row.content,
            owner: row.owner,
        })
    }

    async fn verify_reply_id(&self, id: &str) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM replies WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(AppError::NotFound("Reply tidak ditemukan".into()));
        }

        Ok(())
    }

    async fn verify_reply_owner(&self, id: &str, owner: &str) -> Result<(), AppError> {
        let stored_owner = sqlx::query_scalar::<_, String>("SELECT owner FROM replies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Reply tidak ditemukan".into()))?;

        if stored_owner != owner {
            return Err(AppError::Forbidden("Anda tidak dapat menghapus reply ini".into()));
        }

        Ok(())
    }

    async fn delete_reply(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Reply tidak ditemukan".into()));
        }

        Ok(())
    }

    async fn get_replies_by_comment_id(
        &self,
        comment_id: &str,
    ) -> Result<Vec<ReplyRecord>, AppError> {
        let rows = sqlx::query_as::<_, ReplyRow>(
            r#"
            SELECT r.id, r.content, r.date, u.username, r.is_deleted
            FROM replies r
            INNER JOIN users u ON u.id = r.owner
            WHERE r.comment_id = $1
            ORDER BY r.date ASC, r.id ASC
            "#,
        )
        .bind(comment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ReplyRow::into_record).collect())
    }
}
