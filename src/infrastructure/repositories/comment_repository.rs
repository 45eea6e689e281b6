//! Comment Repository Implementation
//!
//! PostgreSQL implementation of the CommentRepository trait. Deleting a
//! comment only flips `is_deleted`; rows are kept so the thread detail can
//! render a placeholder in their place.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddComment, AddedComment, CommentRecord, CommentRepository};
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

/// Comment joined with its owner's username.
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: String,
    username: String,
    date: DateTime<Utc>,
    content: String,
    is_deleted: bool,
}

impl CommentRow {
    fn into_record(self) -> CommentRecord {
        CommentRecord {
            id: self.id,
            username: self.username,
            date: self.date,
            content: self.content,
            is_deleted: self.is_deleted,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AddedCommentRow {
    id: String,
    content: String,
    owner: String,
}

/// PostgreSQL comment repository implementation.
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
    ids: Arc<IdGenerator>,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool, ids: Arc<IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn add_comment(&self, comment: &AddComment) -> Result<AddedComment, AppError> {
        let id = self.ids.next_id("comment");

        let row = sqlx::query_as::<_, AddedCommentRow>(
            r#"
            INSERT INTO comments (id, thread_id, content, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&comment.thread_id)
        .bind(&comment.content)
        .bind(&comment.owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedComment {
            id: row.id,
            content: row.content,
            owner: row.owner,
        })
    }

    async fn verify_comment_id(&self, id: &str) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(AppError::NotFound("Comment tidak ditemukan".into()));
        }

        Ok(())
    }

    async fn verify_comment_owner(&self, id: &str, owner: &str) -> Result<(), AppError> {
        let stored_owner = sqlx::query_scalar::<_, String>("SELECT owner FROM comments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment tidak ditemukan".into()))?;

        if stored_owner != owner {
            return Err(AppError::Forbidden(
                "Anda tidak dapat menghapus comment ini".into(),
            ));
        }

        Ok(())
    }

    async fn delete_comment(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Comment tidak ditemukan".into()));
        }

        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentRecord>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, u.username, c.date, c.content, c.is_deleted
            FROM comments c
            INNER JOIN users u ON u.id = c.owner
            WHERE c.thread_id = $1
            ORDER BY c.date ASC, c.id ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_record).collect())
    }
}
