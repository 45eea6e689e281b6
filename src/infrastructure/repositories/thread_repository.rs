//! Thread Repository Implementation
//!
//! PostgreSQL implementation of the ThreadRepository trait.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{AddThread, AddedThread, ThreadRecord, ThreadRepository};
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

/// Thread joined with its owner's username.
#[derive(Debug, sqlx::FromRow)]
struct ThreadRow {
    id: String,
    title: String,
    body: String,
    date: DateTime<Utc>,
    username: String,
}

impl ThreadRow {
    fn into_record(self) -> ThreadRecord {
        ThreadRecord {
            id: self.id,
            title: self.title,
            body: self.body,
            date: self.date,
            username: self.username,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AddedThreadRow {
    id: String,
    title: String,
    owner: String,
}

/// PostgreSQL thread repository implementation.
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
    ids: Arc<IdGenerator>,
}

impl PgThreadRepository {
    pub fn new(pool: PgPool, ids: Arc<IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn add_thread(&self, thread: &AddThread) -> Result<AddedThread, AppError> {
        let id = self.ids.next_id("thread");

        let row = sqlx::query_as::<_, AddedThreadRow>(
            r#"
            INSERT INTO threads (id, title, body, owner)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, owner
            "#,
        )
        .bind(&id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(&thread.owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(AddedThread {
            id: row.id,
            title: row.title,
            owner: row.owner,
        })
    }

    async fn verify_thread_id(&self, id: &str) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(AppError::NotFound("Thread tidak ditemukan".into()));
        }

        Ok(())
    }

    async fn get_thread_by_id(&self, id: &str) -> Result<ThreadRecord, AppError> {
        let row = sqlx::query_as::<_, ThreadRow>(
            r#"
            SELECT t.id, t.title, t.body, t.date, u.username
            FROM threads t
            INNER JOIN users u ON u.id = t.owner
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ThreadRow::into_record)
            .ok_or_else(|| AppError::NotFound("Thread tidak ditemukan".into()))
    }
}
