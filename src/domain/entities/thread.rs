//! Thread entities and repository trait.
//!
//! Maps to the `threads` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::comment::DetailComment;
use crate::domain::validation::{require_non_empty, require_text, PayloadError};
use crate::shared::error::AppError;

/// Raw input for creating a thread.
#[derive(Debug, Clone, Default)]
pub struct NewThreadPayload {
    pub title: Option<Value>,
    pub body: Option<Value>,
    pub owner: String,
}

/// A validated request to create a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl AddThread {
    pub fn parse(payload: NewThreadPayload) -> Result<Self, PayloadError> {
        let [title, body] =
            require_text("NEW_THREAD", [payload.title.as_ref(), payload.body.as_ref()])?;

        Ok(Self {
            title,
            body,
            owner: payload.owner,
        })
    }
}

/// Result of persisting a new thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

/// Thread row joined with its owner's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// Fully assembled thread as returned by `GET /threads/{threadId}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<DetailComment>,
}

impl DetailThread {
    pub fn new(record: ThreadRecord, comments: Vec<DetailComment>) -> Result<Self, PayloadError> {
        require_non_empty(
            "DETAIL_THREAD",
            &[&record.id, &record.title, &record.body, &record.username],
        )?;

        Ok(Self {
            id: record.id,
            title: record.title,
            body: record.body,
            date: record.date,
            username: record.username,
            comments,
        })
    }
}

/// Repository trait for Thread data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persist a new thread.
    async fn add_thread(&self, thread: &AddThread) -> Result<AddedThread, AppError>;

    /// Fail with `NotFound` unless the thread exists.
    async fn verify_thread_id(&self, id: &str) -> Result<(), AppError>;

    /// Load a thread together with its owner's username.
    async fn get_thread_by_id(&self, id: &str) -> Result<ThreadRecord, AppError>;
}
