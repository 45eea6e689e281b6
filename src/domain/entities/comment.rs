//! Comment entities and repository trait.
//!
//! Maps to the `comments` table:
//! - id: VARCHAR(50) PRIMARY KEY
//! - thread_id: VARCHAR(50) NOT NULL REFERENCES threads(id)
//! - content: TEXT NOT NULL
//! - owner: VARCHAR(50) NOT NULL REFERENCES users(id)
//! - date: TIMESTAMPTZ NOT NULL DEFAULT NOW()
//! - is_deleted: BOOLEAN NOT NULL DEFAULT FALSE
//!
//! Comments are never removed; deleting one only sets `is_deleted`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::reply::DetailReply;
use crate::domain::validation::{require_non_empty, require_text, PayloadError};
use crate::shared::error::AppError;

/// Content shown in place of a soft-deleted comment.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// Raw input for creating a comment.
#[derive(Debug, Clone, Default)]
pub struct NewCommentPayload {
    pub content: Option<Value>,
    pub thread_id: String,
    pub owner: String,
}

/// A validated request to comment on a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddComment {
    pub content: String,
    pub thread_id: String,
    pub owner: String,
}

impl AddComment {
    pub fn parse(payload: NewCommentPayload) -> Result<Self, PayloadError> {
        let [content] = require_text("NEW_COMMENT", [payload.content.as_ref()])?;

        Ok(Self {
            content,
            thread_id: payload.thread_id,
            owner: payload.owner,
        })
    }
}

/// Result of persisting a new comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// Comment row joined with its owner's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_deleted: bool,
}

/// A comment as rendered inside a thread detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailComment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub replies: Vec<DetailReply>,
    pub like_count: u64,
}

impl DetailComment {
    /// Build the rendered comment. Soft-deleted content is replaced by
    /// [`DELETED_COMMENT_PLACEHOLDER`].
    pub fn new(
        record: CommentRecord,
        replies: Vec<DetailReply>,
        like_count: u64,
    ) -> Result<Self, PayloadError> {
        require_non_empty(
            "DETAIL_COMMENT",
            &[&record.id, &record.username, &record.content],
        )?;

        let content = if record.is_deleted {
            DELETED_COMMENT_PLACEHOLDER.to_string()
        } else {
            record.content
        };

        Ok(Self {
            id: record.id,
            username: record.username,
            date: record.date,
            content,
            replies,
            like_count,
        })
    }
}

/// Repository trait for Comment data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment.
    async fn add_comment(&self, comment: &AddComment) -> Result<AddedComment, AppError>;

    /// Fail with `NotFound` unless the comment exists.
    async fn verify_comment_id(&self, id: &str) -> Result<(), AppError>;

    /// Fail with `Forbidden` unless `owner` created the comment.
    async fn verify_comment_owner(&self, id: &str, owner: &str) -> Result<(), AppError>;

    /// Mark the comment as deleted.
    async fn delete_comment(&self, id: &str) -> Result<(), AppError>;

    /// All comments of a thread, oldest first.
    async fn get_comments_by_thread_id(
        &self,
        thread_id: &str,
    ) -> Result<Vec<CommentRecord>, AppError>;
}
