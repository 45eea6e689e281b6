//! Reply entities and repository trait.
//!
//! Maps to the `replies` table. Same soft-delete rule as comments.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::validation::{require_non_empty, require_text, PayloadError};
use crate::shared::error::AppError;

/// Content shown in place of a soft-deleted reply.
pub const DELETED_REPLY_PLACEHOLDER: &str = "**balasan telah dihapus**";

/// Raw input for replying to a comment.
#[derive(Debug, Clone, Default)]
pub struct NewReplyPayload {
    pub content: Option<Value>,
    pub comment_id: String,
    pub owner: String,
    pub thread_id: String,
}

/// A validated request to reply to a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReply {
    pub content: String,
    pub comment_id: String,
    pub owner: String,
    pub thread_id: String,
}

impl AddReply {
    pub fn parse(payload: NewReplyPayload) -> Result<Self, PayloadError> {
        let [content] = require_text("NEW_REPLY", [payload.content.as_ref()])?;

        Ok(Self {
            content,
            comment_id: payload.comment_id,
            owner: payload.owner,
            thread_id: payload.thread_id,
        })
    }
}

/// Result of persisting a new reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

/// Reply row joined with its owner's username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRecord {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub is_deleted: bool,
}

/// A reply as rendered under its comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailReply {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

impl DetailReply {
    pub fn new(record: ReplyRecord) -> Result<Self, PayloadError> {
        require_non_empty(
            "DETAIL_REPLY",
            &[&record.id, &record.content, &record.username],
        )?;

        let content = if record.is_deleted {
            DELETED_REPLY_PLACEHOLDER.to_string()
        } else {
            record.content
        };

        Ok(Self {
            id: record.id,
            content,
            date: record.date,
            username: record.username,
        })
    }
}

/// Repository trait for Reply data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, reply: &AddReply) -> Result<AddedReply, AppError>;

    /// Fail with `NotFound` unless the reply exists.
    async fn verify_reply_id(&self, id: &str) -> Result<(), AppError>;

    /// Fail with `Forbidden` unless `owner` wrote the reply.
    async fn verify_reply_owner(&self, id: &str, owner: &str) -> Result<(), AppError>;

    async fn delete_reply(&self, id: &str) -> Result<(), AppError>;

    /// All replies to a comment, oldest first.
    async fn get_replies_by_comment_id(
        &self,
        comment_id: &str,
    ) -> Result<Vec<ReplyRecord>, AppError>;
}
