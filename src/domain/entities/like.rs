//! Comment Like entity and repository trait.
//!
//! Maps to the `comments_like` table:
//! - id: VARCHAR(50) PRIMARY KEY
//! - comment_id: VARCHAR(50) NOT NULL REFERENCES comments(id) ON DELETE CASCADE
//! - user_id: VARCHAR(50) NOT NULL REFERENCES users(id) ON DELETE CASCADE
//! - date: TIMESTAMPTZ NOT NULL DEFAULT NOW()
//!
//! The unique constraint on (comment_id, user_id) ensures
//! one like per user per comment.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::domain::validation::{require_text, PayloadError};
use crate::shared::error::AppError;

/// Raw input identifying a like.
#[derive(Debug, Clone, Default)]
pub struct NewLikePayload {
    pub comment_id: Option<Value>,
    pub user_id: Option<Value>,
}

impl NewLikePayload {
    pub fn new(comment_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            comment_id: Some(Value::String(comment_id.into())),
            user_id: Some(Value::String(user_id.into())),
        }
    }
}

/// A (comment, user) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddLike {
    pub comment_id: String,
    pub user_id: String,
}

impl AddLike {
    pub fn parse(payload: NewLikePayload) -> Result<Self, PayloadError> {
        let [comment_id, user_id] = require_text(
            "NEW_LIKE",
            [payload.comment_id.as_ref(), payload.user_id.as_ref()],
        )?;

        Ok(Self {
            comment_id,
            user_id,
        })
    }
}

/// State of a (comment, user) like after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeState {
    Liked,
    Unliked,
}

impl LikeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Liked => "liked",
            Self::Unliked => "unliked",
        }
    }
}

/// Repository trait for comment like data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Insert a like. Idempotent: an existing like is left untouched.
    async fn add_like(&self, like: &AddLike) -> Result<(), AppError>;

    /// Check whether the user currently likes the comment.
    async fn verify_like_existing(&self, like: &AddLike) -> Result<bool, AppError>;

    /// Remove a like. Silently succeeds if there is none.
    async fn delete_like(&self, like: &AddLike) -> Result<(), AppError>;

    /// Flip the like for this pair in a single atomic write and report the
    /// resulting state.
    async fn toggle_like(&self, like: &AddLike) -> Result<LikeState, AppError>;

    async fn get_like_count_by_comment_id(&self, comment_id: &str) -> Result<u64, AppError>;
}
