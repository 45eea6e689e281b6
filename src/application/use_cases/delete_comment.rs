//! Soft-delete a comment owned by the caller.

use std::sync::Arc;

use crate::domain::{CommentRepository, ThreadRepository};
use crate::shared::error::AppError;

#[derive(Debug, Clone)]
pub struct DeleteCommentParams {
    pub thread_id: String,
    pub comment_id: String,
}

pub struct DeleteCommentUseCase {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
        }
    }

    pub async fn execute(&self, params: DeleteCommentParams, owner: &str) -> Result<(), AppError> {
        self.thread_repo.verify_thread_id(&params.thread_id).await?;
        self.comment_repo.verify_comment_id(&params.comment_id).await?;
        self.comment_repo
            .verify_comment_owner(&params.comment_id, owner)
            .await?;

        self.comment_repo.delete_comment(&params.comment_id).await?;
        tracing::info!(comment_id = %params.comment_id, owner, "Comment deleted");

        Ok(())
    }
}
