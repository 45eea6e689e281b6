//! Soft-delete a reply owned by the caller.

use std::sync::Arc;

use crate::domain::{CommentRepository, ReplyRepository, ThreadRepository};
use crate::shared::error::AppError;

#[derive(Debug, Clone)]
pub struct DeleteReplyParams {
    pub thread_id: String,
    pub comment_id: String,
    pub reply_id: String,
}

pub struct DeleteReplyUseCase {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reply_repo: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            reply_repo,
        }
    }

    pub async fn execute(&self, params: DeleteReplyParams, owner: &str) -> Result<(), AppError> {
        self.thread_repo.verify_thread_id(&params.thread_id).await?;
        self.comment_repo.verify_comment_id(&params.comment_id).await?;
        self.reply_repo.verify_reply_id(&params.reply_id).await?;
        self.reply_repo
            .verify_reply_owner(&params.reply_id, owner)
            .await?;

        self.reply_repo.delete_reply(&params.reply_id).await?;
        tracing::info!(reply_id = %params.reply_id, owner, "Reply deleted");

        Ok(())
    }
}
