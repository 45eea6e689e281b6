//! Reply to a comment.

use std::sync::Arc;

use crate::domain::{
    AddReply, AddedReply, CommentRepository, NewReplyPayload, ReplyRepository, ThreadRepository,
};
use crate::shared::error::AppError;

pub struct AddReplyUseCase {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
}

impl AddReplyUseCase {
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

    pub async fn execute(&self, payload: NewReplyPayload) -> Result<AddedReply, AppError> {
        let reply = AddReply::parse(payload)?;

        self.thread_repo.verify_thread_id(&reply.thread_id).await?;
        self.comment_repo.verify_comment_id(&reply.comment_id).await?;

        let added = self.reply_repo.add_reply(&reply).await?;
        tracing::info!(
            comment_id = %reply.comment_id,
            reply_id = %added.id,
            "Reply added"
        );

        Ok(added)
    }
}
