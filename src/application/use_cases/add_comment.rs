//! Comment on a thread.

use std::sync::Arc;

use crate::domain::{
    AddComment, AddedComment, CommentRepository, NewCommentPayload, ThreadRepository,
};
use crate::shared::error::AppError;

pub struct AddCommentUseCase {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
        }
    }

    pub async fn execute(&self, payload: NewCommentPayload) -> Result<AddedComment, AppError> {
        let comment = AddComment::parse(payload)?;

        self.thread_repo.verify_thread_id(&comment.thread_id).await?;

        let added = self.comment_repo.add_comment(&comment).await?;
        tracing::info!(
            thread_id = %comment.thread_id,
            comment_id = %added.id,
            "Comment added"
        );

        Ok(added)
    }
}
