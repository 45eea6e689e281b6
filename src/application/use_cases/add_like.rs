//! Toggle a user's like on a comment.

use std::sync::Arc;

use crate::domain::{
    AddLike, CommentRepository, LikeRepository, LikeState, NewLikePayload, ThreadRepository,
};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Path parameters of `PUT /threads/{threadId}/comments/{commentId}/likes`.
#[derive(Debug, Clone)]
pub struct LikeParams {
    pub thread_id: String,
    pub comment_id: String,
}

pub struct AddLikeUseCase {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    like_repo: Arc<dyn LikeRepository>,
}

impl AddLikeUseCase {
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            like_repo,
        }
    }

    /// Like the comment if the user has not liked it yet, otherwise unlike it.
    pub async fn execute(&self, params: LikeParams, user_id: &str) -> Result<LikeState, AppError> {
        self.thread_repo.verify_thread_id(&params.thread_id).await?;
        self.comment_repo.verify_comment_id(&params.comment_id).await?;

        let like = AddLike::parse(NewLikePayload::new(params.comment_id, user_id))?;

        let state = self.like_repo.toggle_like(&like).await?;
        metrics::record_like_toggle(state);
        tracing::debug!(
            comment_id = %like.comment_id,
            user_id = %like.user_id,
            state = state.as_str(),
            "Like toggled"
        );

        Ok(state)
    }
}
