//! Assemble a thread with its comments, replies and like counts.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::{
    CommentRecord, CommentRepository, DetailComment, DetailReply, DetailThread, LikeRepository,
    ReplyRepository, ThreadRepository,
};
use crate::shared::error::AppError;

pub struct GetDetailThreadUseCase {
    thread_repo: Arc<dyn ThreadRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reply_repo: Arc<dyn ReplyRepository>,
    like_repo: Arc<dyn LikeRepository>,
}

impl GetDetailThreadUseCase {
    pub fn new(
        thread_repo: Arc<dyn ThreadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        reply_repo: Arc<dyn ReplyRepository>,
        like_repo: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            thread_repo,
            comment_repo,
            reply_repo,
            like_repo,
        }
    }

    /// Comments keep the repository order (oldest first) even though they are
    /// enriched concurrently.
    pub async fn execute(&self, thread_id: &str) -> Result<DetailThread, AppError> {
        let thread = self.thread_repo.get_thread_by_id(thread_id).await?;
        let records = self.comment_repo.get_comments_by_thread_id(thread_id).await?;

        let comments =
            try_join_all(records.into_iter().map(|record| self.detail_comment(record))).await?;

        Ok(DetailThread::new(thread, comments)?)
    }

    async fn detail_comment(&self, record: CommentRecord) -> Result<DetailComment, AppError> {
        let (like_count, replies) = futures::try_join!(
            self.like_repo.get_like_count_by_comment_id(&record.id),
            self.reply_repo.get_replies_by_comment_id(&record.id),
        )?;

        let replies = replies
            .into_iter()
            .map(DetailReply::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DetailComment::new(record, replies, like_count)?)
    }
}
