//! Create a thread.

use std::sync::Arc;

use crate::domain::{AddThread, AddedThread, NewThreadPayload, ThreadRepository};
use crate::shared::error::AppError;

pub struct AddThreadUseCase {
    thread_repo: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repo: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repo }
    }

    pub async fn execute(&self, payload: NewThreadPayload) -> Result<AddedThread, AppError> {
        let thread = AddThread::parse(payload)?;

        let added = self.thread_repo.add_thread(&thread).await?;
        tracing::info!(thread_id = %added.id, owner = %added.owner, "Thread created");

        Ok(added)
    }
}
