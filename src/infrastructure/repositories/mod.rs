//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgUserRepository** - account registration and credentials
//! - **PgThreadRepository** - threads
//! - **PgCommentRepository** - comments with soft delete
//! - **PgReplyRepository** - replies with soft delete
//! - **PgLikeRepository** - comment likes with atomic toggle
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use forum_api::infrastructure::repositories::Repositories;
//! use forum_api::shared::id::IdGenerator;
//!
//! let repos = Repositories::postgres(pool, Arc::new(IdGenerator::new(1)));
//! repos.threads.verify_thread_id("thread-123").await?;
//! ```

pub mod comment_repository;
pub mod like_repository;
pub mod reply_repository;
pub mod thread_repository;
pub mod user_repository;

use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::{
    CommentRepository, LikeRepository, ReplyRepository, ThreadRepository, UserRepository,
};
use crate::shared::id::IdGenerator;

pub use comment_repository::PgCommentRepository;
pub use like_repository::PgLikeRepository;
pub use reply_repository::PgReplyRepository;
pub use thread_repository::PgThreadRepository;
pub use user_repository::PgUserRepository;

/// Every repository the use cases depend on, as trait objects.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub threads: Arc<dyn ThreadRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub replies: Arc<dyn ReplyRepository>,
    pub likes: Arc<dyn LikeRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing one pool and id generator.
    pub fn postgres(pool: PgPool, ids: Arc<IdGenerator>) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone(), ids.clone())),
            threads: Arc::new(PgThreadRepository::new(pool.clone(), ids.clone())),
            comments: Arc::new(PgCommentRepository::new(pool.clone(), ids.clone())),
            replies: Arc::new(PgReplyRepository::new(pool.clone(), ids.clone())),
            likes: Arc::new(PgLikeRepository::new(pool, ids)),
        }
    }
}
