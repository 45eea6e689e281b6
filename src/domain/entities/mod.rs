//! # Domain Entities
//!
//! Core domain entities of the forum.
//!
//! ## Core Entities
//!
//! - **Thread**: a top-level discussion topic
//! - **Comment**: a reply attached directly to a thread
//! - **Reply**: a reply attached to a comment
//! - **Like**: one user's like on one comment
//! - **User**: an account that owns threads, comments and replies
//!
//! Each module holds the `Add*` input entity (validated from a raw payload),
//! the record types returned by persistence, the `Detail*` rendering types,
//! and the repository trait implemented in the infrastructure layer.

mod comment;
mod like;
mod reply;
mod thread;
mod user;

pub use thread::{
    AddThread, AddedThread, DetailThread, NewThreadPayload, ThreadRecord, ThreadRepository,
};

pub use comment::{
    AddComment, AddedComment, CommentRecord, CommentRepository, DetailComment,
    NewCommentPayload, DELETED_COMMENT_PLACEHOLDER,
};

pub use reply::{
    AddReply, AddedReply, DetailReply, NewReplyPayload, ReplyRecord, ReplyRepository,
    DELETED_REPLY_PLACEHOLDER,
};

pub use like::{AddLike, LikeRepository, LikeState, NewLikePayload};

pub use user::{
    LoginPayload, NewUserPayload, RegisterUser, RegisteredUser, UserCredentials, UserLogin,
    UserRepository, MAX_USERNAME_LENGTH,
};

#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use like::MockLikeRepository;
#[cfg(test)]
pub use reply::MockReplyRepository;
#[cfg(test)]
pub use thread::MockThreadRepository;
#[cfg(test)]
pub use user::MockUserRepository;
