//! Use Cases
//!
//! Each use case composes repository calls in a fixed order and exposes a
//! single `execute`. Every verification fails fast; the one persistence write
//! happens last.
//!
//! ## Available Use Cases
//!
//! - **AddThreadUseCase**: create a thread
//! - **AddCommentUseCase**: comment on an existing thread
//! - **AddReplyUseCase**: reply to an existing comment
//! - **AddLikeUseCase**: toggle a like on a comment
//! - **DeleteCommentUseCase** / **DeleteReplyUseCase**: owner-only soft delete
//! - **GetDetailThreadUseCase**: thread with comments, replies and like counts
//! - **AddUserUseCase** / **LoginUserUseCase**: registration and login

pub mod add_comment;
pub mod add_like;
pub mod add_reply;
pub mod add_thread;
pub mod add_user;
pub mod delete_comment;
pub mod delete_reply;
pub mod get_detail_thread;
pub mod login_user;

pub use add_comment::AddCommentUseCase;
pub use add_like::{AddLikeUseCase, LikeParams};
pub use add_reply::AddReplyUseCase;
pub use add_thread::AddThreadUseCase;
pub use add_user::AddUserUseCase;
pub use delete_comment::{DeleteCommentParams, DeleteCommentUseCase};
pub use delete_reply::{DeleteReplyParams, DeleteReplyUseCase};
pub use get_detail_thread::GetDetailThreadUseCase;
pub use login_user::LoginUserUseCase;
