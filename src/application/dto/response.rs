//! Response DTOs
//!
//! Data structures for API response bodies. Every successful response is
//! wrapped as `{ "status": "success", "data": ... }`.

use serde::Serialize;

use crate::domain::{AddedComment, AddedReply, AddedThread, DetailThread, RegisteredUser};

/// Success envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// `{ "status": "success" }` with no data.
    pub fn empty() -> Self {
        Self {
            status: "success",
            data: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedUserData {
    pub added_user: RegisteredUser,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenData {
    pub access_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: AddedThread,
}

#[derive(Debug, Serialize)]
pub struct ThreadData {
    pub thread: DetailThread,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: AddedComment,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyData {
    pub added_reply: AddedReply,
}
