//! Request DTOs
//!
//! Data structures for API request bodies.
//!
//! Fields are kept as raw JSON values so that a missing property and a
//! property of the wrong type reach the domain layer, which reports each
//! with its own message.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    LoginPayload, NewCommentPayload, NewReplyPayload, NewThreadPayload, NewUserPayload,
};

/// `POST /users`
#[derive(Debug, Default, Deserialize)]
pub struct RegisterUserRequest {
    pub username: Option<Value>,
    pub password: Option<Value>,
    pub fullname: Option<Value>,
}

impl From<RegisterUserRequest> for NewUserPayload {
    fn from(body: RegisterUserRequest) -> Self {
        Self {
            username: body.username,
            password: body.password,
            fullname: body.fullname,
        }
    }
}

/// `POST /authentications`
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<Value>,
    pub password: Option<Value>,
}

impl From<LoginRequest> for LoginPayload {
    fn from(body: LoginRequest) -> Self {
        Self {
            username: body.username,
            password: body.password,
        }
    }
}

/// `POST /threads`
#[derive(Debug, Default, Deserialize)]
pub struct PostThreadRequest {
    pub title: Option<Value>,
    pub body: Option<Value>,
}

impl PostThreadRequest {
    pub fn into_payload(self, owner: String) -> NewThreadPayload {
        NewThreadPayload {
            title: self.title,
            body: self.body,
            owner,
        }
    }
}

/// Body for both `POST .../comments` and `POST .../replies`.
#[derive(Debug, Default, Deserialize)]
pub struct PostContentRequest {
    pub content: Option<Value>,
}

impl PostContentRequest {
    pub fn into_comment(self, thread_id: String, owner: String) -> NewCommentPayload {
        NewCommentPayload {
            content: self.content,
            thread_id,
            owner,
        }
    }

    pub fn into_reply(self, thread_id: String, comment_id: String, owner: String) -> NewReplyPayload {
        NewReplyPayload {
            content: self.content,
            comment_id,
            owner,
            thread_id,
        }
    }
}
