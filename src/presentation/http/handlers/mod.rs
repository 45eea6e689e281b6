//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints. Each handler builds its use case
//! from the shared state and wraps the result in the success envelope.

pub mod authentications;
pub mod comments;
pub mod health;
pub mod likes;
pub mod replies;
pub mod threads;
pub mod users;
