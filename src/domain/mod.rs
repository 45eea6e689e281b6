//! # Domain Layer
//!
//! The domain layer contains the forum's entities and the contracts that the
//! infrastructure layer fulfils. It is independent of HTTP and SQL.
//!
//! ## Structure
//!
//! - **entities**: input entities, rendered detail types and repository traits
//! - **validation**: payload checks shared by every entity
//! - **security**: password hashing and access token ports

pub mod entities;
pub mod security;
pub mod validation;

// Re-export commonly used types
pub use entities::*;
pub use security::{AuthenticationTokenManager, PasswordHash};
pub use validation::{PayloadError, PayloadErrorKind};

#[cfg(test)]
pub use security::{MockAuthenticationTokenManager, MockPasswordHash};
