//! Security ports used by the authentication use cases and middleware.

use crate::shared::error::AppError;

/// One-way password hashing.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHash: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AppError>;

    /// Fail with `Unauthorized` unless `password` matches `hashed`.
    fn compare(&self, password: &str, hashed: &str) -> Result<(), AppError>;
}

/// Issues and verifies access tokens carrying a user id.
#[cfg_attr(test, mockall::automock)]
pub trait AuthenticationTokenManager: Send + Sync {
    fn create_access_token(&self, user_id: &str) -> Result<String, AppError>;

    /// Return the user id carried by a valid token.
    fn verify_access_token(&self, token: &str) -> Result<String, AppError>;
}
