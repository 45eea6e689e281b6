//! User entities and repository trait.
//!
//! Maps to the `users` table:
//! - id: VARCHAR(50) PRIMARY KEY
//! - username: VARCHAR(50) NOT NULL UNIQUE
//! - password: TEXT NOT NULL (Argon2id PHC string)
//! - fullname: TEXT NOT NULL

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::domain::validation::{require_text, PayloadError};
use crate::shared::error::AppError;

/// Maximum username length in characters.
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Raw registration input.
#[derive(Debug, Clone, Default)]
pub struct NewUserPayload {
    pub username: Option<Value>,
    pub password: Option<Value>,
    pub fullname: Option<Value>,
}

/// A validated registration. `password` holds plaintext until the use case
/// swaps it for a hash.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct RegisterUser {
    #[validate(
        length(max = 50, code = "USERNAME_LIMIT_CHAR"),
        custom(function = "validate_username_chars")
    )]
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterUser {
    pub fn parse(payload: NewUserPayload) -> Result<Self, PayloadError> {
        const ENTITY: &str = "REGISTER_USER";

        let [username, password, fullname] = require_text(
            ENTITY,
            [
                payload.username.as_ref(),
                payload.password.as_ref(),
                payload.fullname.as_ref(),
            ],
        )?;

        let user = Self {
            username,
            password,
            fullname,
        };

        user.validate()
            .map_err(|errors| PayloadError::from_validation(ENTITY, &errors))?;

        Ok(user)
    }
}

fn validate_username_chars(username: &str) -> Result<(), ValidationError> {
    if username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(())
    } else {
        Err(ValidationError::new("USERNAME_CONTAIN_RESTRICTED_CHARACTER"))
    }
}

/// Result of persisting a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

/// Raw login input.
#[derive(Debug, Clone, Default)]
pub struct LoginPayload {
    pub username: Option<Value>,
    pub password: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin {
    pub username: String,
    pub password: String,
}

impl UserLogin {
    pub fn parse(payload: LoginPayload) -> Result<Self, PayloadError> {
        let [username, password] = require_text(
            "USER_LOGIN",
            [payload.username.as_ref(), payload.password.as_ref()],
        )?;

        Ok(Self { username, password })
    }
}

/// Stored credentials for a username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub id: String,
    pub password_hash: String,
}

/// Repository trait for User data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user whose password has already been hashed.
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser, AppError>;

    /// Fail with `Invariant` if the username is taken.
    async fn verify_available_username(&self, username: &str) -> Result<(), AppError>;

    /// Fail with `Invariant` if the username is unknown.
    async fn get_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<UserCredentials, AppError>;
}
