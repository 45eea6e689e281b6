//! Argon2id password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::domain::PasswordHash;
use crate::shared::error::AppError;

const INVALID_CREDENTIALS: &str = "kredensial yang Anda masukkan salah";

#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2PasswordHash;

impl Argon2PasswordHash {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHash for Argon2PasswordHash {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
    }

    fn compare(&self, password: &str, hashed: &str) -> Result<(), AppError> {
        let parsed_hash = PhcHash::new(hashed)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::Unauthorized(INVALID_CREDENTIALS.into()))
    }
}
