//! Register a new account.

use std::sync::Arc;

use crate::domain::{NewUserPayload, PasswordHash, RegisterUser, RegisteredUser, UserRepository};
use crate::shared::error::AppError;

pub struct AddUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    password_hash: Arc<dyn PasswordHash>,
}

impl AddUserUseCase {
    pub fn new(user_repo: Arc<dyn UserRepository>, password_hash: Arc<dyn PasswordHash>) -> Self {
        Self {
            user_repo,
            password_hash,
        }
    }

    pub async fn execute(&self, payload: NewUserPayload) -> Result<RegisteredUser, AppError> {
        let mut user = RegisterUser::parse(payload)?;

        self.user_repo
            .verify_available_username(&user.username)
            .await?;
        user.password = self.password_hash.hash(&user.password)?;

        let registered = self.user_repo.add_user(&user).await?;
        tracing::info!(user_id = %registered.id, username = %registered.username, "User registered");

        Ok(registered)
    }
}
