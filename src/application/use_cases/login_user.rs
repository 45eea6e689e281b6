//! Exchange credentials for an access token.

use std::sync::Arc;

use crate::domain::{
    AuthenticationTokenManager, LoginPayload, PasswordHash, UserLogin, UserRepository,
};
use crate::shared::error::AppError;

pub struct LoginUserUseCase {
    user_repo: Arc<dyn UserRepository>,
    password_hash: Arc<dyn PasswordHash>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl LoginUserUseCase {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hash: Arc<dyn PasswordHash>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            user_repo,
            password_hash,
            token_manager,
        }
    }

    /// Returns a signed access token for the user.
    pub async fn execute(&self, payload: LoginPayload) -> Result<String, AppError> {
        let login = UserLogin::parse(payload)?;

        let credentials = self
            .user_repo
            .get_credentials_by_username(&login.username)
            .await?;
        self.password_hash
            .compare(&login.password, &credentials.password_hash)?;

        let token = self.token_manager.create_access_token(&credentials.id)?;
        tracing::info!(user_id = %credentials.id, "User logged in");

        Ok(token)
    }
}
