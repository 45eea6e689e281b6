//! HS256 access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtSettings;
use crate::domain::AuthenticationTokenManager;
use crate::shared::error::AppError;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

pub struct JwtTokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_age: Duration,
}

impl JwtTokenManager {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            access_token_age: Duration::seconds(settings.access_token_age_secs),
        }
    }
}

impl AuthenticationTokenManager for JwtTokenManager {
    fn create_access_token(&self, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + self.access_token_age).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }

    fn verify_access_token(&self, token: &str) -> Result<String, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::Unauthorized("access token kedaluwarsa".into())
                }
                _ => AppError::Unauthorized("access token tidak valid".into()),
            })?;

        Ok(token_data.claims.sub)
    }
}
