//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{RegisterUser, RegisteredUser, UserCredentials, UserRepository};
use crate::shared::error::AppError;
use crate::shared::id::IdGenerator;

#[derive(Debug, sqlx::FromRow)]
struct RegisteredUserRow {
    id: String,
    username: String,
    fullname: String,
}

#[derive(Debug, sqlx::FromRow)]
struct CredentialsRow {
    id: String,
    password: String,
}

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
    ids: Arc<IdGenerator>,
}

impl PgUserRepository {
    pub fn new(pool: PgPool, ids: Arc<IdGenerator>) -> Self {
        Self { pool, ids }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn add_user(&self, user: &RegisterUser) -> Result<RegisteredUser, AppError> {
        let row = sqlx::query_as::<_, RegisteredUserRow>(
            r#"
            INSERT INTO users (id, username, password, fullname)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, fullname
            "#,
        )
        .bind(self.ids.next_id("user"))
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.fullname)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::Invariant("username tidak tersedia".to_string())
            }
            _ => AppError::Database(e),
        })?;

        Ok(RegisteredUser {
            id: row.id,
            username: row.username,
            fullname: row.fullname,
        })
    }

    async fn verify_available_username(&self, username: &str) -> Result<(), AppError> {
        let taken = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        if taken {
            return Err(AppError::Invariant("username tidak tersedia".into()));
        }

        Ok(())
    }

    async fn get_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<UserCredentials, AppError> {
        let row = sqlx::query_as::<_, CredentialsRow>(
            "SELECT id, password FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::Invariant("username tidak ditemukan".into()))?;

        Ok(UserCredentials {
            id: row.id,
            password_hash: row.password,
        })
    }
}
