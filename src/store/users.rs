use sqlx::PgPool;

use crate::auth::{hash_password, verify_password, Credentials};
use crate::error::AppError;
use crate::models::User;

/// Postgres `unique_violation` error code. A duplicate username is detected
/// from this code on insert rather than a lookup beforehand, so two
/// concurrent signups cannot race past an existence check.
const UNIQUE_VIOLATION: &str = "23505";

/// Persists users and validates their credentials.
#[derive(Clone)]
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Hashes the password and inserts a new user row.
    ///
    /// Fails with `AppError::Conflict` when the username is already taken and
    /// `AppError::Database` for any other persistence failure.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<(), AppError> {
        let password_hash = hash_password(&credentials.password)?;

        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES ($1, $2)")
            .bind(&credentials.username)
            .bind(&password_hash)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                Err(AppError::Conflict("Username already exists".into()))
            }
            Err(err) => Err(AppError::Database(err.to_string())),
        }
    }

    /// Checks a username/password pair against the store.
    ///
    /// Returns the username on success. An unknown username and a wrong
    /// password both return `None`, so callers cannot tell which check
    /// failed and usernames cannot be enumerated through the login endpoint.
    pub async fn validate_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<String>, AppError> {
        if let Some(user) = self.find_by_username(&credentials.username).await? {
            if verify_password(&credentials.password, &user.password_hash)? {
                return Ok(Some(user.username));
            }
        }
        Ok(None)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
