//! Domain service for user registration and API-key authentication.

use thiserror::Error;

use crate::models::user::{NewUser, RegisteredUser, User};

/// Errors specific to user operations.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for users.
#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Registers a user and issues their API key. The key is only ever
    /// returned here.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::EmailTaken`] if the email is already registered.
    async fn register(&self, input: NewUser) -> Result<RegisteredUser, UserError>;

    /// Gets a public profile.
    async fn get_user(&self, id: &str) -> Result<User, UserError>;

    /// Resolves the user owning an API key, if any.
    async fn authenticate(&self, api_key: &str) -> Result<Option<User>, UserError>;
}
