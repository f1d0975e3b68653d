//! `SeaORM` implementation of the `UserService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::db::{Store, is_unique_violation};
use crate::models::user::{NewUser, RegisteredUser, User};
use crate::services::user_service::{UserError, UserService};

pub struct SeaOrmUserService {
    store: Store,
}

impl SeaOrmUserService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for SeaOrmUserService {
    async fn register(&self, input: NewUser) -> Result<RegisteredUser, UserError> {
        let email = input.email.clone();

        let registered = match self.store.create_user(input).await {
            Ok(registered) => registered,
            Err(e) if is_unique_violation(&e) => {
                return Err(UserError::EmailTaken(email.unwrap_or_default()));
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            user_id = %registered.user.id,
            role = %registered.user.role,
            "User registered"
        );
        Ok(registered)
    }

    async fn get_user(&self, id: &str) -> Result<User, UserError> {
        self.store
            .get_user(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    async fn authenticate(&self, api_key: &str) -> Result<Option<User>, UserError> {
        if api_key.is_empty() {
            return Ok(None);
        }
        Ok(self.store.verify_api_key(api_key).await?)
    }
}
