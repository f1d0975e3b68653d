use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::entities::users;
use crate::models::user::{NewUser, RegisteredUser, User};

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            name: model.name,
            avatar_url: model.avatar_url,
            role: model.role.parse().unwrap_or_default(),
            membership_tier: model.membership_tier.parse().unwrap_or_default(),
            created_at: model.created_at,
        }
    }
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>> {
        let user = users::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")?;

        Ok(user.map(User::from))
    }

    /// Resolve the owner of an API key
    pub async fn get_by_api_key(&self, api_key: &str) -> Result<Option<User>> {
        let user = users::Entity::find()
            .filter(users::Column::ApiKey.eq(api_key))
            .one(&self.conn)
            .await
            .context("Failed to query user by API key")?;

        Ok(user.map(User::from))
    }

    pub async fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.get_by_id(id).await?.is_some())
    }

    /// Create a user with a freshly generated API key.
    pub async fn create(&self, input: NewUser) -> Result<RegisteredUser> {
        self.create_with_id(uuid::Uuid::new_v4().to_string(), input)
            .await
    }

    pub async fn create_with_id(&self, id: String, input: NewUser) -> Result<RegisteredUser> {
        let api_key = generate_api_key();

        let active = users::ActiveModel {
            id: Set(id),
            email: Set(input.email),
            name: Set(input.name),
            avatar_url: Set(input.avatar_url),
            role: Set(input.role.as_str().to_string()),
            membership_tier: Set(input.membership_tier.as_str().to_string()),
            api_key: Set(api_key.clone()),
            created_at: Set(crate::db::now_timestamp()),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert user")?;

        Ok(RegisteredUser {
            user: User::from(model),
            api_key,
        })
    }
}

/// Generate a random API key (64 hex characters).
#[must_use]
pub fn generate_api_key() -> String {
    use rand::Rng;

    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();

    bytes.iter().fold(String::with_capacity(64), |mut acc, b| {
        use std::fmt::Write;
        let _ = write!(acc, "{b:02x}");
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_keys_are_64_hex_chars_and_unique() {
        let a = generate_api_key();
        let b = generate_api_key();

        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn unknown_role_text_falls_back_to_shopper() {
        let model = users::Model {
            id: "u".to_string(),
            email: None,
            name: "Ana".to_string(),
            avatar_url: None,
            role: "admin".to_string(),
            membership_tier: "platinum".to_string(),
            api_key: "k".to_string(),
            created_at: String::new(),
        };

        let user = User::from(model);
        assert_eq!(user.role, crate::models::user::UserRole::Shopper);
        assert_eq!(
            user.membership_tier,
            crate::models::user::MembershipTier::Platinum
        );
    }
}
