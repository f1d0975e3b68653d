use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{badges, user_badges};
use crate::models::passport::{Badge, NewBadge, UserBadge};

impl From<badges::Model> for Badge {
    fn from(model: badges::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            icon_url: model.icon_url,
            required_stamps: model.required_stamps,
            required_countries: model.required_countries,
            rarity: model
                .rarity
                .and_then(|r| r.parse().ok())
                .unwrap_or_default(),
            created_at: model.created_at,
        }
    }
}

impl From<user_badges::Model> for UserBadge {
    fn from(model: user_badges::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            badge_id: model.badge_id,
            earned_at: model.earned_at,
        }
    }
}

pub struct BadgeRepository {
    conn: DatabaseConnection,
}

impl BadgeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<Badge>> {
        let rows = badges::Entity::find()
            .order_by_asc(badges::Column::CreatedAt)
            .order_by_asc(badges::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list badges")?;

        Ok(rows.into_iter().map(Badge::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<Badge>> {
        let row = badges::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query badge")?;

        Ok(row.map(Badge::from))
    }

    pub async fn create(&self, input: NewBadge) -> Result<Badge> {
        let active = badges::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(input.name),
            description: Set(input.description),
            icon_url: Set(input.icon_url),
            required_stamps: Set(input.required_stamps),
            required_countries: Set(input.required_countries),
            rarity: Set(Some(input.rarity.as_str().to_string())),
            created_at: Set(crate::db::now_timestamp()),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert badge")?;

        Ok(Badge::from(model))
    }

    pub async fn is_awarded(&self, user_id: &str, badge_id: &str) -> Result<bool> {
        let row = user_badges::Entity::find()
            .filter(user_badges::Column::UserId.eq(user_id))
            .filter(user_badges::Column::BadgeId.eq(badge_id))
            .one(&self.conn)
            .await
            .context("Failed to check awarded badge")?;

        Ok(row.is_some())
    }

    pub async fn award(&self, user_id: &str, badge_id: &str) -> Result<UserBadge> {
        let active = user_badges::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            badge_id: Set(badge_id.to_string()),
            earned_at: Set(crate::db::now_timestamp()),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to award badge")?;

        Ok(UserBadge::from(model))
    }
}
