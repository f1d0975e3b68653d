use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::stamps;
use crate::models::passport::{NewStamp, Stamp};

impl From<stamps::Model> for Stamp {
    fn from(model: stamps::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            garment_id: model.garment_id,
            tag_code_id: model.tag_code_id,
            unlocked_at: model.unlocked_at,
            scan_location: model.scan_location,
        }
    }
}

pub struct StampRepository {
    conn: DatabaseConnection,
}

impl StampRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Stamps for a user, oldest unlock first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Stamp>> {
        let rows = stamps::Entity::find()
            .filter(stamps::Column::UserId.eq(user_id))
            .order_by_asc(stamps::Column::UnlockedAt)
            .order_by_asc(stamps::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list stamps for user")?;

        Ok(rows.into_iter().map(Stamp::from).collect())
    }

    pub async fn exists_for(&self, user_id: &str, garment_id: &str) -> Result<bool> {
        let row = stamps::Entity::find()
            .filter(stamps::Column::UserId.eq(user_id))
            .filter(stamps::Column::GarmentId.eq(garment_id))
            .one(&self.conn)
            .await
            .context("Failed to check for existing stamp")?;

        Ok(row.is_some())
    }

    pub async fn create(&self, input: NewStamp) -> Result<Stamp> {
        let active = stamps::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            user_id: Set(input.user_id),
            garment_id: Set(input.garment_id),
            tag_code_id: Set(input.tag_code_id),
            unlocked_at: Set(crate::db::now_timestamp()),
            scan_location: Set(input.scan_location),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert stamp")?;

        Ok(Stamp::from(model))
    }
}
