use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::analytics_events;
use crate::models::analytics::{AnalyticsAction, AnalyticsEvent, NewAnalyticsEvent};

impl From<analytics_events::Model> for AnalyticsEvent {
    fn from(model: analytics_events::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            garment_id: model.garment_id,
            action: model.action.parse().unwrap_or(AnalyticsAction::Scan),
            metadata: model.metadata.and_then(|m| serde_json::from_str(&m).ok()),
            recorded_at: model.recorded_at,
        }
    }
}

/// Append-only engagement log.
pub struct AnalyticsRepository {
    conn: DatabaseConnection,
}

impl AnalyticsRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn record(&self, input: NewAnalyticsEvent) -> Result<AnalyticsEvent> {
        let active = analytics_events::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            user_id: Set(input.user_id),
            garment_id: Set(input.garment_id),
            action: Set(input.action.as_str().to_string()),
            metadata: Set(input.metadata.map(|m| m.to_string())),
            recorded_at: Set(crate::db::now_timestamp()),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to record analytics event")?;

        Ok(AnalyticsEvent::from(model))
    }

    /// Events for a garment, newest first.
    pub async fn list_for_garment(&self, garment_id: &str) -> Result<Vec<AnalyticsEvent>> {
        let rows = analytics_events::Entity::find()
            .filter(analytics_events::Column::GarmentId.eq(garment_id))
            .order_by_desc(analytics_events::Column::RecordedAt)
            .order_by_desc(analytics_events::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list analytics events")?;

        Ok(rows.into_iter().map(AnalyticsEvent::from).collect())
    }
}
