//! `SeaORM` implementation of the `ScanService` trait.

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::db::Store;
use crate::models::analytics::{AnalyticsAction, AnalyticsEvent, NewAnalyticsEvent};
use crate::models::catalog::{GarmentDetail, TagLookup};
use crate::services::scan_service::{ScanError, ScanService};

pub struct SeaOrmScanService {
    store: Store,
}

impl SeaOrmScanService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ScanService for SeaOrmScanService {
    async fn resolve(&self, lookup: &TagLookup) -> Result<GarmentDetail, ScanError> {
        let tag = self
            .store
            .find_active_tag(lookup)
            .await?
            .ok_or_else(|| ScanError::tag_not_found(lookup))?;

        self.store
            .get_garment_detail(&tag.garment_id)
            .await?
            .ok_or(ScanError::GarmentNotFound(tag.garment_id))
    }

    async fn scan(
        &self,
        lookup: &TagLookup,
        user_id: Option<&str>,
    ) -> Result<GarmentDetail, ScanError> {
        let detail = self.resolve(lookup).await?;
        debug!(scan_type = lookup.scan_type(), garment_id = %detail.garment.id, "Tag resolved");

        let event = NewAnalyticsEvent {
            user_id: user_id.map(str::to_string),
            garment_id: Some(detail.garment.id.clone()),
            action: AnalyticsAction::Scan,
            metadata: Some(json!({
                "scanType": lookup.scan_type(),
                "code": lookup.value(),
            })),
        };
        if let Err(e) = self.store.record_event(event).await {
            warn!(error = %e, garment_id = %detail.garment.id, "Failed to record scan event");
        }

        Ok(detail)
    }

    async fn track_event(&self, input: NewAnalyticsEvent) -> Result<AnalyticsEvent, ScanError> {
        if let Some(user_id) = &input.user_id
            && !self.store.user_exists(user_id).await?
        {
            return Err(ScanError::UserNotFound(user_id.clone()));
        }
        if let Some(garment_id) = &input.garment_id
            && !self.store.garment_exists(garment_id).await?
        {
            return Err(ScanError::GarmentNotFound(garment_id.clone()));
        }

        Ok(self.store.record_event(input).await?)
    }

    async fn garment_events(&self, garment_id: &str) -> Result<Vec<AnalyticsEvent>, ScanError> {
        if !self.store.garment_exists(garment_id).await? {
            return Err(ScanError::GarmentNotFound(garment_id.to_string()));
        }
        Ok(self.store.list_garment_events(garment_id).await?)
    }
}
