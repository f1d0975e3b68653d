//! Domain service for tag scans and the engagement event log.

use thiserror::Error;

use crate::models::analytics::{AnalyticsEvent, NewAnalyticsEvent};
use crate::models::catalog::{GarmentDetail, TagLookup};

/// Errors specific to scan and analytics operations.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Unknown and inactive tags are indistinguishable to the caller.
    #[error("No active tag matches {scan_type} '{value}'")]
    TagNotFound { scan_type: &'static str, value: String },

    #[error("Garment not found: {0}")]
    GarmentNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl ScanError {
    pub(crate) fn tag_not_found(lookup: &TagLookup) -> Self {
        Self::TagNotFound {
            scan_type: lookup.scan_type(),
            value: lookup.value().to_string(),
        }
    }
}

impl From<sea_orm::DbErr> for ScanError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ScanError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for scans.
#[async_trait::async_trait]
pub trait ScanService: Send + Sync {
    /// Resolves a scanned value to the garment its active tag points at.
    ///
    /// Read-only; no analytics are recorded.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::TagNotFound`] for unknown or inactive tags.
    async fn resolve(&self, lookup: &TagLookup) -> Result<GarmentDetail, ScanError>;

    /// Resolves a scan and records a `scan` event for it.
    ///
    /// Failing to record the event is logged and does not fail the scan.
    async fn scan(
        &self,
        lookup: &TagLookup,
        user_id: Option<&str>,
    ) -> Result<GarmentDetail, ScanError>;

    /// Appends an engagement event.
    ///
    /// # Errors
    ///
    /// Returns a `*NotFound` variant if a referenced user or garment is missing.
    async fn track_event(&self, input: NewAnalyticsEvent) -> Result<AnalyticsEvent, ScanError>;

    /// Events recorded for a garment, newest first.
    async fn garment_events(&self, garment_id: &str) -> Result<Vec<AnalyticsEvent>, ScanError>;
}
