//! Domain service for the garment catalog and brand onboarding.

use thiserror::Error;

use crate::models::catalog::{
    Artisan, Brand, CareInstructions, CulturalContent, Garment, GarmentDetail, GarmentFilter,
    ImpactMetrics, NewArtisan, NewBrand, NewCareInstructions, NewCulturalContent, NewGarment,
    NewImpactMetrics, NewTagCode, TagCode,
};

/// Errors specific to catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl CatalogError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

impl From<sea_orm::DbErr> for CatalogError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Domain service trait for catalog reads and onboarding writes.
#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    /// Lists garments matching a filter, joined to full detail.
    ///
    /// `category` and `brand_id` match exactly; `search` is a case-insensitive
    /// substring match on name or description.
    async fn list_garments(&self, filter: GarmentFilter)
    -> Result<Vec<GarmentDetail>, CatalogError>;

    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the garment does not exist.
    async fn get_garment(&self, id: &str) -> Result<GarmentDetail, CatalogError>;

    /// Creates a garment under an existing brand and artisan.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the brand or artisan is missing.
    async fn create_garment(&self, input: NewGarment) -> Result<Garment, CatalogError>;

    /// Attaches impact metrics; a garment has at most one set.
    async fn create_impact_metrics(
        &self,
        input: NewImpactMetrics,
    ) -> Result<ImpactMetrics, CatalogError>;

    async fn create_cultural_content(
        &self,
        input: NewCulturalContent,
    ) -> Result<CulturalContent, CatalogError>;

    /// Attaches care instructions; a garment has at most one set.
    async fn create_care_instructions(
        &self,
        input: NewCareInstructions,
    ) -> Result<CareInstructions, CatalogError>;

    /// Registers a physical tag for a garment.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Conflict`] if the code, NFC UID or QR string is taken.
    async fn create_tag_code(&self, input: NewTagCode) -> Result<TagCode, CatalogError>;

    async fn list_brands(&self) -> Result<Vec<Brand>, CatalogError>;

    async fn get_brand(&self, id: &str) -> Result<Brand, CatalogError>;

    async fn create_brand(&self, input: NewBrand) -> Result<Brand, CatalogError>;

    async fn list_artisans(&self) -> Result<Vec<Artisan>, CatalogError>;

    async fn create_artisan(&self, input: NewArtisan) -> Result<Artisan, CatalogError>;
}

/// Formats taken tag values for a conflict message.
#[must_use]
pub fn describe_taken(taken: &[(&'static str, String)]) -> String {
    let fields = taken
        .iter()
        .map(|(field, value)| format!("{field} '{value}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("Tag already registered with {fields}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taken_values_are_listed_in_order() {
        let taken = vec![
            ("code", "SUB-GT-HDF-001".to_string()),
            ("nfcUid", "nfc-1".to_string()),
        ];

        assert_eq!(
            describe_taken(&taken),
            "Tag already registered with code 'SUB-GT-HDF-001', nfcUid 'nfc-1'"
        );
    }

    #[test]
    fn not_found_names_the_missing_kind() {
        let err = CatalogError::not_found("Brand", "brand-9");
        assert_eq!(err.to_string(), "Brand not found: brand-9");
    }
}
