//! `SeaORM` implementation of the `CatalogService` trait.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::db::{Store, is_unique_violation};
use crate::models::catalog::{
    Artisan, Brand, CareInstructions, CulturalContent, Garment, GarmentDetail, GarmentFilter,
    ImpactMetrics, NewArtisan, NewBrand, NewCareInstructions, NewCulturalContent, NewGarment,
    NewImpactMetrics, NewTagCode, TagCode,
};
use crate::services::catalog_service::{CatalogError, CatalogService, describe_taken};

pub struct SeaOrmCatalogService {
    store: Store,
}

impl SeaOrmCatalogService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    async fn require_garment(&self, id: &str) -> Result<(), CatalogError> {
        if self.store.garment_exists(id).await? {
            Ok(())
        } else {
            Err(CatalogError::not_found("Garment", id))
        }
    }
}

/// Maps a unique-constraint failure to `Conflict`, anything else to `Database`.
fn conflict_or(err: anyhow::Error, message: impl FnOnce() -> String) -> CatalogError {
    if is_unique_violation(&err) {
        CatalogError::Conflict(message())
    } else {
        err.into()
    }
}

#[async_trait]
impl CatalogService for SeaOrmCatalogService {
    async fn list_garments(
        &self,
        filter: GarmentFilter,
    ) -> Result<Vec<GarmentDetail>, CatalogError> {
        let resolved = self.store.list_garments(&filter).await?;

        if !resolved.unresolved.is_empty() {
            warn!(
                count = resolved.unresolved.len(),
                "Catalog listing skipped garments with missing references"
            );
        }

        Ok(resolved.items)
    }

    async fn get_garment(&self, id: &str) -> Result<GarmentDetail, CatalogError> {
        self.store
            .get_garment_detail(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Garment", id))
    }

    async fn create_garment(&self, input: NewGarment) -> Result<Garment, CatalogError> {
        if self.store.get_brand(&input.brand_id).await?.is_none() {
            return Err(CatalogError::not_found("Brand", input.brand_id));
        }
        if self.store.get_artisan(&input.artisan_id).await?.is_none() {
            return Err(CatalogError::not_found("Artisan", input.artisan_id));
        }

        let garment = self.store.create_garment(input).await?;
        info!(garment_id = %garment.id, name = %garment.name, "Garment onboarded");
        Ok(garment)
    }

    async fn create_impact_metrics(
        &self,
        input: NewImpactMetrics,
    ) -> Result<ImpactMetrics, CatalogError> {
        self.require_garment(&input.garment_id).await?;

        let garment_id = input.garment_id.clone();
        self.store
            .create_impact_metrics(input)
            .await
            .map_err(|e| {
                conflict_or(e, || {
                    format!("Garment {garment_id} already has impact metrics")
                })
            })
    }

    async fn create_cultural_content(
        &self,
        input: NewCulturalContent,
    ) -> Result<CulturalContent, CatalogError> {
        self.require_garment(&input.garment_id).await?;
        Ok(self.store.create_cultural_content(input).await?)
    }

    async fn create_care_instructions(
        &self,
        input: NewCareInstructions,
    ) -> Result<CareInstructions, CatalogError> {
        self.require_garment(&input.garment_id).await?;

        let garment_id = input.garment_id.clone();
        self.store
            .create_care_instructions(input)
            .await
            .map_err(|e| {
                conflict_or(e, || {
                    format!("Garment {garment_id} already has care instructions")
                })
            })
    }

    async fn create_tag_code(&self, input: NewTagCode) -> Result<TagCode, CatalogError> {
        self.require_garment(&input.garment_id).await?;

        let taken = self.store.find_taken_tag_values(&input).await?;
        if !taken.is_empty() {
            return Err(CatalogError::Conflict(describe_taken(&taken)));
        }

        let code = input.code.clone();
        let tag = self.store.create_tag_code(input).await.map_err(|e| {
            conflict_or(e, || format!("Tag already registered with code '{code}'"))
        })?;

        info!(tag_id = %tag.id, garment_id = %tag.garment_id, "Tag code registered");
        Ok(tag)
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, CatalogError> {
        Ok(self.store.list_brands().await?)
    }

    async fn get_brand(&self, id: &str) -> Result<Brand, CatalogError> {
        self.store
            .get_brand(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Brand", id))
    }

    async fn create_brand(&self, input: NewBrand) -> Result<Brand, CatalogError> {
        let brand = self.store.create_brand(input).await?;
        info!(brand_id = %brand.id, name = %brand.name, "Brand onboarded");
        Ok(brand)
    }

    async fn list_artisans(&self) -> Result<Vec<Artisan>, CatalogError> {
        Ok(self.store.list_artisans().await?)
    }

    async fn create_artisan(&self, input: NewArtisan) -> Result<Artisan, CatalogError> {
        let artisan = self.store.create_artisan(input).await?;
        info!(artisan_id = %artisan.id, name = %artisan.name, "Artisan onboarded");
        Ok(artisan)
    }
}
