use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::entities::{artisans, brands};
use crate::models::catalog::{Artisan, Brand, NewArtisan, NewBrand};
use crate::models::{decode_list, encode_list};

impl From<brands::Model> for Brand {
    fn from(model: brands::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            origin: model.origin,
            philosophy: model.philosophy,
            sustainability_practices: decode_list(model.sustainability_practices),
            website: model.website,
            logo_url: model.logo_url,
            is_verified: model.is_verified,
            created_at: model.created_at,
        }
    }
}

impl From<artisans::Model> for Artisan {
    fn from(model: artisans::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            bio: model.bio,
            photo_url: model.photo_url,
            country: model.country,
            region: model.region,
            craft: model.craft,
            years_of_experience: model.years_of_experience,
            generation: model.generation,
            is_verified: model.is_verified,
            created_at: model.created_at,
        }
    }
}

/// Brands and the artisans who make their garments.
pub struct BrandRepository {
    conn: DatabaseConnection,
}

impl BrandRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<Brand>> {
        let rows = brands::Entity::find()
            .order_by_asc(brands::Column::Name)
            .all(&self.conn)
            .await
            .context("Failed to list brands")?;

        Ok(rows.into_iter().map(Brand::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<Brand>> {
        let row = brands::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query brand")?;

        Ok(row.map(Brand::from))
    }

    pub async fn create(&self, input: NewBrand) -> Result<Brand> {
        let active = brands::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(input.name),
            description: Set(input.description),
            origin: Set(input.origin),
            philosophy: Set(input.philosophy),
            sustainability_practices: Set(encode_list(&input.sustainability_practices)),
            website: Set(input.website),
            logo_url: Set(input.logo_url),
            is_verified: Set(input.is_verified),
            created_at: Set(crate::db::now_timestamp()),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert brand")?;

        Ok(Brand::from(model))
    }

    pub async fn list_artisans(&self) -> Result<Vec<Artisan>> {
        let rows = artisans::Entity::find()
            .order_by_asc(artisans::Column::Name)
            .all(&self.conn)
            .await
            .context("Failed to list artisans")?;

        Ok(rows.into_iter().map(Artisan::from).collect())
    }

    pub async fn get_artisan(&self, id: &str) -> Result<Option<Artisan>> {
        let row = artisans::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query artisan")?;

        Ok(row.map(Artisan::from))
    }

    pub async fn create_artisan(&self, input: NewArtisan) -> Result<Artisan> {
        let active = artisans::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(input.name),
            bio: Set(input.bio),
            photo_url: Set(input.photo_url),
            country: Set(input.country),
            region: Set(input.region),
            craft: Set(input.craft),
            years_of_experience: Set(input.years_of_experience),
            generation: Set(input.generation),
            is_verified: Set(input.is_verified),
            created_at: Set(crate::db::now_timestamp()),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert artisan")?;

        Ok(Artisan::from(model))
    }
}
