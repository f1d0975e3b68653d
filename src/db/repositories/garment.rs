use std::collections::{HashMap, HashSet};

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::warn;

use crate::entities::{
    artisans, brands, care_instructions, cultural_content, garments, impact_metrics, tag_codes,
};
use crate::models::catalog::{
    Artisan, Brand, CareInstructions, ContentType, CulturalContent, Garment, GarmentCategory,
    GarmentDetail, GarmentFilter, ImpactMetrics, NewCareInstructions, NewCulturalContent,
    NewGarment, NewImpactMetrics, TagCode, matches_search, search_needle,
};
use crate::models::passport::{RecordKind, Resolved, UnresolvedReference};
use crate::models::{decode_list, encode_list};

impl From<garments::Model> for Garment {
    fn from(model: garments::Model) -> Self {
        Self {
            id: model.id,
            brand_id: model.brand_id,
            artisan_id: model.artisan_id,
            name: model.name,
            description: model.description,
            category: model.category.parse().unwrap_or(GarmentCategory::Clothing),
            price: model.price.parse().unwrap_or_default(),
            images: decode_list(model.images),
            origin: model.origin,
            materials: decode_list(model.materials),
            techniques: decode_list(model.techniques),
            is_active: model.is_active,
            is_verified: model.is_verified,
            created_at: model.created_at,
        }
    }
}

impl From<impact_metrics::Model> for ImpactMetrics {
    fn from(model: impact_metrics::Model) -> Self {
        Self {
            id: model.id,
            garment_id: model.garment_id,
            water_saved: model.water_saved,
            co2_offset: model.co2_offset,
            artisans_supported: model.artisans_supported,
            supply_chain_steps: decode_list(model.supply_chain_steps),
            created_at: model.created_at,
        }
    }
}

impl From<cultural_content::Model> for CulturalContent {
    fn from(model: cultural_content::Model) -> Self {
        Self {
            id: model.id,
            garment_id: model.garment_id,
            content_type: model.content_type.parse().unwrap_or(ContentType::History),
            title: model.title,
            content: model.content,
            images: decode_list(model.images),
            is_ai_generated: model.is_ai_generated,
            created_at: model.created_at,
        }
    }
}

impl From<care_instructions::Model> for CareInstructions {
    fn from(model: care_instructions::Model) -> Self {
        Self {
            id: model.id,
            garment_id: model.garment_id,
            washing_instructions: model.washing_instructions,
            materials: model.materials,
            special_care: model.special_care,
            repair_guidance: model.repair_guidance,
            created_at: model.created_at,
        }
    }
}

/// Two fractional digits, always.
pub(crate) fn price_text(price: Decimal) -> String {
    let mut rounded = price.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}

fn distinct<'a>(ids: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).cloned().collect()
}

/// Join garments to their related rows with one query per related table.
///
/// Garments whose brand or artisan row is missing are left out and reported
/// in `unresolved`; input order is preserved for the rest.
pub(crate) async fn load_details<C: ConnectionTrait>(
    conn: &C,
    rows: Vec<garments::Model>,
) -> Result<Resolved<GarmentDetail>> {
    if rows.is_empty() {
        return Ok(Resolved::default());
    }

    let garment_ids = distinct(rows.iter().map(|g| &g.id));
    let brand_ids = distinct(rows.iter().map(|g| &g.brand_id));
    let artisan_ids = distinct(rows.iter().map(|g| &g.artisan_id));

    let brands: HashMap<String, Brand> = brands::Entity::find()
        .filter(brands::Column::Id.is_in(brand_ids))
        .all(conn)
        .await
        .context("Failed to load brands for garments")?
        .into_iter()
        .map(|m| (m.id.clone(), Brand::from(m)))
        .collect();

    let artisans: HashMap<String, Artisan> = artisans::Entity::find()
        .filter(artisans::Column::Id.is_in(artisan_ids))
        .all(conn)
        .await
        .context("Failed to load artisans for garments")?
        .into_iter()
        .map(|m| (m.id.clone(), Artisan::from(m)))
        .collect();

    let mut impact: HashMap<String, ImpactMetrics> = impact_metrics::Entity::find()
        .filter(impact_metrics::Column::GarmentId.is_in(garment_ids.clone()))
        .all(conn)
        .await
        .context("Failed to load impact metrics for garments")?
        .into_iter()
        .map(|m| (m.garment_id.clone(), ImpactMetrics::from(m)))
        .collect();

    let mut care: HashMap<String, CareInstructions> = care_instructions::Entity::find()
        .filter(care_instructions::Column::GarmentId.is_in(garment_ids.clone()))
        .all(conn)
        .await
        .context("Failed to load care instructions for garments")?
        .into_iter()
        .map(|m| (m.garment_id.clone(), CareInstructions::from(m)))
        .collect();

    let mut culture: HashMap<String, Vec<CulturalContent>> = HashMap::new();
    for row in cultural_content::Entity::find()
        .filter(cultural_content::Column::GarmentId.is_in(garment_ids.clone()))
        .order_by_asc(cultural_content::Column::CreatedAt)
        .order_by_asc(cultural_content::Column::Id)
        .all(conn)
        .await
        .context("Failed to load cultural content for garments")?
    {
        culture
            .entry(row.garment_id.clone())
            .or_default()
            .push(CulturalContent::from(row));
    }

    // First active tag wins; otherwise the oldest tag.
    let mut tags: HashMap<String, TagCode> = HashMap::new();
    for row in tag_codes::Entity::find()
        .filter(tag_codes::Column::GarmentId.is_in(garment_ids))
        .order_by_asc(tag_codes::Column::CreatedAt)
        .order_by_asc(tag_codes::Column::Id)
        .all(conn)
        .await
        .context("Failed to load tag codes for garments")?
    {
        let replace = tags
            .get(&row.garment_id)
            .is_none_or(|existing| !existing.is_active && row.is_active);
        if replace {
            tags.insert(row.garment_id.clone(), TagCode::from(row));
        }
    }

    let mut resolved = Resolved::default();
    for row in rows {
        let brand = brands.get(&row.brand_id).cloned();
        let artisan = artisans.get(&row.artisan_id).cloned();

        let (Some(brand), Some(artisan)) = (brand, artisan) else {
            if !brands.contains_key(&row.brand_id) {
                warn!(garment_id = %row.id, brand_id = %row.brand_id, "Garment references a missing brand");
                resolved.unresolved.push(UnresolvedReference {
                    record: RecordKind::Garment,
                    record_id: row.id.clone(),
                    missing: RecordKind::Brand,
                    missing_id: row.brand_id.clone(),
                });
            }
            if !artisans.contains_key(&row.artisan_id) {
                warn!(garment_id = %row.id, artisan_id = %row.artisan_id, "Garment references a missing artisan");
                resolved.unresolved.push(UnresolvedReference {
                    record: RecordKind::Garment,
                    record_id: row.id.clone(),
                    missing: RecordKind::Artisan,
                    missing_id: row.artisan_id.clone(),
                });
            }
            continue;
        };

        let id = row.id.clone();
        resolved.items.push(GarmentDetail {
            garment: Garment::from(row),
            brand,
            artisan,
            impact_metrics: impact.remove(&id),
            cultural_content: culture.remove(&id).unwrap_or_default(),
            care_instructions: care.remove(&id),
            tag_code: tags.remove(&id),
        });
    }

    Ok(resolved)
}

pub struct GarmentRepository {
    conn: DatabaseConnection,
}

impl GarmentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Catalog listing. Category and brand filter in SQL; search is applied
    /// here so that case folding is Unicode-aware.
    pub async fn list(&self, filter: &GarmentFilter) -> Result<Resolved<GarmentDetail>> {
        let mut query = garments::Entity::find();

        if let Some(category) = filter.category {
            query = query.filter(garments::Column::Category.eq(category.as_str()));
        }
        if let Some(brand_id) = &filter.brand_id {
            query = query.filter(garments::Column::BrandId.eq(brand_id.as_str()));
        }

        let mut rows = query
            .order_by_asc(garments::Column::CreatedAt)
            .order_by_asc(garments::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list garments")?;

        if let Some(needle) = search_needle(filter.search.as_deref()) {
            rows.retain(|row| matches_search(&row.name, row.description.as_deref(), &needle));
        }

        load_details(&self.conn, rows).await
    }

    /// Full detail for one garment. `None` when the garment does not exist or
    /// its brand/artisan cannot be joined.
    pub async fn get_detail(&self, id: &str) -> Result<Option<GarmentDetail>> {
        let Some(row) = garments::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query garment")?
        else {
            return Ok(None);
        };

        let mut resolved = load_details(&self.conn, vec![row]).await?;
        Ok(resolved.items.pop())
    }

    pub async fn exists(&self, id: &str) -> Result<bool> {
        let row = garments::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query garment")?;
        Ok(row.is_some())
    }

    pub async fn create(&self, input: NewGarment) -> Result<Garment> {
        let active = garments::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            brand_id: Set(input.brand_id),
            artisan_id: Set(input.artisan_id),
            name: Set(input.name),
            description: Set(input.description),
            category: Set(input.category.as_str().to_string()),
            price: Set(price_text(input.price)),
            images: Set(encode_list(&input.images)),
            origin: Set(input.origin),
            materials: Set(encode_list(&input.materials)),
            techniques: Set(encode_list(&input.techniques)),
            is_active: Set(input.is_active),
            is_verified: Set(input.is_verified),
            created_at: Set(crate::db::now_timestamp()),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert garment")?;

        Ok(Garment::from(model))
    }

    pub async fn create_impact_metrics(&self, input: NewImpactMetrics) -> Result<ImpactMetrics> {
        let active = impact_metrics::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            garment_id: Set(input.garment_id),
            water_saved: Set(input.water_saved),
            co2_offset: Set(input.co2_offset),
            artisans_supported: Set(input.artisans_supported),
            supply_chain_steps: Set(encode_list(&input.supply_chain_steps)),
            created_at: Set(crate::db::now_timestamp()),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert impact metrics")?;

        Ok(ImpactMetrics::from(model))
    }

    pub async fn create_cultural_content(
        &self,
        input: NewCulturalContent,
    ) -> Result<CulturalContent> {
        let active = cultural_content::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            garment_id: Set(input.garment_id),
            content_type: Set(input.content_type.as_str().to_string()),
            title: Set(input.title),
            content: Set(input.content),
            images: Set(encode_list(&input.images)),
            is_ai_generated: Set(input.is_ai_generated),
            created_at: Set(crate::db::now_timestamp()),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert cultural content")?;

        Ok(CulturalContent::from(model))
    }

    pub async fn create_care_instructions(
        &self,
        input: NewCareInstructions,
    ) -> Result<CareInstructions> {
        let active = care_instructions::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            garment_id: Set(input.garment_id),
            washing_instructions: Set(input.washing_instructions),
            materials: Set(input.materials),
            special_care: Set(input.special_care),
            repair_guidance: Set(input.repair_guidance),
            created_at: Set(crate::db::now_timestamp()),
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert care instructions")?;

        Ok(CareInstructions::from(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn price_text_pads_and_rounds_to_cents() {
        assert_eq!(price_text(Decimal::from(285)), "285.00");
        assert_eq!(price_text(Decimal::from_str("15.6").unwrap()), "15.60");
        assert_eq!(price_text(Decimal::from_str("9.999").unwrap()), "10.00");
    }

    #[test]
    fn malformed_price_text_reads_as_zero() {
        let model = garments::Model {
            id: "g".to_string(),
            brand_id: "b".to_string(),
            artisan_id: "a".to_string(),
            name: "Scarf".to_string(),
            description: None,
            category: "accessories".to_string(),
            price: "n/a".to_string(),
            images: None,
            origin: "Japan".to_string(),
            materials: Some(r#"["Cotton"]"#.to_string()),
            techniques: None,
            is_active: true,
            is_verified: false,
            created_at: String::new(),
        };

        let garment = Garment::from(model);
        assert_eq!(garment.price, Decimal::ZERO);
        assert_eq!(garment.materials, vec!["Cotton".to_string()]);
        assert!(garment.images.is_empty());
    }
}
