//! List garments command handler

use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::models::catalog::{GarmentCategory, GarmentFilter};
use crate::services::{CatalogService, SeaOrmCatalogService};

pub async fn cmd_list_garments(
    config: &Config,
    category: Option<&str>,
    brand: Option<&str>,
    search: Option<&str>,
) -> anyhow::Result<()> {
    let category = category
        .map(str::parse::<GarmentCategory>)
        .transpose()
        .map_err(anyhow::Error::msg)?;

    let filter = GarmentFilter {
        category,
        brand_id: brand.map(str::to_string),
        search: search.map(str::to_string),
    };

    let store = Store::new(&config.general.database_path).await?;
    let service: Arc<dyn CatalogService> = Arc::new(SeaOrmCatalogService::new(store));
    let garments = service.list_garments(filter).await?;

    if garments.is_empty() {
        println!("No garments match.");
        return Ok(());
    }

    println!("Garments ({} total)", garments.len());
    println!("{:-<70}", "");

    for detail in garments {
        let g = &detail.garment;
        let tag = detail
            .tag_code
            .as_ref()
            .map_or_else(|| "no tag".to_string(), |t| t.code.clone());
        println!("• {} [{}] {}", g.name, g.category, g.price);
        println!(
            "  ID: {} | Brand: {} | Origin: {} | Tag: {}",
            g.id, detail.brand.name, g.origin, tag
        );
    }

    Ok(())
}
