//! Tag scan command handler

use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::models::catalog::TagLookup;
use crate::services::{ScanError, ScanService, SeaOrmScanService};

pub async fn cmd_scan(config: &Config, code: &str, nfc: bool, qr: bool) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let service: Arc<dyn ScanService> = Arc::new(SeaOrmScanService::new(store));

    let lookup = if nfc {
        TagLookup::Nfc(code.to_string())
    } else if qr {
        TagLookup::Qr(code.to_string())
    } else {
        TagLookup::Code(code.to_string())
    };

    let detail = match service.resolve(&lookup).await {
        Ok(d) => d,
        Err(e @ ScanError::TagNotFound { .. }) => {
            println!("{e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let garment = &detail.garment;
    println!("{} [{}]", garment.name, garment.category);
    println!("{:-<70}", "");
    println!("ID:       {}", garment.id);
    println!("Brand:    {}", detail.brand.name);
    println!(
        "Artisan:  {} ({}, {})",
        detail.artisan.name, detail.artisan.country, detail.artisan.craft
    );
    println!("Origin:   {}", garment.origin);
    println!("Price:    {}", garment.price);

    if let Some(impact) = &detail.impact_metrics {
        println!();
        println!(
            "Impact:   {} L water saved, {} kg CO2 offset",
            impact.water_saved.unwrap_or(0.0),
            impact.co2_offset.unwrap_or(0.0)
        );
        for step in &impact.supply_chain_steps {
            println!("  {}. {} ({}, {})", step.step, step.title, step.location, step.date);
        }
    }

    if !detail.cultural_content.is_empty() {
        println!();
        for item in &detail.cultural_content {
            println!("  [{}] {}", item.content_type, item.title);
        }
    }

    Ok(())
}
