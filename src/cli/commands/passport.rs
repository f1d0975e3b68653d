//! Passport command handler

use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{PassportError, PassportService, SeaOrmPassportService};

pub async fn cmd_passport(config: &Config, user_id: &str) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let service: Arc<dyn PassportService> = Arc::new(SeaOrmPassportService::new(store));

    let passport = match service.get_user_passport(user_id).await {
        Ok(p) => p,
        Err(PassportError::UserNotFound(_)) => {
            println!("User '{user_id}' not found.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!(
        "{} [{}] passport",
        passport.user.name, passport.user.membership_tier
    );
    println!("{:-<70}", "");

    let impact = passport.total_impact;
    println!("Water saved:        {:.1} L", impact.water_saved);
    println!("CO2 offset:         {:.1} kg", impact.co2_offset);
    println!("Artisans supported: {}", impact.artisans_supported);
    println!("Countries explored: {}", impact.countries_explored);
    println!();

    if passport.stamps.is_empty() {
        println!("No stamps yet. Scan a garment tag to unlock its passport.");
    } else {
        println!("Stamps ({})", passport.stamps.len());
        for stamp in &passport.stamps {
            let garment = &stamp.garment.garment;
            println!(
                "  • {} ({}) by {}, unlocked {}",
                garment.name, garment.origin, stamp.garment.artisan.name, stamp.stamp.unlocked_at
            );
        }
    }

    if !passport.badges.is_empty() {
        println!();
        println!("Badges ({})", passport.badges.len());
        for badge in &passport.badges {
            println!("  ★ {} [{}]", badge.badge.name, badge.badge.rarity);
        }
    }

    if !passport.unresolved.is_empty() {
        println!();
        println!("Unresolved references ({})", passport.unresolved.len());
        for r in &passport.unresolved {
            println!(
                "  ! {} {} -> missing {} {}",
                r.record, r.record_id, r.missing, r.missing_id
            );
        }
    }

    Ok(())
}
