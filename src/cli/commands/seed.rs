//! Seed command handler

use crate::config::Config;
use crate::db::Store;
use crate::seed::{DEMO_USER_ID, seed_demo_data};

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let summary = seed_demo_data(&store).await?;

    if !summary.seeded {
        println!("Demo data already present (user '{DEMO_USER_ID}' exists).");
        return Ok(());
    }

    println!("✓ Demo catalog loaded");
    if let Some(key) = summary.demo_api_key {
        println!("  Demo user: {DEMO_USER_ID}");
        println!("  API key:   {key}");
        println!("  (shown once; store it now)");
    }

    Ok(())
}
