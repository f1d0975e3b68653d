//! User command handler

use crate::config::Config;
use crate::db::Store;
use crate::models::user::{MembershipTier, NewUser, UserRole};
use crate::services::{SeaOrmUserService, UserError, UserService};

pub async fn cmd_create_user(
    config: &Config,
    name: String,
    email: Option<String>,
    role: UserRole,
) -> anyhow::Result<()> {
    let name = name.trim().to_string();
    if name.is_empty() {
        anyhow::bail!("Name cannot be empty");
    }

    let store = Store::new(&config.general.database_path).await?;
    let service = SeaOrmUserService::new(store);

    let input = NewUser {
        email: email.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()),
        name,
        avatar_url: None,
        role,
        membership_tier: MembershipTier::default(),
    };

    let registered = match service.register(input).await {
        Ok(r) => r,
        Err(UserError::EmailTaken(email)) => {
            println!("An account with email '{email}' already exists.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("✓ Created {} account", registered.user.role);
    println!("  ID:      {}", registered.user.id);
    println!("  Name:    {}", registered.user.name);
    println!("  API key: {}", registered.api_key);
    println!("  (shown once; store it now)");

    Ok(())
}
