//! CLI module - Command-line interface for Subbi
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::user::UserRole;

/// Subbi - Garment Passport Service
/// Digital passports for artisan-made garments
#[derive(Parser)]
#[command(name = "subbi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config.toml (defaults to the standard lookup locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    #[command(alias = "web")]
    Serve,

    /// Load the demo catalog into the database
    Seed,

    /// Print a user's passport
    #[command(alias = "p")]
    Passport {
        /// User ID
        user_id: String,
    },

    /// Resolve a tag to its garment (printed code by default)
    Scan {
        /// Tag value
        code: String,
        /// Treat the value as an NFC chip UID
        #[arg(long, conflicts_with = "qr")]
        nfc: bool,
        /// Treat the value as a QR payload
        #[arg(long)]
        qr: bool,
    },

    /// List catalog garments
    #[command(alias = "ls")]
    Garments {
        /// Filter by category (clothing, accessories, textiles, jewelry)
        #[arg(long)]
        category: Option<String>,
        /// Filter by brand ID
        #[arg(long)]
        brand: Option<String>,
        /// Case-insensitive name/description search
        #[arg(long)]
        search: Option<String>,
    },

    /// Manage accounts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },

    /// Write a default config file
    #[command(alias = "--init")]
    Init,
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create an account and print its API key
    Create {
        /// Display name
        name: String,
        #[arg(long)]
        email: Option<String>,
        /// shopper or brand; brand accounts can only be created here
        #[arg(long, default_value = "shopper")]
        role: UserRole,
    },
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::parse_from(["subbi"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn scan_flags_are_exclusive() {
        assert!(Cli::try_parse_from(["subbi", "scan", "X", "--nfc", "--qr"]).is_err());

        let cli = Cli::parse_from(["subbi", "scan", "SUB-JP-ITG-003", "--qr"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Scan { nfc: false, qr: true, .. })
        ));
    }

    #[test]
    fn garments_filters_parse() {
        let cli = Cli::parse_from([
            "subbi",
            "--config",
            "/tmp/subbi.toml",
            "garments",
            "--category",
            "clothing",
            "--search",
            "indigo",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/subbi.toml")));
        match cli.command {
            Some(Commands::Garments {
                category,
                brand,
                search,
            }) => {
                assert_eq!(category.as_deref(), Some("clothing"));
                assert_eq!(brand, None);
                assert_eq!(search.as_deref(), Some("indigo"));
            }
            _ => panic!("expected garments command"),
        }
    }

    #[test]
    fn user_create_parses_role() {
        let cli = Cli::parse_from(["subbi", "user", "create", "Threads Admin", "--role", "brand"]);
        match cli.command {
            Some(Commands::User {
                command: UserCommands::Create { name, email, role },
            }) => {
                assert_eq!(name, "Threads Admin");
                assert_eq!(email, None);
                assert_eq!(role, UserRole::Brand);
            }
            _ => panic!("expected user create command"),
        }

        let cli = Cli::parse_from(["subbi", "user", "create", "Ana"]);
        assert!(matches!(
            cli.command,
            Some(Commands::User {
                command: UserCommands::Create { role: UserRole::Shopper, .. }
            })
        ));

        assert!(Cli::try_parse_from(["subbi", "user", "create", "X", "--role", "admin"]).is_err());
    }
}
