use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub observability: ObservabilityConfig,

    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/subbi.db".to_string(),
            log_level: "info".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub enabled: bool,

    pub port: u16,

    /// Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: 5000,
            cors_allowed_origins: vec![
                "http://localhost:5000".to_string(),
                "http://127.0.0.1:5000".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,

    pub loki_enabled: bool,

    pub loki_url: String,

    pub loki_labels: std::collections::HashMap<String, String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        let mut labels = std::collections::HashMap::new();
        labels.insert("app".to_string(), "subbi".to_string());

        Self {
            metrics_enabled: true,
            loki_enabled: false,
            loki_url: "http://localhost:3100".to_string(),
            loki_labels: labels,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Load the demo catalog on startup when the store has no demo user yet.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("subbi").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".subbi").join("config.toml"));
        }

        paths
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    /// Writes the default config to `path` unless a file is already there.
    pub fn create_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            Ok(false)
        } else {
            Self::default().save_to_path(path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.general.database_path.trim().is_empty() {
            anyhow::bail!("Database path cannot be empty");
        }

        if self.server.enabled && self.server.port == 0 {
            anyhow::bail!("Server port must be > 0");
        }

        if self.general.max_db_connections == 0 {
            anyhow::bail!("max_db_connections must be > 0");
        }

        if self.general.min_db_connections > self.general.max_db_connections {
            anyhow::bail!(
                "min_db_connections ({}) cannot exceed max_db_connections ({})",
                self.general.min_db_connections,
                self.general.max_db_connections
            );
        }

        if self.observability.loki_enabled {
            url::Url::parse(&self.observability.loki_url).with_context(|| {
                format!("Invalid Loki URL: {}", self.observability.loki_url)
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.general.max_db_connections, 5);
        assert!(!config.seed.seed_demo_data);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[seed]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [seed]
            seed_demo_data = true
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert!(config.seed.seed_demo_data);

        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.general.database_path = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.general.min_db_connections = 10;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.observability.loki_enabled = true;
        config.observability.loki_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!("subbi-config-{}.toml", uuid::Uuid::new_v4()));
        let mut config = Config::default();
        config.server.port = 8123;

        config.save_to_path(&path).unwrap();
        let loaded = Config::load_from_path(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.server.port, 8123);
        assert!(Config::create_default_if_missing(&path).unwrap());
        assert!(!Config::create_default_if_missing(&path).unwrap());
        std::fs::remove_file(&path).ok();
    }
}
