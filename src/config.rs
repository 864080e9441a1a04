//! Configuration settings for atrium.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub query: QueryConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations or use defaults.
    pub fn load() -> Result<Self> {
        let config_paths = [
            PathBuf::from("atrium.toml"),
            PathBuf::from("config.toml"),
            dirs::config_dir()
                .map(|p| p.join("atrium/config.toml"))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|p| p.join(".atrium/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.query.min_slot_minutes <= 0 {
            return Err(ConfigError::Invalid("query.min_slot_minutes must be > 0".to_string()).into());
        }
        Ok(())
    }

    /// Expand the data file path.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data.path);
        PathBuf::from(expanded.as_ref())
    }
}

/// Where record data lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the JSON record snapshot file.
    pub path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: "atrium-data.json".to_string(),
        }
    }
}

/// Query defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Minimum duration, in minutes, for a free slot to be suggested.
    pub min_slot_minutes: i64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            min_slot_minutes: crate::analysis::DEFAULT_MIN_SLOT_MINUTES,
        }
    }
}
