use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::cities::{self, City};
use crate::model::TempUnit;

/// Startup defaults stored on disk. Runtime display state is never
/// persisted; this only decides what the dashboard opens with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// City shown on startup; matched against the built-in table.
    pub default_city: String,

    pub default_unit: TempUnit,

    /// Override for the forecast endpoint. Example TOML:
    /// endpoint = "http://localhost:8080/api.pl"
    pub endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: "paris".to_string(),
            default_unit: TempUnit::Celsius,
            endpoint: None,
        }
    }
}

impl Config {
    /// Resolve the startup city, falling back to the table's first entry
    /// when the configured name is not in it.
    pub fn startup_city(&self) -> &'static City {
        cities::find(&self.default_city).unwrap_or(&cities::CITIES[0])
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
