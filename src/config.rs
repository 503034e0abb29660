use color_eyre::Result;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::rail::RailGeometry;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub rail: RailConfig,
    pub logging: LoggingConfig,
}

/// Where the layout document comes from
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// File path (relative to the config dir) or http(s) URL
    pub source: String,
    pub timeout_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            source: "layout.json".to_string(),
            timeout_ms: 3000,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Rail geometry in terminal cells
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RailConfig {
    pub item_width: u16,
    pub item_gap: u16,
    pub slack: u16,
}

impl Default for RailConfig {
    fn default() -> Self {
        Self {
            item_width: 18,
            item_gap: 2,
            slack: 8,
        }
    }
}

impl RailConfig {
    #[must_use]
    pub fn geometry(&self) -> RailGeometry {
        RailGeometry::new(
            f64::from(self.item_width.max(1)),
            f64::from(self.item_gap),
            f64::from(self.slack),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from disk, defaults when the file is absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "homerail")
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))
    }

    /// Returns the directory holding `config.toml` and, by default, `layout.json`
    pub fn config_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().to_path_buf())
    }

    /// Returns the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory the log file is written to
    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_local_dir().to_path_buf())
    }
}
