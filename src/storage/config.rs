//! Configuration handling for the site CLI
//!
//! Configuration is read from `~/.config/ahaha-site/config.toml` (or the
//! platform equivalent), or from the file given with `--config` /
//! `AHAHA_CONFIG`. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Toy Space settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToySpaceConfig {
    /// Maximum related entries shown on a detail page
    pub related_limit: usize,
}

impl Default for ToySpaceConfig {
    fn default() -> Self {
        Self { related_limit: 3 }
    }
}

/// Admin panel settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Range pre-filled in the results form (inclusive)
    pub default_range: [i64; 2],
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            default_range: [0, 24],
        }
    }
}

/// Interactive browser settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

/// Site configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Output format used when `--format` is not given
    pub default_format: OutputFormat,

    pub toy_space: ToySpaceConfig,

    pub admin: AdminConfig,

    pub browser: BrowserConfig,
}

impl SiteConfig {
    /// Returns the global config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "ahaha", "ahaha-site").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads from an explicit file, or the default location when `None`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::config_dir() {
                Some(dir) => {
                    let path = dir.join("config.toml");
                    if path.exists() {
                        Self::load_file(&path)
                    } else {
                        Ok(Self::default())
                    }
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Loads and validates a config file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: SiteConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.browser.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid(
                "browser.tick_rate_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
