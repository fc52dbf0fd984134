//! Configuration file support for meso.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/meso/config.toml`.

use crate::increments::{WeightUnit, MAX_SPREAD};
use crate::{Error, Result, StatusSets};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub statuses: StatusSets,

    #[serde(default)]
    pub increments: IncrementConfig,
}

/// Picker increment configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IncrementConfig {
    #[serde(default = "default_lb_increment")]
    pub lb: f64,

    #[serde(default = "default_kg_increment")]
    pub kg: f64,

    /// Options offered on each side of the target
    #[serde(default = "default_spread")]
    pub spread: usize,

    #[serde(default)]
    pub default_unit: WeightUnit,
}

impl Default for IncrementConfig {
    fn default() -> Self {
        Self {
            lb: default_lb_increment(),
            kg: default_kg_increment(),
            spread: default_spread(),
            default_unit: WeightUnit::default(),
        }
    }
}

fn default_lb_increment() -> f64 {
    5.0
}

fn default_kg_increment() -> f64 {
    2.5
}

fn default_spread() -> usize {
    3
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!("No config file found at {:?}, using defaults", config_path);
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.check()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("meso").join("config.toml"))
    }

    /// Save the configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject settings the resolver and pickers cannot work with
    fn check(&self) -> Result<()> {
        let overlap = self.statuses.overlap();
        if !overlap.is_empty() {
            return Err(Error::Config(format!(
                "statuses listed as both in-progress and finished: {:?}",
                overlap
            )));
        }

        if self.increments.lb <= 0.0 || self.increments.kg <= 0.0 {
            return Err(Error::Config("weight increments must be positive".into()));
        }

        if self.increments.spread > MAX_SPREAD {
            return Err(Error::Config(format!(
                "increments.spread must be at most {}, got {}",
                MAX_SPREAD, self.increments.spread
            )));
        }

        Ok(())
    }
}
