//! Configuration loading
//!
//! A single TOML file; every section and key is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Reference tick period of the occupancy view
pub const DEFAULT_TICK_PERIOD_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub occupancy: OccupancyConfig,
    pub session: SessionConfig,
    pub fixtures: FixturesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OccupancyConfig {
    /// Seconds between simulated updates
    pub tick_period_secs: u64,
    /// Ticks to run before the view is torn down; 0 runs until interrupted
    pub ticks: u64,
    /// Building filter, `"all"` for every building
    pub building: String,
    /// Fixed seed for a reproducible random walk
    pub seed: Option<u64>,
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            tick_period_secs: DEFAULT_TICK_PERIOD_SECS,
            ticks: 3,
            building: "all".to_string(),
            seed: None,
        }
    }
}

impl OccupancyConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs(self.tick_period_secs)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Email of the principal to sign in as at startup
    pub login_email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// JSON fixture snapshot; the built-in seed data is used when unset
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or from the default location when `None`.
    /// A missing default file yields the default config; a missing explicit
    /// file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                tracing::info!(path = %path.display(), "Loaded config");
                Self::from_toml(&text)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(Some(&path)),
                _ => {
                    tracing::debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("edu", "campus", "campus-dashboard")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.occupancy.tick_period_secs == 0 {
            return Err(Error::Config(
                "occupancy.tick_period_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
