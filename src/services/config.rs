//! Configuration file (`~/.bakecal/config.toml`)

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use super::calendar::DEFAULT_UPCOMING_LIMIT;
use super::event_store::EventStore;
use crate::types::{BakecalError, Result, ViewMode};

/// Terminal color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    /// Detect from terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

/// User configuration. Every field has a default, so an empty or missing
/// file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Events file path (default `~/.bakecal/events.json`)
    pub events_file: Option<PathBuf>,
    /// Entries shown in the upcoming panel
    pub upcoming_limit: usize,
    /// View shown when the calendar opens
    pub default_view: ViewMode,
    pub theme: ThemeSetting,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_file: None,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
            default_view: ViewMode::Month,
            theme: ThemeSetting::Auto,
        }
    }
}

impl Config {
    /// Default config location (`~/.bakecal/config.toml`)
    pub fn default_path() -> Result<PathBuf> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| BakecalError::Config("Cannot determine home directory".into()))?;
        Ok(base_dirs.home_dir().join(".bakecal").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| BakecalError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.upcoming_limit == 0 {
            return Err(BakecalError::Config("upcoming_limit must be > 0".into()));
        }
        Ok(())
    }

    /// Resolve the events file, preferring `override_path` over the config
    pub fn event_store(&self, override_path: Option<&Path>) -> Result<EventStore> {
        let path = match (override_path, &self.events_file) {
            (Some(p), _) => p.to_path_buf(),
            (None, Some(p)) => p.clone(),
            (None, None) => EventStore::default_path()?,
        };
        Ok(EventStore::new(path))
    }
}
