//! Runtime settings.
//!
//! Settings are read from a YAML document in which every key is optional:
//!
//! ```yaml
//! quick_threshold_minutes: 30
//! search_debounce_ms: 300
//! favorites_key: favorites
//! catalog_path: recipes/
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Recipes strictly quicker than this many minutes pass the "quick" filter
pub const DEFAULT_QUICK_THRESHOLD_MINUTES: u32 = 30;

/// Quiet period after the last keystroke before a search is applied
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Key under which the favorites set is persisted
pub const DEFAULT_FAVORITES_KEY: &str = "favorites";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub quick_threshold_minutes: u32,
    pub search_debounce_ms: u64,
    pub favorites_key: String,
    /// File or directory to load the catalog from. `None` uses the built-in
    /// sample catalog.
    pub catalog_path: Option<Utf8PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            quick_threshold_minutes: DEFAULT_QUICK_THRESHOLD_MINUTES,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            catalog_path: None,
        }
    }
}

impl Settings {
    /// Parses settings from YAML. An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Settings::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads settings from a YAML file. A relative `catalog_path` is resolved
    /// against the settings file's directory.
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings = Settings::from_yaml_str(&content)?;

        if let (Some(catalog), Some(dir)) = (&settings.catalog_path, path.parent()) {
            if catalog.is_relative() {
                settings.catalog_path = Some(dir.join(catalog));
            }
        }

        Ok(settings)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
