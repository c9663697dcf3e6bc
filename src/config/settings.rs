//! User settings for Basket
//!
//! Display preferences, the fallback user identity, and the budget warning
//! threshold. Every field has a serde default so older or partial config
//! files still load.

use serde::{Deserialize, Serialize};

use super::paths::BasketPaths;
use crate::error::BasketError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for Basket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// User identity used when `--user` is not given
    #[serde(default = "default_user")]
    pub default_user: String,

    /// Budget progress (percent) above which the summary reports a warning
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_user() -> String {
    "default".to_string()
}

fn default_warning_threshold() -> f64 {
    80.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_user: default_user(),
            warning_threshold: default_warning_threshold(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BasketPaths) -> Result<Self, BasketError> {
        read_json(paths.settings_file())
            .map_err(|e| BasketError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BasketPaths) -> Result<(), BasketError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
