//! User settings for the budget planner
//!
//! Holds the ledger limits (record capacity, category cap, field length) and
//! presentation preferences. Settings are the only thing ever written to disk.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// Default maximum number of stored expenses
pub const DEFAULT_MAX_RECORDS: usize = 100;

/// Default maximum number of distinct category aggregates
pub const DEFAULT_MAX_CATEGORIES: usize = 10;

/// Default maximum length (in characters) of each string field
pub const DEFAULT_MAX_FIELD_CHARS: usize = 99;

/// Limits consumed by the expense store and aggregate calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLimits {
    /// Maximum number of records
    pub max_records: usize,
    /// Maximum number of category aggregates (`None` = unbounded)
    pub max_categories: Option<usize>,
    /// Maximum characters per string field (`None` = no truncation)
    pub max_field_chars: Option<usize>,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            max_records: DEFAULT_MAX_RECORDS,
            max_categories: Some(DEFAULT_MAX_CATEGORIES),
            max_field_chars: Some(DEFAULT_MAX_FIELD_CHARS),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum number of stored expenses
    #[serde(default = "default_max_records")]
    pub max_records: usize,

    /// Maximum number of category totals; `null` removes the cap
    #[serde(default = "default_max_categories")]
    pub max_categories: Option<usize>,

    /// Maximum characters per text field; `null` disables truncation
    #[serde(default = "default_max_field_chars")]
    pub max_field_chars: Option<usize>,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Category filled in by the `fav` shortcut
    #[serde(default = "default_favorite_category")]
    pub favorite_category: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_records() -> usize {
    DEFAULT_MAX_RECORDS
}

fn default_max_categories() -> Option<usize> {
    Some(DEFAULT_MAX_CATEGORIES)
}

fn default_max_field_chars() -> Option<usize> {
    Some(DEFAULT_MAX_FIELD_CHARS)
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_favorite_category() -> String {
    "Food".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_records: default_max_records(),
            max_categories: default_max_categories(),
            max_field_chars: default_max_field_chars(),
            currency_symbol: default_currency(),
            favorite_category: default_favorite_category(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject limits the store cannot work with
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.max_records == 0 {
            return Err(LedgerError::Config(
                "max_records must be at least 1".to_string(),
            ));
        }

        if self.max_categories == Some(0) {
            return Err(LedgerError::Config(
                "max_categories must be at least 1 (use null for no limit)".to_string(),
            ));
        }

        if self.favorite_category.trim().is_empty() {
            return Err(LedgerError::Config(
                "favorite_category must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// The limits handed to the expense store
    pub fn limits(&self) -> StoreLimits {
        StoreLimits {
            max_records: self.max_records,
            max_categories: self.max_categories,
            max_field_chars: self.max_field_chars,
        }
    }
}
