//! User settings for the household budget
//!
//! Settings live in an optional JSON file. Anything missing from the file
//! falls back to its default, and a missing file means all defaults.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::storage::flat_file::DEFAULT_STORE_FILE;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Path of the transaction store
    #[serde(default = "default_store_file")]
    pub store_file: PathBuf,

    /// Symbol printed before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_store_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

fn default_currency() -> String {
    "₹".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Platform config location (`.../household-budget/config.json`)
    pub fn default_config_file() -> Option<PathBuf> {
        ProjectDirs::from("", "", "household-budget").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load settings from `path`, or defaults if the file doesn't exist
    pub fn load_or_default(path: &Path) -> BudgetResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) -> BudgetResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    BudgetError::Io(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.store_file, PathBuf::from("budget_data.txt"));
        assert_eq!(settings.currency_symbol, "₹");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Settings::load_or_default(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let settings = Settings {
            store_file: temp_dir.path().join("ledger.txt"),
            currency_symbol: "$".into(),
        };
        settings.save(&path).unwrap();

        assert_eq!(Settings::load_or_default(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_default(&path).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.store_file, PathBuf::from("budget_data.txt"));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            Settings::load_or_default(&path),
            Err(BudgetError::Config(_))
        ));
    }
}
