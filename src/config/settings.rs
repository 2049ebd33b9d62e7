//! User settings for Ticcle
//!
//! Manages user preferences: how carry-over is flagged, how amounts and
//! dates are shown, and how far back the history view reaches.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::paths::TicclePaths;
use crate::error::TiccleError;
use crate::models::CarryOverPolicy;
use crate::storage::file_io::write_json_atomic;

/// User settings for Ticcle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Whether negative carry-over counts as "has carry-over"
    #[serde(default)]
    pub carry_over_policy: CarryOverPolicy,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Number of days the history view reaches back
    #[serde(default = "default_history_days")]
    pub history_days: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₩".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_history_days() -> u32 {
    31
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            carry_over_policy: CarryOverPolicy::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            history_days: default_history_days(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TicclePaths) -> Result<Self, TiccleError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TiccleError::Io(format!("Failed to read settings file: {}", e)))?;

            let mut settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TiccleError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if !is_valid_date_format(&settings.date_format) {
                warn!(
                    date_format = %settings.date_format,
                    "invalid date format in settings, using the default"
                );
                settings.date_format = default_date_format();
            }

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TicclePaths) -> Result<(), TiccleError> {
        paths.ensure_directories()?;

        write_json_atomic(paths.settings_file(), self)?;

        Ok(())
    }
}

/// Whether `format` is a strftime string chrono can render
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.carry_over_policy, CarryOverPolicy::AnyNonZero);
        assert_eq!(settings.currency_symbol, "₩");
        assert_eq!(settings.history_days, 31);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TicclePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            carry_over_policy: CarryOverPolicy::PositiveOnly,
            currency_symbol: "$".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.carry_over_policy, CarryOverPolicy::PositiveOnly);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"carry_over_policy": "positive-only"}"#).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.carry_over_policy, CarryOverPolicy::PositiveOnly);
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TicclePaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.history_days, 31);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_bad_date_format_falls_back_to_default() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TicclePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q-%"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_date_format_validation() {
        assert!(is_valid_date_format("%Y-%m-%d"));
        assert!(is_valid_date_format("%d/%m/%Y"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format("%Y-%"));
    }
}
