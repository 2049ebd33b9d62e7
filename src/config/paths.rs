//! Path management for Ticcle
//!
//! ## Path Resolution Order
//!
//! 1. `TICCLE_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/ticcle` on Linux,
//!    `~/Library/Application Support/ticcle` on macOS, `%APPDATA%\ticcle` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::TiccleError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "TICCLE_DATA_DIR";

/// Manages all paths used by Ticcle
#[derive(Debug, Clone)]
pub struct TicclePaths {
    /// Base directory for all Ticcle data
    base_dir: PathBuf,
}

impl TicclePaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, TiccleError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TicclePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding one JSON file per storage key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), TiccleError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TiccleError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TiccleError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, TiccleError> {
    ProjectDirs::from("", "", "ticcle")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TiccleError::Config("Could not determine a home directory".into()))
}
