//! Path management for dt-money
//!
//! ## Path Resolution Order
//!
//! 1. `DT_MONEY_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/dt-money` on Linux, `%APPDATA%\dt-money\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DtMoneyError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "DT_MONEY_DATA_DIR";

/// Manages all paths used by dt-money
#[derive(Debug, Clone)]
pub struct DtMoneyPaths {
    base_dir: PathBuf,
}

impl DtMoneyPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, DtMoneyError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create DtMoneyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("dt-money.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DtMoneyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DtMoneyError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if dt-money has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, DtMoneyError> {
    ProjectDirs::from("", "", "dt-money")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DtMoneyError::Config("Could not determine home directory".into()))
}
