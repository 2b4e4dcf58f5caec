//! User settings for dt-money
//!
//! Where the transactions API lives, how long to wait for it, the default
//! log level and the colour theme.

use serde::{Deserialize, Serialize};

use super::paths::DtMoneyPaths;
use crate::error::DtMoneyError;
use crate::tui::theme::Theme;

/// Connection settings for the transactions API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL; `transactions` is resolved against it
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            timeout_secs: 10,
        }
    }
}

/// User settings for dt-money
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub api: ApiSettings,

    /// Filter directive for the crate's own logs, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub theme: Theme,
}

fn default_schema_version() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api: ApiSettings::default(),
            log_level: default_log_level(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &DtMoneyPaths) -> Result<Self, DtMoneyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| DtMoneyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                DtMoneyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DtMoneyPaths) -> Result<(), DtMoneyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DtMoneyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| DtMoneyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Replace the API base URL, e.g. from `--api-url`
    ///
    /// Only in memory; it reaches `config.json` if these settings are saved
    /// afterwards, as `dt-money init` does.
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api.base_url = url;
        }
        self
    }
}
