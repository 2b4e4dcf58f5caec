//! Tracing setup
//!
//! The TUI owns the terminal, so log lines go to the log file under the
//! base directory. `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::DtMoneyPaths;
use crate::error::DtMoneyError;

/// Install the global subscriber writing to [`DtMoneyPaths::log_file`]
pub fn init(paths: &DtMoneyPaths, level: &str) -> Result<(), DtMoneyError> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| DtMoneyError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| DtMoneyError::Config(format!("Failed to initialise logging: {}", e)))
}

fn filter(level: &str) -> Result<EnvFilter, DtMoneyError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(format!("dt_money={}", level))
        .map_err(|e| DtMoneyError::Config(format!("Invalid log level '{}': {}", level, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_builds_a_filter() {
        if std::env::var_os("RUST_LOG").is_none() {
            let filter = filter("debug").unwrap();
            assert_eq!(filter.to_string(), "dt_money=debug");
        }
    }
}
