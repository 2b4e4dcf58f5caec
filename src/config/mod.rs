//! Configuration module for dt-money
//!
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DtMoneyPaths;
pub use settings::{ApiSettings, Settings};
