//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the API client.

pub mod transaction;

pub use transaction::{handle_add_command, AddTransactionArgs};
