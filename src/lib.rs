//! dt-money - register finance transactions from the terminal
//!
//! A ratatui dialog collects a description, a price, a category and whether
//! the transaction is income or outcome, validates them, stamps the result
//! with a creation time and posts it to a transactions API.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing setup
//! - `models`: The transaction payload sent to the API
//! - `form`: Draft validation and the dialog's form state
//! - `api`: HTTP client and asynchronous submission
//! - `cli`: Non-interactive commands
//! - `tui`: Home screen and the new transaction dialog
//!
//! # Example
//!
//! ```rust,ignore
//! use dt_money::form::{validate, Draft};
//! use dt_money::models::NewTransaction;
//!
//! let input = validate(&draft)?;
//! let body = NewTransaction::from_input(input, chrono::Utc::now());
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod tui;

pub use error::DtMoneyError;
