//! Core data models for dt-money
//!
//! The only entity is the transaction being registered: the validated form
//! input and the request body sent to the API.

pub mod transaction;

pub use transaction::{NewTransaction, NewTransactionInput, TransactionType};
