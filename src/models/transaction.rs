//! Transaction model
//!
//! A transaction is created once, from a validated form, and handed to the
//! remote API. Nothing here is persisted locally.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    #[default]
    Income,
    /// Money going out
    Outcome,
}

impl TransactionType {
    /// Both variants, in the order the segmented control shows them
    pub const ALL: [TransactionType; 2] = [Self::Income, Self::Outcome];

    /// The other variant
    pub fn toggle(self) -> Self {
        match self {
            Self::Income => Self::Outcome,
            Self::Outcome => Self::Income,
        }
    }

    /// Wire value used by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Outcome => "outcome",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Outcome => "Outcome",
        }
    }

    /// Arrow glyph shown next to the label
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Income => "↑",
            Self::Outcome => "↓",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "outcome" => Ok(Self::Outcome),
            other => Err(format!(
                "Invalid transaction type '{}': expected 'income' or 'outcome'",
                other
            )),
        }
    }
}

/// A validated transaction as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransactionInput {
    pub description: String,
    /// Sign is not constrained; direction comes from `kind`
    pub price: Decimal,
    pub category: String,
    pub kind: TransactionType,
}

/// Request body for `POST transactions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub description: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    pub category: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Stamped at submission time, never user-editable
    pub created_at: DateTime<Utc>,
}

impl NewTransaction {
    /// Build the request body from a validated input, stamping `created_at`
    pub fn from_input(input: NewTransactionInput, created_at: DateTime<Utc>) -> Self {
        let NewTransactionInput {
            description,
            price,
            category,
            kind,
        } = input;

        Self {
            description,
            price,
            category,
            kind,
            created_at,
        }
    }
}

impl fmt::Display for NewTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} '{}' [{}]",
            self.kind, self.price, self.description, self.category
        )
    }
}
