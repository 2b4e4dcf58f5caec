//! Validation rules for the new-transaction form
//!
//! A [`Draft`] is whatever the user has typed so far. [`validate`] either
//! narrows it into a [`NewTransactionInput`] or reports every failing field.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{NewTransactionInput, TransactionType};

/// Fields of the form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Field {
    #[default]
    Description,
    Price,
    Category,
    Type,
}

impl Field {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Description => Self::Price,
            Self::Price => Self::Category,
            Self::Category => Self::Type,
            Self::Type => Self::Description,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Description => Self::Type,
            Self::Price => Self::Description,
            Self::Category => Self::Price,
            Self::Type => Self::Category,
        }
    }

    /// Key of the field in the API body
    pub fn key(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Price => "price",
            Self::Category => "category",
            Self::Type => "type",
        }
    }

    /// Placeholder / label shown in the dialog
    pub fn label(&self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Price => "Price",
            Self::Category => "Category",
            Self::Type => "Type",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-field validation failures, at most one message per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// First failing field in focus order
    pub fn first_field(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Raw form values, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub description: String,
    pub price: String,
    pub category: String,
    pub kind: TransactionType,
}

impl Draft {
    /// The price field coerced to a number, if it holds one
    pub fn price_value(&self) -> Option<Decimal> {
        parse_price(&self.price).ok()
    }
}

/// Why the price field did not yield a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("Price is required")]
    Empty,
    #[error("Price must be a number")]
    NotANumber,
    #[error("Price is out of range")]
    OutOfRange,
}

/// Coerce price keystrokes into a number
///
/// Accepts what a numeric input accepts: an optional `-`, digits with an
/// optional fraction (`"12.50"`, `".5"`) and an optional exponent (`"1e3"`).
/// Well-formed numbers that do not fit in a [`Decimal`] are `OutOfRange`.
pub fn parse_price(raw: &str) -> Result<Decimal, PriceError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(PriceError::Empty);
    }
    if !is_number_literal(s) {
        return Err(PriceError::NotANumber);
    }
    if !s.parse::<f64>().map_or(false, f64::is_finite) {
        return Err(PriceError::OutOfRange);
    }

    let normalized = normalize_literal(s);
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| PriceError::OutOfRange)
}

/// `-? (digits | digits? "." digits) ([eE] [+-]? digits)?`
fn is_number_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => (int.is_empty() || all_digits(int)) && all_digits(frac),
        None => all_digits(mantissa),
    };

    let exponent_ok = match exponent {
        Some(exp) => all_digits(exp.strip_prefix(['+', '-']).unwrap_or(exp)),
        None => true,
    };

    mantissa_ok && exponent_ok
}

/// Rewrite a literal into the shape `Decimal` parses: a leading zero before a
/// bare fraction and a lowercase exponent marker
fn normalize_literal(s: &str) -> String {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let zero = if unsigned.starts_with('.') { "0" } else { "" };
    format!("{}{}{}", sign, zero, unsigned.to_ascii_lowercase())
}

/// Validate a draft
pub fn validate(draft: &Draft) -> Result<NewTransactionInput, FieldErrors> {
    let mut errors = FieldErrors::default();

    let description = draft.description.trim();
    if description.is_empty() {
        errors.insert(Field::Description, "Description is required");
    }

    let price = match parse_price(&draft.price) {
        Ok(price) => Some(price),
        Err(e) => {
            errors.insert(Field::Price, e.to_string());
            None
        }
    };

    let category = draft.category.trim();
    if category.is_empty() {
        errors.insert(Field::Category, "Category is required");
    }

    match price {
        Some(price) if errors.is_empty() => Ok(NewTransactionInput {
            description: description.to_string(),
            price,
            category: category.to_string(),
            kind: draft.kind,
        }),
        _ => Err(errors),
    }
}
