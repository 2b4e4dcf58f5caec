//! Custom error types for dt-money
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::api::ApiError;
use crate::form::FieldErrors;

/// The main error type for dt-money operations
#[derive(Error, Debug)]
pub enum DtMoneyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The transaction draft did not pass validation
    #[error("Validation error: {0}")]
    Validation(FieldErrors),

    /// The transactions API rejected or failed the request
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

impl From<FieldErrors> for DtMoneyError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Result type alias for dt-money operations
pub type DtMoneyResult<T> = Result<T, DtMoneyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Field, FieldErrors};

    #[test]
    fn test_error_display() {
        let err = DtMoneyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let mut errors = FieldErrors::default();
        errors.insert(Field::Price, "Price must be a number");
        let err: DtMoneyError = errors.into();
        assert!(matches!(err, DtMoneyError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation error: price: Price must be a number"
        );
    }

    #[test]
    fn test_from_api_error() {
        let err: DtMoneyError = ApiError::Status {
            status: 500,
            body: "boom".into(),
        }
        .into();
        assert!(matches!(err, DtMoneyError::Api(ApiError::Status { status: 500, .. })));
        assert_eq!(err.to_string(), "API error: Server responded with 500: boom");
    }
}
