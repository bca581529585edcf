//! Product validation errors.

use thiserror::Error;

use tessera_core::CoreError;

/// Result type for product construction.
pub type ProductResult<T> = Result<T, ProductError>;

/// Errors raised while building a product or trade.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// A required builder field was not set.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field value is invalid.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// The offending field.
        field: &'static str,
        /// Why the value is invalid.
        reason: String,
    },

    /// Fields are individually valid but inconsistent with each other.
    #[error("{0}")]
    Inconsistent(String),

    /// Error from a core value type.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ProductError {
    /// Creates an invalid field error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
