//! Error types for value object construction.
//!
//! These errors are raised when a value object is built from invalid components.
//! They are distinct from [`Failure`](crate::result::Failure), which reports expected
//! domain failures of a calculation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::Currency;

/// A specialized Result type for value object construction.
pub type CoreResult<T> = Result<T, CoreError>;

/// The error type for value object construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Unknown or malformed currency code.
    #[error("Unknown currency: {code}")]
    UnknownCurrency {
        /// The code that failed to parse.
        code: String,
    },

    /// Invalid currency pair.
    #[error("Invalid currency pair: {reason}")]
    InvalidCurrencyPair {
        /// Why the pair is invalid.
        reason: String,
    },

    /// Invalid FX rate.
    #[error("Invalid FX rate {value}: {reason}")]
    InvalidFxRate {
        /// The offending rate.
        value: Decimal,
        /// Why the rate is invalid.
        reason: String,
    },

    /// Invalid identifier.
    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier {
        /// The identifier text.
        value: String,
        /// Why it is invalid.
        reason: String,
    },

    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: expected {expected}, found {actual}")]
    CurrencyMismatch {
        /// The currency that was expected.
        expected: Currency,
        /// The currency that was supplied.
        actual: Currency,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid currency pair error.
    pub fn invalid_pair(reason: impl Into<String>) -> Self {
        Self::InvalidCurrencyPair {
            reason: reason.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
