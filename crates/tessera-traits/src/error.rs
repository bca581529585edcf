//! Error types for trait operations.

use thiserror::Error;

use crate::market_data::MarketDataError;

/// Common error type for trait operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraitError {
    /// Requested resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Scenario counts disagree
    #[error("scenario count mismatch: expected {expected}, got {actual}")]
    ScenarioMismatch {
        /// Scenario count of the container
        expected: usize,
        /// Scenario count supplied
        actual: usize,
    },

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl From<MarketDataError> for TraitError {
    fn from(e: MarketDataError) -> Self {
        match e {
            MarketDataError::NotFound(key) => TraitError::NotFound(key.to_string()),
            other => TraitError::InvalidInput(other.to_string()),
        }
    }
}
