//! Engine error types.
//!
//! These are setup and infrastructure errors. Per-measure calculation failures never
//! surface here; they are carried as [`tessera_core::Failure`] values in the results.

use thiserror::Error;

use tessera_products::TargetType;
use tessera_traits::TraitError;

/// Engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Target types with no registered calculation function
    #[error("no calculation function registered for target types {missing:?}")]
    IncompleteRegistry {
        /// The unbound target types
        missing: Vec<TargetType>,
    },

    /// Market data could not be built
    #[error("market data error: {0}")]
    MarketData(#[from] TraitError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
