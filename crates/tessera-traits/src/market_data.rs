//! Scenario market data traits.
//!
//! - [`ScenarioMarketData`]: read-only access to one value per key per scenario
//! - [`MarketDataBuilder`]: turns [`FunctionRequirements`] into scenario market data
//!
//! Both are synchronous. Acquisition that needs I/O happens inside the builder before
//! any calculation starts.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::error::TraitError;
use crate::ids::MarketDataKey;
use crate::requirements::FunctionRequirements;

/// Failure to read a value from scenario market data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// No value is held for the key.
    #[error("market data not found: {0}")]
    NotFound(MarketDataKey),

    /// The scenario index is past the end.
    #[error("scenario {index} out of range, scenario count is {count}")]
    ScenarioOutOfRange {
        /// Requested index
        index: usize,
        /// Number of scenarios held
        count: usize,
    },
}

/// Market data for a fixed number of scenarios.
///
/// Every key held has exactly one value per scenario. Implementations are shared
/// across calculation threads and must not mutate after construction.
pub trait ScenarioMarketData: Send + Sync {
    /// Number of scenarios.
    fn scenario_count(&self) -> usize;

    /// Value of `key` in scenario `scenario`.
    fn value(&self, key: &MarketDataKey, scenario: usize) -> Result<Decimal, MarketDataError>;

    /// Values of `key` across all scenarios, in scenario order.
    fn values(&self, key: &MarketDataKey) -> Result<Vec<Decimal>, MarketDataError> {
        (0..self.scenario_count())
            .map(|i| self.value(key, i))
            .collect()
    }

    /// Returns true if a value is held for `key`.
    fn contains(&self, key: &MarketDataKey) -> bool;
}

/// Acquires the market data named by a set of requirements.
pub trait MarketDataBuilder: Send + Sync {
    /// Builds scenario market data holding at least every required key.
    fn build(
        &self,
        requirements: &FunctionRequirements,
    ) -> Result<Box<dyn ScenarioMarketData>, TraitError>;
}
