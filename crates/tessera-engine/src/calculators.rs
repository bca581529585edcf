//! Per-function calculator registries.
//!
//! Each calculation function owns one [`MeasureCalculators`] table mapping the measures
//! it supports to a plain function pointer. The table is built once, never mutated, and
//! shared between threads without locking.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;
use tracing::{debug, error};

use tessera_core::{CoreError, Failure, FailureReason};
use tessera_traits::{MarketDataError, ScenarioMarketData};

use crate::function::MeasureResults;
use crate::measure::Measure;
use crate::scenario::{ScenarioResult, ScenarioValue};

/// Error raised by a single calculator.
#[derive(Debug, Error)]
pub enum CalculationError {
    /// Required market data is missing.
    #[error(transparent)]
    MissingData(#[from] MarketDataError),

    /// A value object could not be built from the inputs.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The calculation itself failed.
    #[error("{0}")]
    Failed(String),
}

impl CalculationError {
    /// Creates a [`CalculationError::Failed`].
    pub fn failed(message: impl Into<String>) -> Self {
        CalculationError::Failed(message.into())
    }

    /// The failure reason this error is reported under.
    pub fn reason(&self) -> FailureReason {
        match self {
            CalculationError::MissingData(_) => FailureReason::MissingData,
            CalculationError::Core(_) | CalculationError::Failed(_) => {
                FailureReason::CalculationFailed
            }
        }
    }
}

impl From<CalculationError> for Failure {
    fn from(e: CalculationError) -> Self {
        Failure::from_error(e.reason(), &e)
    }
}

/// A calculator for one measure on targets of type `T`.
pub type Calculator<T> =
    fn(&T, &dyn ScenarioMarketData) -> Result<ScenarioResult<ScenarioValue>, CalculationError>;

/// Immutable map from measure to calculator.
pub struct MeasureCalculators<T> {
    calculators: BTreeMap<Measure, Calculator<T>>,
}

impl<T> MeasureCalculators<T> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            calculators: BTreeMap::new(),
        }
    }

    /// Returns the table with `calculator` bound to `measure`.
    #[must_use]
    pub fn with(mut self, measure: Measure, calculator: Calculator<T>) -> Self {
        self.calculators.insert(measure, calculator);
        self
    }

    /// The measures that have a calculator.
    pub fn supported_measures(&self) -> BTreeSet<Measure> {
        self.calculators.keys().cloned().collect()
    }

    /// Returns true if `measure` has a calculator.
    pub fn supports(&self, measure: &Measure) -> bool {
        self.calculators.contains_key(measure)
    }

    /// Calculates every requested measure independently.
    ///
    /// Returns exactly one entry per requested measure. An unsupported measure is an
    /// [`FailureReason::InvalidInput`] failure. A calculator error or panic fails only
    /// that measure. A result whose length differs from the scenario count is a
    /// [`FailureReason::CalculationFailed`] failure.
    pub fn calculate(
        &self,
        target: &T,
        measures: &BTreeSet<Measure>,
        market_data: &dyn ScenarioMarketData,
    ) -> MeasureResults {
        measures
            .iter()
            .map(|measure| {
                let result = match self.calculators.get(measure) {
                    None => Err(Failure::invalid_input(format!(
                        "Unsupported measure: {measure}"
                    ))),
                    Some(calculator) => {
                        invoke(*calculator, measure, target, market_data)
                    }
                };
                (measure.clone(), result)
            })
            .collect()
    }
}

impl<T> Default for MeasureCalculators<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn invoke<T>(
    calculator: Calculator<T>,
    measure: &Measure,
    target: &T,
    market_data: &dyn ScenarioMarketData,
) -> Result<ScenarioResult<ScenarioValue>, Failure> {
    debug!(%measure, "running calculator");

    let outcome = catch_unwind(AssertUnwindSafe(|| calculator(target, market_data)));
    let result = match outcome {
        Ok(result) => result.map_err(Failure::from)?,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(%measure, %message, "calculator panicked");
            return Err(Failure::calculation_failed(format!(
                "Calculation of {measure} panicked: {message}"
            )));
        }
    };

    let expected = market_data.scenario_count();
    if result.len() != expected {
        error!(
            %measure,
            expected,
            actual = result.len(),
            "calculator returned wrong number of scenarios"
        );
        return Err(Failure::calculation_failed(format!(
            "Calculation of {measure} returned {} scenario values, expected {expected}",
            result.len()
        )));
    }
    Ok(result)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
