//! The calculation engine: routes targets to functions and collects the results grid.

use std::collections::BTreeSet;
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, error, info, info_span, warn};
use uuid::Uuid;

use tessera_core::types::{Currency, StandardId};
use tessera_core::{CalcResult, Failure};
use tessera_products::{CalculationTarget, TargetType};
use tessera_traits::{FunctionRequirements, MarketDataBuilder, ScenarioMarketData};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::function::{MeasureResults, TargetFunction};
use crate::measure::Measure;
use crate::registry::FunctionRegistry;
use crate::scenario::{ScenarioResult, ScenarioValue};

/// Results for one target.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    /// Type of the target
    pub target_type: TargetType,
    /// Trade identifier, if the trade has one
    pub trade_id: Option<StandardId>,
    /// Currency the row is reported in, if known
    pub reporting_currency: Option<Currency>,
    /// One entry per requested measure
    pub cells: MeasureResults,
}

impl ResultRow {
    /// The result for `measure`.
    pub fn get(&self, measure: &Measure) -> Option<&CalcResult<ScenarioResult<ScenarioValue>>> {
        self.cells.get(measure)
    }
}

/// Grid of results: one row per target, one column per measure.
#[derive(Debug, Clone, Serialize)]
pub struct Results {
    run_id: Uuid,
    measures: Vec<Measure>,
    scenario_count: usize,
    rows: Vec<ResultRow>,
}

impl Results {
    /// Identifier of the run that produced these results.
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// The measure columns, in order.
    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    /// Number of scenarios in every successful cell.
    pub fn scenario_count(&self) -> usize {
        self.scenario_count
    }

    /// The rows, in target order.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The cell at `row` for `measure`.
    pub fn get(
        &self,
        row: usize,
        measure: &Measure,
    ) -> Option<&CalcResult<ScenarioResult<ScenarioValue>>> {
        self.rows.get(row).and_then(|r| r.get(measure))
    }

    /// Number of successful cells.
    pub fn succeeded(&self) -> usize {
        self.cells().filter(|c| c.is_ok()).count()
    }

    /// Number of failed cells.
    pub fn failed(&self) -> usize {
        self.cells().filter(|c| c.is_err()).count()
    }

    fn cells(&self) -> impl Iterator<Item = &CalcResult<ScenarioResult<ScenarioValue>>> {
        self.rows.iter().flat_map(|r| r.cells.values())
    }
}

/// Routes each target to its calculation function and aggregates the results.
///
/// The engine holds no mutable state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct CalculationEngine {
    registry: Arc<FunctionRegistry>,
    config: EngineConfig,
}

impl CalculationEngine {
    /// Create a new engine.
    pub fn new(registry: Arc<FunctionRegistry>, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    /// Get the function registry.
    pub fn registry(&self) -> &Arc<FunctionRegistry> {
        &self.registry
    }

    /// Get the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The union of the market data every target needs for `measures`.
    pub fn requirements(
        &self,
        targets: &[CalculationTarget],
        measures: &BTreeSet<Measure>,
    ) -> FunctionRequirements {
        let mut requirements = FunctionRequirements::empty();
        if let Some(currency) = self.config.reporting_currency {
            requirements = FunctionRequirements::builder()
                .output_currency(currency)
                .build();
        }
        targets.iter().fold(requirements, |acc, target| {
            let function = self.registry.resolve(target);
            acc.combined_with(&function.requirements(target, measures))
        })
    }

    /// The currency `target` is reported in.
    pub fn reporting_currency(&self, target: &CalculationTarget) -> Option<Currency> {
        self.config.reporting_currency.or_else(|| {
            self.registry
                .resolve(target)
                .default_reporting_currency(target)
        })
    }

    /// Calculates `measures` for every target against `market_data`.
    ///
    /// Rows are returned in target order whether or not the calculation runs in
    /// parallel.
    pub fn calculate(
        &self,
        targets: &[CalculationTarget],
        measures: &BTreeSet<Measure>,
        market_data: &dyn ScenarioMarketData,
    ) -> Results {
        self.calculate_run(Uuid::new_v4(), targets, measures, market_data)
    }

    /// Derives requirements, builds market data, then calculates.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::MarketData` if the market data cannot be built. Calculation
    /// failures are reported in the results, not as errors.
    pub fn run(
        &self,
        targets: &[CalculationTarget],
        measures: &BTreeSet<Measure>,
        market_data: &dyn MarketDataBuilder,
    ) -> Result<Results, EngineError> {
        let run_id = Uuid::new_v4();
        let span = info_span!("calculation_run", %run_id, engine = %self.config.name);
        let _guard = span.enter();

        let requirements = self.requirements(targets, measures);
        info!(
            targets = targets.len(),
            measures = measures.len(),
            market_data_keys = requirements.single_values().len(),
            "starting calculation run"
        );

        let data = market_data.build(&requirements)?;
        let results = self.calculate_run(run_id, targets, measures, data.as_ref());

        info!(
            succeeded = results.succeeded(),
            failed = results.failed(),
            "calculation run complete"
        );
        Ok(results)
    }

    fn calculate_run(
        &self,
        run_id: Uuid,
        targets: &[CalculationTarget],
        measures: &BTreeSet<Measure>,
        market_data: &dyn ScenarioMarketData,
    ) -> Results {
        let rows: Vec<ResultRow> = if self.config.parallel {
            targets
                .par_iter()
                .map(|target| self.calculate_target(target, measures, market_data))
                .collect()
        } else {
            targets
                .iter()
                .map(|target| self.calculate_target(target, measures, market_data))
                .collect()
        };

        Results {
            run_id,
            measures: measures.iter().cloned().collect(),
            scenario_count: market_data.scenario_count(),
            rows,
        }
    }

    fn calculate_target(
        &self,
        target: &CalculationTarget,
        measures: &BTreeSet<Measure>,
        market_data: &dyn ScenarioMarketData,
    ) -> ResultRow {
        let target_type = target.target_type();
        let function = self.registry.resolve(target);

        let cells = if function.is_fallback() {
            warn!(%target_type, "no calculation function configured");
            let failure = Failure::missing_config(format!(
                "No function configured for target type {target_type}"
            ));
            measures
                .iter()
                .map(|m| (m.clone(), Err(failure.clone())))
                .collect()
        } else {
            debug!(%target_type, function = function.name(), "dispatching target");
            let results = function.calculate(target, measures, market_data);
            normalise(function, measures, market_data.scenario_count(), results)
        };

        ResultRow {
            target_type,
            trade_id: target.trade_id().cloned(),
            reporting_currency: self.reporting_currency(target),
            cells,
        }
    }
}

/// Keeps exactly the requested measures, failing any the function left out or
/// returned with the wrong number of scenario values.
fn normalise(
    function: &dyn TargetFunction,
    measures: &BTreeSet<Measure>,
    scenario_count: usize,
    mut results: MeasureResults,
) -> MeasureResults {
    let cells: MeasureResults = measures
        .iter()
        .map(|measure| {
            let result = match results.remove(measure) {
                Some(Ok(values)) if values.len() != scenario_count => {
                    error!(
                        function = function.name(),
                        %measure,
                        expected = scenario_count,
                        actual = values.len(),
                        "function returned wrong number of scenarios"
                    );
                    Err(Failure::calculation_failed(format!(
                        "{} returned {} scenario values for measure {measure}, expected {scenario_count}",
                        function.name(),
                        values.len()
                    )))
                }
                Some(result) => result,
                None => {
                    warn!(function = function.name(), %measure, "function returned no result");
                    Err(Failure::calculation_failed(format!(
                        "{} returned no result for measure {measure}",
                        function.name()
                    )))
                }
            };
            (measure.clone(), result)
        })
        .collect();

    for extra in results.keys() {
        warn!(function = function.name(), measure = %extra, "dropping unrequested result");
    }
    cells
}
