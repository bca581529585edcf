//! The function bound to targets that have no configured calculation function.

use std::collections::BTreeSet;

use tessera_core::types::Currency;
use tessera_products::CalculationTarget;
use tessera_traits::{FunctionRequirements, ScenarioMarketData};

use crate::function::{MeasureResults, TargetFunction};
use crate::measure::Measure;

/// Stand-in for a missing calculation function.
///
/// It supports no measures and needs no market data, so an engine can plan and
/// aggregate around it. It must never be asked to calculate: doing so means the
/// caller ignored the empty measure set, and the call panics.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingConfigFunction;

impl TargetFunction for MissingConfigFunction {
    fn name(&self) -> &'static str {
        "MissingConfigFunction"
    }

    fn supported_measures(&self) -> BTreeSet<Measure> {
        BTreeSet::new()
    }

    fn default_reporting_currency(&self, _target: &CalculationTarget) -> Option<Currency> {
        None
    }

    fn requirements(
        &self,
        _target: &CalculationTarget,
        _measures: &BTreeSet<Measure>,
    ) -> FunctionRequirements {
        FunctionRequirements::empty()
    }

    fn calculate(
        &self,
        target: &CalculationTarget,
        _measures: &BTreeSet<Measure>,
        _market_data: &dyn ScenarioMarketData,
    ) -> MeasureResults {
        panic!(
            "No function configured for measures on '{}'",
            target.target_type()
        )
    }

    fn is_fallback(&self) -> bool {
        true
    }
}
