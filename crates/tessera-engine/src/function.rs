//! The calculation function contract.
//!
//! A calculation function knows how to calculate measures for one type of target.
//! Functions are written against the concrete trade type through
//! [`CalculationFunction`] and erased to [`TargetFunction`] for storage in the
//! registry, which routes every [`CalculationTarget`] by its [`TargetType`].
//!
//! [`TargetType`]: tessera_products::TargetType

use std::collections::{BTreeMap, BTreeSet};

use tessera_core::types::Currency;
use tessera_core::CalcResult;
use tessera_products::{CalculationTarget, TargetVariant};
use tessera_traits::{FunctionRequirements, ScenarioMarketData};

use crate::measure::Measure;
use crate::scenario::{ScenarioResult, ScenarioValue};

/// Results of one calculation, keyed by measure.
pub type MeasureResults = BTreeMap<Measure, CalcResult<ScenarioResult<ScenarioValue>>>;

/// Calculates measures for one concrete target type.
///
/// Implementations are stateless and shared between threads. `requirements` and
/// `calculate` must be pure functions of their arguments.
pub trait CalculationFunction: Send + Sync + 'static {
    /// The trade type this function handles.
    type Target: TargetVariant;

    /// Short name used in logs and listings.
    fn name(&self) -> &'static str;

    /// The measures this function can calculate. Stable for the life of the function.
    fn supported_measures(&self) -> BTreeSet<Measure>;

    /// The currency results are naturally reported in, if any.
    fn default_reporting_currency(&self, target: &Self::Target) -> Option<Currency>;

    /// The market data needed to calculate `measures` for `target`.
    ///
    /// Unsupported measures contribute nothing. The target's priced currency is always an
    /// output currency.
    fn requirements(&self, target: &Self::Target, measures: &BTreeSet<Measure>)
        -> FunctionRequirements;

    /// Calculates `measures` for `target`, returning one entry per requested measure.
    fn calculate(
        &self,
        target: &Self::Target,
        measures: &BTreeSet<Measure>,
        market_data: &dyn ScenarioMarketData,
    ) -> MeasureResults;
}

/// A calculation function over any [`CalculationTarget`].
///
/// This is the object-safe form stored in the registry.
pub trait TargetFunction: Send + Sync {
    /// Short name used in logs and listings.
    fn name(&self) -> &'static str;

    /// The measures this function can calculate.
    fn supported_measures(&self) -> BTreeSet<Measure>;

    /// See [`CalculationFunction::default_reporting_currency`].
    fn default_reporting_currency(&self, target: &CalculationTarget) -> Option<Currency>;

    /// See [`CalculationFunction::requirements`].
    fn requirements(
        &self,
        target: &CalculationTarget,
        measures: &BTreeSet<Measure>,
    ) -> FunctionRequirements;

    /// See [`CalculationFunction::calculate`].
    fn calculate(
        &self,
        target: &CalculationTarget,
        measures: &BTreeSet<Measure>,
        market_data: &dyn ScenarioMarketData,
    ) -> MeasureResults;

    /// Returns true for the function bound to targets nothing else handles.
    fn is_fallback(&self) -> bool {
        false
    }
}

/// Adapts a [`CalculationFunction`] to [`TargetFunction`].
///
/// # Panics
///
/// Every method panics if handed a target of a different type. The registry only
/// routes targets of `F::Target`'s type here, so a mismatch is a registry defect.
pub struct TypedFunction<F> {
    function: F,
}

impl<F: CalculationFunction> TypedFunction<F> {
    /// Wraps `function`.
    pub fn new(function: F) -> Self {
        Self { function }
    }

    /// Returns the wrapped function.
    pub fn inner(&self) -> &F {
        &self.function
    }

    fn project<'a>(&self, target: &'a CalculationTarget) -> &'a F::Target {
        match F::Target::from_target(target) {
            Some(t) => t,
            None => panic!(
                "{} handles {} targets but was given a {} target",
                self.function.name(),
                <F::Target as TargetVariant>::TARGET_TYPE,
                target.target_type()
            ),
        }
    }
}

impl<F: CalculationFunction> TargetFunction for TypedFunction<F> {
    fn name(&self) -> &'static str {
        self.function.name()
    }

    fn supported_measures(&self) -> BTreeSet<Measure> {
        self.function.supported_measures()
    }

    fn default_reporting_currency(&self, target: &CalculationTarget) -> Option<Currency> {
        self.function
            .default_reporting_currency(self.project(target))
    }

    fn requirements(
        &self,
        target: &CalculationTarget,
        measures: &BTreeSet<Measure>,
    ) -> FunctionRequirements {
        self.function.requirements(self.project(target), measures)
    }

    fn calculate(
        &self,
        target: &CalculationTarget,
        measures: &BTreeSet<Measure>,
        market_data: &dyn ScenarioMarketData,
    ) -> MeasureResults {
        self.function
            .calculate(self.project(target), measures, market_data)
    }
}
