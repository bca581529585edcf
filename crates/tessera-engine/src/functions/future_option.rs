//! Calculation function for generic future options.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use tessera_core::types::{Currency, CurrencyAmount};
use tessera_products::future_option::GenericFutureOptionTrade;
use tessera_traits::{FunctionRequirements, MarketDataKey, ScenarioMarketData};

use crate::calculators::{CalculationError, MeasureCalculators};
use crate::function::{CalculationFunction, MeasureResults};
use crate::measure::Measure;
use crate::scenario::{ScenarioResult, ScenarioValue};

static CALCULATORS: Lazy<MeasureCalculators<GenericFutureOptionTrade>> =
    Lazy::new(|| MeasureCalculators::new().with(Measure::PRESENT_VALUE, present_value));

/// Prices a listed future option from the market quote of its security.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericFutureOptionFunction;

impl GenericFutureOptionFunction {
    /// Creates the function.
    pub fn new() -> Self {
        Self
    }
}

impl CalculationFunction for GenericFutureOptionFunction {
    type Target = GenericFutureOptionTrade;

    fn name(&self) -> &'static str {
        "GenericFutureOptionFunction"
    }

    fn supported_measures(&self) -> BTreeSet<Measure> {
        CALCULATORS.supported_measures()
    }

    fn default_reporting_currency(&self, target: &Self::Target) -> Option<Currency> {
        Some(target.product().currency())
    }

    fn requirements(
        &self,
        target: &Self::Target,
        measures: &BTreeSet<Measure>,
    ) -> FunctionRequirements {
        let mut builder =
            FunctionRequirements::builder().output_currency(target.product().currency());
        if measures.contains(&Measure::PRESENT_VALUE) {
            builder = builder.single_value(quote_key(target));
        }
        builder.build()
    }

    fn calculate(
        &self,
        target: &Self::Target,
        measures: &BTreeSet<Measure>,
        market_data: &dyn ScenarioMarketData,
    ) -> MeasureResults {
        CALCULATORS.calculate(target, measures, market_data)
    }
}

fn quote_key(trade: &GenericFutureOptionTrade) -> MarketDataKey {
    MarketDataKey::quote(trade.security_id().clone())
}

// value = quantity * (price / tick size) * tick value
fn present_value(
    trade: &GenericFutureOptionTrade,
    market_data: &dyn ScenarioMarketData,
) -> Result<ScenarioResult<ScenarioValue>, CalculationError> {
    let product = trade.product();
    let quantity = Decimal::from(trade.quantity());
    let ticks_per_unit = product.tick_value() / product.tick_size();

    market_data
        .values(&quote_key(trade))?
        .into_iter()
        .map(|price| {
            price
                .checked_mul(ticks_per_unit)
                .and_then(|v| v.checked_mul(quantity))
                .map(|v| ScenarioValue::from(CurrencyAmount::new(product.currency(), v)))
                .ok_or_else(|| CalculationError::failed("present value overflowed"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ScenarioResult::of)
}
