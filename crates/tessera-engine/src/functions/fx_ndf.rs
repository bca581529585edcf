//! Calculation function for FX non-deliverable forwards.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use tessera_core::types::Currency;
use tessera_products::fx_ndf::{ExpandedFxNonDeliverableForward, FxNonDeliverableForwardTrade};
use tessera_traits::{FunctionRequirements, MarketDataKey, ScenarioMarketData};

use crate::calculators::{CalculationError, MeasureCalculators};
use crate::function::{CalculationFunction, MeasureResults};
use crate::measure::Measure;
use crate::scenario::{ScenarioResult, ScenarioValue};

static CALCULATORS: Lazy<MeasureCalculators<FxNonDeliverableForwardTrade>> = Lazy::new(|| {
    MeasureCalculators::new()
        .with(Measure::PRESENT_VALUE, present_value)
        .with(Measure::FORWARD_FX_RATE, forward_fx_rate)
        .with(Measure::CURRENCY_EXPOSURE, currency_exposure)
});

/// Prices an NDF by discounting the settlement amount implied by the forward rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FxNdfFunction;

impl FxNdfFunction {
    /// Creates the function.
    pub fn new() -> Self {
        Self
    }
}

impl CalculationFunction for FxNdfFunction {
    type Target = FxNonDeliverableForwardTrade;

    fn name(&self) -> &'static str {
        "FxNdfFunction"
    }

    fn supported_measures(&self) -> BTreeSet<Measure> {
        CALCULATORS.supported_measures()
    }

    fn default_reporting_currency(&self, target: &Self::Target) -> Option<Currency> {
        Some(target.product().settlement_currency())
    }

    fn requirements(
        &self,
        target: &Self::Target,
        measures: &BTreeSet<Measure>,
    ) -> FunctionRequirements {
        let product = target.product();
        let mut builder =
            FunctionRequirements::builder().output_currency(product.settlement_currency());

        if measures.iter().any(|m| CALCULATORS.supports(m)) {
            builder = builder.single_value(forward_key(target));
        }
        if measures.contains(&Measure::PRESENT_VALUE)
            || measures.contains(&Measure::CURRENCY_EXPOSURE)
        {
            builder = builder.single_value(discount_key(target));
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

fn forward_key(trade: &FxNonDeliverableForwardTrade) -> MarketDataKey {
    MarketDataKey::fx_rate(trade.product().index().currency_pair())
}

fn discount_key(trade: &FxNonDeliverableForwardTrade) -> MarketDataKey {
    let product = trade.product();
    MarketDataKey::discount_factor(product.settlement_currency(), product.payment_date())
}

/// Observed index rate re-oriented as units of non-deliverable per unit of settlement.
fn settlement_forward(
    ndf: &ExpandedFxNonDeliverableForward,
    observed: Decimal,
) -> Result<Decimal, CalculationError> {
    let pair = ndf.index.currency_pair();
    let rate = if pair.base() == ndf.settlement_currency() {
        Some(observed)
    } else {
        Decimal::ONE.checked_div(observed)
    };
    match rate {
        Some(r) if !r.is_zero() => Ok(r),
        _ => Err(CalculationError::failed(format!(
            "forward rate for {pair} is zero"
        ))),
    }
}

fn forward_fx_rate(
    trade: &FxNonDeliverableForwardTrade,
    market_data: &dyn ScenarioMarketData,
) -> Result<ScenarioResult<ScenarioValue>, CalculationError> {
    Ok(market_data
        .values(&forward_key(trade))?
        .into_iter()
        .map(ScenarioValue::Rate)
        .collect())
}

// pv = notional * (1 - agreed / forward) * df
fn present_value(
    trade: &FxNonDeliverableForwardTrade,
    market_data: &dyn ScenarioMarketData,
) -> Result<ScenarioResult<ScenarioValue>, CalculationError> {
    let ndf = trade.product().expand();
    let settlement = ndf.settlement_currency();
    let agreed = ndf
        .agreed_fx_rate
        .fx_rate(settlement, trade.product().non_deliverable_currency())?;

    let forwards = market_data.values(&forward_key(trade))?;
    let discount_factors = market_data.values(&discount_key(trade))?;

    forwards
        .into_iter()
        .zip(discount_factors)
        .map(|(observed, df)| {
            let forward = settlement_forward(&ndf, observed)?;
            let ratio = agreed
                .checked_div(forward)
                .ok_or_else(|| CalculationError::failed("agreed/forward rate overflowed"))?;
            let pv = Decimal::ONE
                .checked_sub(ratio)
                .and_then(|v| v.checked_mul(df))
                .and_then(|v| ndf.settlement_currency_notional.checked_multiplied_by(v))
                .ok_or_else(|| CalculationError::failed("present value overflowed"))?;
            Ok(ScenarioValue::from(pv))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ScenarioResult::of)
}

fn currency_exposure(
    trade: &FxNonDeliverableForwardTrade,
    market_data: &dyn ScenarioMarketData,
) -> Result<ScenarioResult<ScenarioValue>, CalculationError> {
    let notional = trade.product().expand().settlement_currency_notional;
    market_data
        .values(&discount_key(trade))?
        .into_iter()
        .map(|df| {
            notional
                .checked_multiplied_by(df)
                .map(ScenarioValue::from)
                .ok_or_else(|| CalculationError::failed("currency exposure overflowed"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ScenarioResult::of)
}
