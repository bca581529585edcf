//! End-to-end dispatch tests: targets in, results grid out.

use std::collections::BTreeSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tessera_core::prelude::*;
use tessera_engine::*;
use tessera_products::prelude::*;
use tessera_traits::{FunctionRequirements, MarketDataKey, ScenarioMarketData, TraitError};

// =============================================================================
// FIXTURES
// =============================================================================

fn security_id() -> StandardId {
    StandardId::of("OG-Ticker", "ED-OPT-MAR26").unwrap()
}

fn future_option(currency: Currency) -> CalculationTarget {
    let product = GenericFutureOption::builder()
        .product_id(StandardId::of("OG-Future", "ED-OPT").unwrap())
        .currency(currency)
        .tick_size(dec!(0.005))
        .tick_value(dec!(12.5))
        .put_call(PutCall::Call)
        .strike(dec!(96.5))
        .build()
        .unwrap();
    GenericFutureOptionTrade::builder()
        .trade_id(StandardId::of("trade", "FO-1").unwrap())
        .security_id(security_id())
        .product(product)
        .quantity(20)
        .build()
        .unwrap()
        .into()
}

fn usd_krw() -> CurrencyPair {
    CurrencyPair::of(Currency::USD, Currency::KRW).unwrap()
}

fn payment_date() -> Date {
    Date::from_ymd(2026, 12, 16).unwrap()
}

fn ndf() -> CalculationTarget {
    let product = FxNonDeliverableForward::builder()
        .buy_sell(BuySell::Buy)
        .settlement_currency(Currency::USD)
        .notional(dec!(10_000_000))
        .agreed_fx_rate(FxRate::of(usd_krw(), dec!(1300)).unwrap())
        .payment_date(payment_date())
        .index(FxIndex::of("USD/KRW-KFTC18", usd_krw()).unwrap())
        .build()
        .unwrap();
    FxNonDeliverableForwardTrade::new(product).into()
}

fn measures(list: &[Measure]) -> BTreeSet<Measure> {
    list.iter().cloned().collect()
}

fn three_scenarios() -> ImmutableScenarioMarketData {
    ImmutableScenarioMarketData::builder(3)
        .add_scenario_values(
            MarketDataKey::quote(security_id()),
            vec![dec!(0.030), dec!(0.035), dec!(0.040)],
        )
        .unwrap()
        .add_scenario_values(
            MarketDataKey::fx_rate(usd_krw()),
            vec![dec!(1300), dec!(1325), dec!(1350)],
        )
        .unwrap()
        .add_value(
            MarketDataKey::discount_factor(Currency::USD, payment_date()),
            dec!(0.97),
        )
        .build()
}

fn engine(config: EngineConfig) -> CalculationEngine {
    CalculationEngineBuilder::new()
        .with_config(config)
        .build()
        .unwrap()
}

// =============================================================================
// FUTURE OPTION DISPATCH
// =============================================================================

#[test]
fn test_future_option_present_value_three_scenarios() {
    let target = future_option(Currency::USD);
    let registry = FunctionRegistry::standard();
    let function = registry.resolve(&target);
    let requested = measures(&[Measure::PRESENT_VALUE]);

    let reqs = function.requirements(&target, &requested);
    assert_eq!(
        reqs.single_values().iter().cloned().collect::<Vec<_>>(),
        vec![MarketDataKey::quote(security_id())]
    );
    assert_eq!(
        reqs.output_currencies().iter().copied().collect::<Vec<_>>(),
        vec![Currency::USD]
    );

    let results = function.calculate(&target, &requested, &three_scenarios());
    assert_eq!(results.len(), 1);
    let pv = results[&Measure::PRESENT_VALUE].as_ref().unwrap();
    assert_eq!(pv.len(), 3);
    // 20 contracts * (0.030 / 0.005) ticks * 12.5
    assert_eq!(pv.get(0).map(ScenarioValue::value), Some(dec!(1500)));
    assert!(pv.iter().all(|v| v.currency() == Some(Currency::USD)));
}

#[test]
fn test_unsupported_measure_alongside_supported() {
    let target = future_option(Currency::USD);
    let registry = FunctionRegistry::standard();
    let requested = measures(&[Measure::PRESENT_VALUE, Measure::IMPLIED_VOLATILITY]);

    let results = registry
        .resolve(&target)
        .calculate(&target, &requested, &three_scenarios());

    assert_eq!(results.len(), 2);
    assert!(results[&Measure::PRESENT_VALUE].is_ok());
    let iv = results[&Measure::IMPLIED_VOLATILITY].as_ref().unwrap_err();
    assert_eq!(iv.reason(), FailureReason::InvalidInput);
    assert!(iv.message().contains("ImpliedVolatility"));
}

// =============================================================================
// ENGINE
// =============================================================================

#[test]
fn test_engine_grid_shape_and_order() {
    let targets = vec![future_option(Currency::USD), ndf(), future_option(Currency::EUR)];
    let requested = measures(&[
        Measure::PRESENT_VALUE,
        Measure::FORWARD_FX_RATE,
        Measure::CURRENCY_EXPOSURE,
    ]);

    let results = engine(EngineConfig::default())
        .run(&targets, &requested, &three_scenarios())
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results.scenario_count(), 3);
    assert_eq!(results.measures(), requested.iter().cloned().collect::<Vec<_>>().as_slice());
    for row in results.rows() {
        assert_eq!(row.cells.len(), 3);
    }
    assert_eq!(results.rows()[1].target_type, TargetType::FxNdf);
    assert_eq!(results.rows()[2].reporting_currency, Some(Currency::EUR));

    // future option: pv ok, two unsupported; ndf: all three ok
    assert_eq!(results.succeeded(), 1 + 3 + 1);
    assert_eq!(results.failed(), 2 + 2);
}

#[test]
fn test_parallel_matches_sequential() {
    let targets: Vec<_> = (0..50)
        .map(|i| if i % 2 == 0 { future_option(Currency::USD) } else { ndf() })
        .collect();
    let requested = measures(&[Measure::PRESENT_VALUE, Measure::FORWARD_FX_RATE]);
    let md = three_scenarios();

    let sequential = engine(EngineConfig::default()).calculate(&targets, &requested, &md);
    let parallel = engine(EngineConfig {
        parallel: true,
        ..EngineConfig::default()
    })
    .calculate(&targets, &requested, &md);

    assert_eq!(sequential.len(), parallel.len());
    for (a, b) in sequential.rows().iter().zip(parallel.rows()) {
        assert_eq!(a.target_type, b.target_type);
        assert_eq!(a.cells, b.cells);
    }
}

#[test]
fn test_reporting_currency_override() {
    let engine = engine(EngineConfig {
        reporting_currency: Some(Currency::GBP),
        ..EngineConfig::default()
    });
    let target = future_option(Currency::USD);

    assert_eq!(engine.reporting_currency(&target), Some(Currency::GBP));
    let reqs = engine.requirements(&[target], &measures(&[Measure::PRESENT_VALUE]));
    assert!(reqs.output_currencies().contains(&Currency::GBP));
    assert!(reqs.output_currencies().contains(&Currency::USD));
}

#[test]
fn test_engine_requirements_union() {
    let engine = engine(EngineConfig::default());
    let reqs = engine.requirements(
        &[future_option(Currency::USD), ndf()],
        &measures(&[Measure::PRESENT_VALUE]),
    );
    assert_eq!(reqs.single_values().len(), 3);
    assert!(reqs
        .single_values()
        .contains(&MarketDataKey::discount_factor(Currency::USD, payment_date())));
}

#[test]
fn test_unconfigured_target_type_fails_every_measure() {
    let registry = FunctionRegistry::builder()
        .register(GenericFutureOptionFunction)
        .build_lenient();
    let engine = CalculationEngineBuilder::new()
        .with_registry(Arc::new(registry))
        .build()
        .unwrap();
    let requested = measures(&[Measure::PRESENT_VALUE, Measure::FORWARD_FX_RATE]);

    let reqs = engine.requirements(&[ndf()], &requested);
    assert!(reqs.is_empty());

    let results = engine.calculate(&[ndf()], &requested, &three_scenarios());
    assert_eq!(results.rows()[0].reporting_currency, None);
    for measure in &requested {
        let failure = results.get(0, measure).unwrap().as_ref().unwrap_err();
        assert_eq!(failure.reason(), FailureReason::MissingConfig);
        assert!(failure.message().contains("FxNonDeliverableForwardTrade"));
    }
}

#[test]
fn test_missing_market_data_aborts_run() {
    let empty = ImmutableScenarioMarketData::builder(3).build();
    let err = engine(EngineConfig::default())
        .run(&[ndf()], &measures(&[Measure::PRESENT_VALUE]), &empty)
        .unwrap_err();
    assert!(matches!(err, EngineError::MarketData(TraitError::NotFound(_))));
}

#[test]
fn test_missing_market_data_in_calculate_is_per_measure() {
    let md = ImmutableScenarioMarketData::builder(2)
        .add_value(MarketDataKey::fx_rate(usd_krw()), dec!(1310))
        .build();
    let results = engine(EngineConfig::default()).calculate(
        &[ndf()],
        &measures(&[Measure::PRESENT_VALUE, Measure::FORWARD_FX_RATE]),
        &md,
    );

    let pv = results.get(0, &Measure::PRESENT_VALUE).unwrap();
    assert_eq!(pv.as_ref().unwrap_err().reason(), FailureReason::MissingData);
    let fwd = results.get(0, &Measure::FORWARD_FX_RATE).unwrap().as_ref().unwrap();
    assert_eq!(fwd.len(), 2);
}

#[test]
fn test_strict_config_rejects_incomplete_registry() {
    // standard registry is complete, so strict build succeeds
    assert!(CalculationEngineBuilder::new()
        .with_config(EngineConfig::default())
        .build()
        .is_ok());

    let err = FunctionRegistry::builder()
        .register(FxNdfFunction)
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("GenericFutureOption"));
}

/// Reports a single forward rate whatever the scenario count.
struct SingleValueFunction;

impl CalculationFunction for SingleValueFunction {
    type Target = GenericFutureOptionTrade;

    fn name(&self) -> &'static str {
        "SingleValueFunction"
    }

    fn supported_measures(&self) -> BTreeSet<Measure> {
        measures(&[Measure::FORWARD_FX_RATE])
    }

    fn default_reporting_currency(&self, _target: &GenericFutureOptionTrade) -> Option<Currency> {
        None
    }

    fn requirements(
        &self,
        _target: &GenericFutureOptionTrade,
        _measures: &BTreeSet<Measure>,
    ) -> FunctionRequirements {
        FunctionRequirements::empty()
    }

    fn calculate(
        &self,
        _target: &GenericFutureOptionTrade,
        measures: &BTreeSet<Measure>,
        _market_data: &dyn ScenarioMarketData,
    ) -> MeasureResults {
        measures
            .iter()
            .map(|m| {
                let values = ScenarioResult::of(vec![ScenarioValue::Rate(Decimal::ONE)]);
                (m.clone(), Ok(values))
            })
            .collect()
    }
}

#[test]
fn test_registered_function_with_short_result_fails_measure() {
    let registry = FunctionRegistry::builder()
        .register(SingleValueFunction)
        .register(FxNdfFunction)
        .build()
        .unwrap();
    let engine = CalculationEngineBuilder::new()
        .with_registry(Arc::new(registry))
        .build()
        .unwrap();

    let results = engine.calculate(
        &[future_option(Currency::USD)],
        &measures(&[Measure::FORWARD_FX_RATE]),
        &three_scenarios(),
    );

    assert_eq!(results.scenario_count(), 3);
    let failure = results
        .get(0, &Measure::FORWARD_FX_RATE)
        .unwrap()
        .as_ref()
        .unwrap_err();
    assert_eq!(failure.reason(), FailureReason::CalculationFailed);
    assert!(failure.message().contains("returned 1 scenario values"));
    assert_eq!(results.succeeded(), 0);
}

// =============================================================================
// FALLBACK
// =============================================================================

#[test]
fn test_fallback_declares_nothing() {
    let target = future_option(Currency::USD);
    let fallback = MissingConfigFunction;
    assert!(fallback.supported_measures().is_empty());
    assert_eq!(
        fallback.requirements(&target, &measures(&Measure::standard())),
        FunctionRequirements::empty()
    );
    assert_eq!(fallback.default_reporting_currency(&target), None);
}

#[test]
#[should_panic(expected = "No function configured for measures on 'GenericFutureOptionTrade'")]
fn test_fallback_calculate_panics() {
    let target = future_option(Currency::USD);
    MissingConfigFunction.calculate(&target, &measures(&[Measure::PRESENT_VALUE]), &three_scenarios());
}

#[test]
#[should_panic(expected = "No function configured for measures on 'FxNonDeliverableForwardTrade'")]
fn test_fallback_calculate_panics_with_no_measures() {
    let empty = ImmutableScenarioMarketData::builder(0).build();
    MissingConfigFunction.calculate(&ndf(), &BTreeSet::new(), &empty);
}

#[test]
#[should_panic(expected = "was given a FxNonDeliverableForwardTrade target")]
fn test_typed_function_rejects_wrong_target() {
    let function = TypedFunction::new(GenericFutureOptionFunction);
    function.requirements(&ndf(), &measures(&[Measure::PRESENT_VALUE]));
}

#[test]
fn test_scenario_values_helper_length() {
    let md = three_scenarios();
    let values: Vec<Decimal> = md.values(&MarketDataKey::quote(security_id())).unwrap();
    assert_eq!(values.len(), md.scenario_count());
}
