//! Property-based tests for dispatch invariants.
//!
//! - every function returns exactly one entry per requested measure
//! - unsupported measures fail with `InvalidInput` naming the measure
//! - supported measures on complete market data succeed with one value per scenario
//! - requirements are idempotent, monotone under measure-set union, and always carry
//!   the priced currency

use std::collections::BTreeSet;

use proptest::prelude::*;
use rust_decimal::Decimal;

use tessera_core::prelude::*;
use tessera_engine::{FunctionRegistry, ImmutableScenarioMarketData, Measure, TargetFunction};
use tessera_products::prelude::*;
use tessera_traits::{MarketDataKey, ScenarioMarketData};

// =============================================================================
// STRATEGIES
// =============================================================================

fn measure_set() -> impl Strategy<Value = BTreeSet<Measure>> {
    let custom = prop_oneof![Just("Theta"), Just("Gamma"), Just("ParRate")]
        .prop_map(|name| Measure::of(name).unwrap());
    let any_measure = prop_oneof![
        4 => proptest::sample::select(Measure::standard().to_vec()),
        1 => custom,
    ];
    proptest::collection::btree_set(any_measure, 0..6)
}

/// Positive decimal with up to four decimal places.
fn positive_decimal(max: i64) -> impl Strategy<Value = Decimal> {
    (1..max * 10_000).prop_map(|v| Decimal::new(v, 4))
}

fn settlement_currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::USD), Just(Currency::EUR)]
}

fn future_option_target() -> impl Strategy<Value = CalculationTarget> {
    (settlement_currency(), -500i64..500, 1i64..100).prop_map(|(currency, quantity, ticker)| {
        let product = GenericFutureOption::builder()
            .product_id(StandardId::of("OG-Future", "OPT").unwrap())
            .currency(currency)
            .tick_size(Decimal::new(5, 3))
            .tick_value(Decimal::new(125, 1))
            .build()
            .unwrap();
        GenericFutureOptionTrade::builder()
            .security_id(StandardId::of("OG-Ticker", format!("OPT{ticker}")).unwrap())
            .product(product)
            .quantity(quantity)
            .build()
            .unwrap()
            .into()
    })
}

fn ndf_target() -> impl Strategy<Value = CalculationTarget> {
    (
        settlement_currency(),
        prop_oneof![Just(Currency::INR), Just(Currency::KRW), Just(Currency::BRL)],
        any::<bool>(),
        positive_decimal(10_000_000),
        positive_decimal(2_000),
    )
        .prop_map(|(settlement, other, buy, notional, agreed)| {
            let pair = CurrencyPair::of(settlement, other).unwrap();
            let product = FxNonDeliverableForward::builder()
                .buy_sell(if buy { BuySell::Buy } else { BuySell::Sell })
                .settlement_currency(settlement)
                .notional(notional)
                .agreed_fx_rate(FxRate::of(pair, agreed).unwrap())
                .payment_date(Date::from_ymd(2027, 3, 17).unwrap())
                .index(FxIndex::of(format!("{pair}-FIX"), pair).unwrap())
                .build()
                .unwrap();
            FxNonDeliverableForwardTrade::new(product).into()
        })
}

fn target() -> impl Strategy<Value = CalculationTarget> {
    prop_oneof![future_option_target(), ndf_target()]
}

/// Market data holding every key `target` could need, with positive values.
fn complete_market_data(
    target: &CalculationTarget,
    function: &dyn TargetFunction,
    scenario_values: &[Decimal],
) -> ImmutableScenarioMarketData {
    let reqs = function.requirements(target, &function.supported_measures());
    let mut builder = ImmutableScenarioMarketData::builder(scenario_values.len());
    for key in reqs.single_values() {
        builder = builder
            .add_scenario_values(key.clone(), scenario_values.to_vec())
            .unwrap();
    }
    builder.build()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn property_one_entry_per_requested_measure(
        target in target(),
        measures in measure_set(),
        values in proptest::collection::vec(positive_decimal(2), 1..6),
    ) {
        let registry = FunctionRegistry::standard();
        let function = registry.resolve(&target);
        let md = complete_market_data(&target, function, &values);

        let results = function.calculate(&target, &measures, &md);
        prop_assert_eq!(
            results.keys().cloned().collect::<BTreeSet<_>>(),
            measures.clone()
        );

        for (measure, result) in &results {
            if function.supported_measures().contains(measure) {
                let scenarios = result.as_ref().map_err(|f| TestCaseError::fail(f.to_string()))?;
                prop_assert_eq!(scenarios.len(), md.scenario_count());
            } else {
                let failure = result.as_ref().unwrap_err();
                prop_assert_eq!(failure.reason(), FailureReason::InvalidInput);
                prop_assert!(failure.message().contains(measure.name()));
            }
        }
    }

    #[test]
    fn property_requirements_idempotent(target in target(), measures in measure_set()) {
        let registry = FunctionRegistry::standard();
        let function = registry.resolve(&target);
        prop_assert_eq!(
            function.requirements(&target, &measures),
            function.requirements(&target, &measures)
        );
    }

    #[test]
    fn property_requirements_monotone_under_union(
        target in target(),
        a in measure_set(),
        b in measure_set(),
    ) {
        let registry = FunctionRegistry::standard();
        let function = registry.resolve(&target);
        let union: BTreeSet<Measure> = a.union(&b).cloned().collect();

        let ra = function.requirements(&target, &a);
        let rb = function.requirements(&target, &b);
        let ru = function.requirements(&target, &union);

        prop_assert!(ra.single_values().is_subset(ru.single_values()));
        prop_assert!(rb.single_values().is_subset(ru.single_values()));
        prop_assert!(ru.output_currencies().contains(&target.priced_currency()));
        prop_assert!(ra.output_currencies().contains(&target.priced_currency()));
    }

    #[test]
    fn property_unsupported_only_needs_no_market_data(target in target()) {
        let registry = FunctionRegistry::standard();
        let function = registry.resolve(&target);
        let unsupported: BTreeSet<Measure> = [Measure::PV01, Measure::IMPLIED_VOLATILITY]
            .into_iter()
            .collect();
        let reqs = function.requirements(&target, &unsupported);
        prop_assert!(reqs.single_values().is_empty());

        let md = ImmutableScenarioMarketData::builder(2).build();
        let results = function.calculate(&target, &unsupported, &md);
        prop_assert!(results.values().all(|r| r
            .as_ref()
            .is_err_and(|f| f.reason() == FailureReason::InvalidInput)));
    }
}

#[test]
fn test_requirement_keys_are_scenario_indexed() {
    let key = MarketDataKey::quote(StandardId::of("OG-Ticker", "OPT1").unwrap());
    let md = ImmutableScenarioMarketData::builder(4)
        .add_value(key.clone(), Decimal::ONE)
        .build();
    assert_eq!(md.values(&key).unwrap().len(), 4);
}
