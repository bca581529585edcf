//! Job files: engine settings, trades and scenario market data in one TOML document.
//!
//! ```toml
//! measures = ["PresentValue"]
//!
//! [engine]
//! parallel = true
//!
//! [[trades]]
//! type = "fx-ndf"
//! id = "trade~NDF-1"
//! buy_sell = "buy"
//! settlement_currency = "USD"
//! notional = 10000000
//! index = "USD/KRW-KFTC18"
//! index_pair = "USD/KRW"
//! agreed_rate = 1300
//! payment_date = "2026-12-16"
//!
//! [market_data]
//! scenarios = 2
//!
//! [[market_data.fx_rates]]
//! pair = "USD/KRW"
//! values = [1310, 1320]
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use tessera_core::types::{BuySell, Currency, CurrencyPair, Date, FxRate, StandardId};
use tessera_engine::{EngineConfig, ImmutableScenarioMarketData, Measure};
use tessera_products::future_option::{GenericFutureOption, GenericFutureOptionTrade, PutCall};
use tessera_products::fx_index::FxIndex;
use tessera_products::fx_ndf::{FxNonDeliverableForward, FxNonDeliverableForwardTrade};
use tessera_products::CalculationTarget;
use tessera_traits::MarketDataKey;

use crate::error::{CliError, CliResult};

/// A calculation job.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    /// Engine settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Measures to calculate for every trade.
    #[serde(default)]
    pub measures: Vec<String>,

    /// Trades to calculate.
    #[serde(default)]
    pub trades: Vec<TradeSpec>,

    /// Scenario market data.
    #[serde(default)]
    pub market_data: MarketDataSpec,
}

/// A trade, tagged by its `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TradeSpec {
    /// `type = "generic-future-option"`
    GenericFutureOption(FutureOptionSpec),
    /// `type = "fx-ndf"`
    FxNdf(FxNdfSpec),
}

/// Fields of a generic future option trade.
#[derive(Debug, Deserialize)]
pub struct FutureOptionSpec {
    pub id: Option<String>,
    pub trade_date: Option<Date>,
    pub security_id: String,
    pub product_id: String,
    pub currency: Currency,
    pub tick_size: Decimal,
    pub tick_value: Decimal,
    pub quantity: i64,
    pub put_call: Option<PutCall>,
    pub strike: Option<Decimal>,
    pub expiry: Option<Date>,
}

/// Fields of an FX non-deliverable forward trade.
#[derive(Debug, Deserialize)]
pub struct FxNdfSpec {
    pub id: Option<String>,
    pub trade_date: Option<Date>,
    pub buy_sell: BuySell,
    pub settlement_currency: Currency,
    pub notional: Decimal,
    /// Index name, e.g. `USD/KRW-KFTC18`.
    pub index: String,
    /// Index currency pair, e.g. `USD/KRW`.
    pub index_pair: String,
    pub agreed_rate: Decimal,
    /// Pair the agreed rate is quoted in; defaults to the index pair.
    pub agreed_pair: Option<String>,
    pub payment_date: Date,
}

/// Scenario market data.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketDataSpec {
    #[serde(default = "default_scenarios")]
    pub scenarios: usize,
    #[serde(default)]
    pub quotes: Vec<QuoteSpec>,
    #[serde(default)]
    pub fx_rates: Vec<FxRateSpec>,
    #[serde(default)]
    pub discount_factors: Vec<DiscountFactorSpec>,
}

fn default_scenarios() -> usize {
    1
}

impl Default for MarketDataSpec {
    fn default() -> Self {
        Self {
            scenarios: default_scenarios(),
            quotes: Vec::new(),
            fx_rates: Vec::new(),
            discount_factors: Vec::new(),
        }
    }
}

/// A security quote.
#[derive(Debug, Deserialize)]
pub struct QuoteSpec {
    pub id: String,
    #[serde(flatten)]
    pub values: ValueSpec,
}

/// An FX rate observation.
#[derive(Debug, Deserialize)]
pub struct FxRateSpec {
    pub pair: String,
    #[serde(flatten)]
    pub values: ValueSpec,
}

/// A discount factor to a date.
#[derive(Debug, Deserialize)]
pub struct DiscountFactorSpec {
    pub currency: Currency,
    pub date: Date,
    #[serde(flatten)]
    pub values: ValueSpec,
}

/// Either one value for all scenarios or one value per scenario.
#[derive(Debug, Default, Deserialize)]
pub struct ValueSpec {
    pub value: Option<Decimal>,
    pub values: Option<Vec<Decimal>>,
}

impl Job {
    /// Reads and parses a job file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ReadJob {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a job from TOML text.
    pub fn from_toml_str(content: &str) -> CliResult<Self> {
        toml::from_str(content).map_err(|e| CliError::InvalidJob(e.to_string()))
    }

    /// The measures to calculate: `overrides` when given, else the job's own list.
    pub fn measures(&self, overrides: &[String]) -> CliResult<BTreeSet<Measure>> {
        let names = if overrides.is_empty() {
            self.measures.as_slice()
        } else {
            overrides
        };
        let measures = names
            .iter()
            .map(|name| {
                name.parse::<Measure>()
                    .map_err(|_| CliError::InvalidMeasure(name.clone()))
            })
            .collect::<CliResult<BTreeSet<_>>>()?;
        if measures.is_empty() {
            return Err(CliError::NoMeasures);
        }
        Ok(measures)
    }

    /// Builds the calculation targets, in file order.
    pub fn targets(&self) -> CliResult<Vec<CalculationTarget>> {
        self.trades
            .iter()
            .enumerate()
            .map(|(i, trade)| {
                trade.to_target().map_err(|reason| CliError::InvalidTrade {
                    trade: trade.label(i),
                    reason,
                })
            })
            .collect()
    }

    /// Builds the scenario market data.
    pub fn market_data(&self) -> CliResult<ImmutableScenarioMarketData> {
        let spec = &self.market_data;
        let mut entries = Vec::new();

        for quote in &spec.quotes {
            let id = quote.id.parse::<StandardId>().map_err(|e| CliError::InvalidMarketData {
                key: quote.id.clone(),
                reason: e.to_string(),
            })?;
            entries.push((MarketDataKey::quote(id), &quote.values));
        }
        for fx in &spec.fx_rates {
            let pair = parse_pair(&fx.pair).map_err(|reason| CliError::InvalidMarketData {
                key: fx.pair.clone(),
                reason,
            })?;
            entries.push((MarketDataKey::fx_rate(pair), &fx.values));
        }
        for df in &spec.discount_factors {
            entries.push((
                MarketDataKey::discount_factor(df.currency, df.date),
                &df.values,
            ));
        }

        let mut builder = ImmutableScenarioMarketData::builder(spec.scenarios);
        for (key, values) in entries {
            let label = key.to_string();
            let invalid = |reason: String| CliError::InvalidMarketData {
                key: label.clone(),
                reason,
            };
            builder = match (values.value, &values.values) {
                (Some(value), None) => builder.add_value(key, value),
                (None, Some(per_scenario)) => builder
                    .add_scenario_values(key, per_scenario.clone())
                    .map_err(|e| invalid(e.to_string()))?,
                _ => {
                    return Err(invalid(
                        "exactly one of `value` or `values` is required".to_string(),
                    ))
                }
            };
        }
        Ok(builder.build())
    }
}

impl TradeSpec {
    fn id(&self) -> Option<&str> {
        match self {
            TradeSpec::GenericFutureOption(spec) => spec.id.as_deref(),
            TradeSpec::FxNdf(spec) => spec.id.as_deref(),
        }
    }

    /// The trade id, or its position when it has none.
    fn label(&self, index: usize) -> String {
        self.id()
            .map_or_else(|| format!("#{}", index + 1), str::to_string)
    }

    fn to_target(&self) -> Result<CalculationTarget, String> {
        match self {
            TradeSpec::GenericFutureOption(spec) => spec.to_trade().map(Into::into),
            TradeSpec::FxNdf(spec) => spec.to_trade().map(Into::into),
        }
    }
}

impl FutureOptionSpec {
    fn to_trade(&self) -> Result<GenericFutureOptionTrade, String> {
        let mut product = GenericFutureOption::builder()
            .product_id(parse_id(&self.product_id)?)
            .currency(self.currency)
            .tick_size(self.tick_size)
            .tick_value(self.tick_value);
        if let Some(put_call) = self.put_call {
            product = product.put_call(put_call);
        }
        if let Some(strike) = self.strike {
            product = product.strike(strike);
        }
        if let Some(expiry) = self.expiry {
            product = product.expiry(expiry);
        }

        let mut trade = GenericFutureOptionTrade::builder()
            .security_id(parse_id(&self.security_id)?)
            .product(product.build().map_err(|e| e.to_string())?)
            .quantity(self.quantity);
        if let Some(id) = &self.id {
            trade = trade.trade_id(parse_id(id)?);
        }
        if let Some(date) = self.trade_date {
            trade = trade.trade_date(date);
        }
        trade.build().map_err(|e| e.to_string())
    }
}

impl FxNdfSpec {
    fn to_trade(&self) -> Result<FxNonDeliverableForwardTrade, String> {
        let index_pair = parse_pair(&self.index_pair)?;
        let agreed_pair = match &self.agreed_pair {
            Some(pair) => parse_pair(pair)?,
            None => index_pair,
        };
        let agreed = FxRate::of(agreed_pair, self.agreed_rate).map_err(|e| e.to_string())?;
        let index = FxIndex::of(self.index.clone(), index_pair).map_err(|e| e.to_string())?;

        let product = FxNonDeliverableForward::builder()
            .buy_sell(self.buy_sell)
            .settlement_currency(self.settlement_currency)
            .notional(self.notional)
            .agreed_fx_rate(agreed)
            .payment_date(self.payment_date)
            .index(index)
            .build()
            .map_err(|e| e.to_string())?;

        let mut trade = FxNonDeliverableForwardTrade::new(product);
        if let Some(id) = &self.id {
            trade = trade.with_trade_id(parse_id(id)?);
        }
        if let Some(date) = self.trade_date {
            trade = trade.with_trade_date(date);
        }
        Ok(trade)
    }
}

fn parse_id(s: &str) -> Result<StandardId, String> {
    s.parse().map_err(|e: tessera_core::CoreError| e.to_string())
}

fn parse_pair(s: &str) -> Result<CurrencyPair, String> {
    s.parse().map_err(|e: tessera_core::CoreError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_products::TargetType;
    use tessera_traits::ScenarioMarketData;

    const JOB: &str = r#"
measures = ["PresentValue", "ForwardFxRate"]

[engine]
name = "test"
parallel = true

[[trades]]
type = "generic-future-option"
id = "trade~FO-1"
security_id = "OG-Ticker~ED-OPT-MAR26"
product_id = "OG-Future~ED-OPT"
currency = "USD"
tick_size = 0.005
tick_value = 12.5
quantity = 20
put_call = "call"
strike = 96.5

[[trades]]
type = "fx-ndf"
buy_sell = "sell"
settlement_currency = "USD"
notional = 1000000
index = "USD/INR-FBIL"
index_pair = "USD/INR"
agreed_rate = 83
payment_date = "2026-12-16"

[market_data]
scenarios = 2

[[market_data.quotes]]
id = "OG-Ticker~ED-OPT-MAR26"
values = [0.03, 0.04]

[[market_data.fx_rates]]
pair = "USD/INR"
value = 84

[[market_data.discount_factors]]
currency = "USD"
date = "2026-12-16"
value = 0.97
"#;

    #[test]
    fn test_parse_job() {
        let job = Job::from_toml_str(JOB).unwrap();
        assert_eq!(job.engine.name, "test");
        assert!(job.engine.parallel);
        assert!(job.engine.strict_registry);

        let targets = job.targets().unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].target_type(), TargetType::GenericFutureOption);
        assert_eq!(targets[0].trade_id().map(ToString::to_string).as_deref(), Some("trade~FO-1"));
        assert_eq!(targets[1].target_type(), TargetType::FxNdf);
        assert!(targets[1].trade_id().is_none());
    }

    #[test]
    fn test_market_data() {
        let job = Job::from_toml_str(JOB).unwrap();
        let md = job.market_data().unwrap();
        assert_eq!(md.scenario_count(), 2);

        let pair: CurrencyPair = "USD/INR".parse().unwrap();
        let fx = md.values(&MarketDataKey::fx_rate(pair)).unwrap();
        assert_eq!(fx, vec![Decimal::from(84), Decimal::from(84)]);
    }

    #[test]
    fn test_measure_overrides() {
        let job = Job::from_toml_str(JOB).unwrap();
        assert_eq!(job.measures(&[]).unwrap().len(), 2);

        let only_pv = job.measures(&["PresentValue".to_string()]).unwrap();
        assert_eq!(only_pv.into_iter().collect::<Vec<_>>(), vec![Measure::PRESENT_VALUE]);

        assert!(matches!(
            job.measures(&[" ".to_string()]),
            Err(CliError::InvalidMeasure(_))
        ));
    }

    #[test]
    fn test_no_measures() {
        let job = Job::from_toml_str("").unwrap();
        assert!(matches!(job.measures(&[]), Err(CliError::NoMeasures)));
        assert!(job.targets().unwrap().is_empty());
        assert_eq!(job.market_data().unwrap().scenario_count(), 1);
    }

    #[test]
    fn test_value_and_values_are_exclusive() {
        let job = Job::from_toml_str(
            r#"
[market_data]
scenarios = 2

[[market_data.fx_rates]]
pair = "USD/INR"
value = 84
values = [84, 85]
"#,
        )
        .unwrap();
        let err = job.market_data().unwrap_err();
        assert!(err.to_string().contains("exactly one of"));
    }

    #[test]
    fn test_wrong_scenario_count_rejected() {
        let job = Job::from_toml_str(
            r#"
[market_data]
scenarios = 3

[[market_data.quotes]]
id = "OG-Ticker~X"
values = [1, 2]
"#,
        )
        .unwrap();
        assert!(matches!(
            job.market_data(),
            Err(CliError::InvalidMarketData { .. })
        ));
    }

    #[test]
    fn test_invalid_trade_names_position() {
        let job = Job::from_toml_str(
            r#"
[[trades]]
type = "fx-ndf"
buy_sell = "buy"
settlement_currency = "EUR"
notional = 1000000
index = "USD/INR-FBIL"
index_pair = "USD/INR"
agreed_rate = 83
payment_date = "2026-12-16"
"#,
        )
        .unwrap();
        let err = job.targets().unwrap_err();
        assert!(err.to_string().starts_with("Invalid trade '#1'"));
    }
}
