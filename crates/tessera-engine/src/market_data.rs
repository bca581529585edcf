//! In-memory scenario market data.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use tessera_traits::{
    FunctionRequirements, MarketDataBuilder, MarketDataError, MarketDataKey, ScenarioMarketData,
    TraitError,
};

/// Scenario market data held in memory.
///
/// Acts both as the data calculations read and, through [`MarketDataBuilder`], as a
/// source that hands out only the keys a set of requirements names.
#[derive(Debug, Clone, PartialEq)]
pub struct ImmutableScenarioMarketData {
    scenario_count: usize,
    values: BTreeMap<MarketDataKey, Vec<Decimal>>,
}

impl ImmutableScenarioMarketData {
    /// Returns a builder for `scenario_count` scenarios.
    pub fn builder(scenario_count: usize) -> ImmutableScenarioMarketDataBuilder {
        ImmutableScenarioMarketDataBuilder {
            scenario_count,
            values: BTreeMap::new(),
        }
    }

    /// The keys held.
    pub fn keys(&self) -> impl Iterator<Item = &MarketDataKey> {
        self.values.keys()
    }

    /// Returns a copy holding only `keys`.
    ///
    /// # Errors
    ///
    /// Returns `TraitError::NotFound` listing every key that is not held.
    pub fn filtered<'a>(
        &self,
        keys: impl IntoIterator<Item = &'a MarketDataKey>,
    ) -> Result<Self, TraitError> {
        let mut values = BTreeMap::new();
        let mut missing = Vec::new();
        for key in keys {
            match self.values.get(key) {
                Some(v) => {
                    values.insert(key.clone(), v.clone());
                }
                None => missing.push(key.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(TraitError::NotFound(missing.join(", ")));
        }
        Ok(Self {
            scenario_count: self.scenario_count,
            values,
        })
    }
}

impl ScenarioMarketData for ImmutableScenarioMarketData {
    fn scenario_count(&self) -> usize {
        self.scenario_count
    }

    fn value(&self, key: &MarketDataKey, scenario: usize) -> Result<Decimal, MarketDataError> {
        let values = self
            .values
            .get(key)
            .ok_or_else(|| MarketDataError::NotFound(key.clone()))?;
        values
            .get(scenario)
            .copied()
            .ok_or(MarketDataError::ScenarioOutOfRange {
                index: scenario,
                count: self.scenario_count,
            })
    }

    fn values(&self, key: &MarketDataKey) -> Result<Vec<Decimal>, MarketDataError> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| MarketDataError::NotFound(key.clone()))
    }

    fn contains(&self, key: &MarketDataKey) -> bool {
        self.values.contains_key(key)
    }
}

impl MarketDataBuilder for ImmutableScenarioMarketData {
    fn build(
        &self,
        requirements: &FunctionRequirements,
    ) -> Result<Box<dyn ScenarioMarketData>, TraitError> {
        let data = self.filtered(requirements.single_values())?;
        debug!(
            keys = data.values.len(),
            scenarios = data.scenario_count,
            "built scenario market data"
        );
        Ok(Box::new(data))
    }
}

/// Builder for [`ImmutableScenarioMarketData`].
#[derive(Debug, Clone)]
pub struct ImmutableScenarioMarketDataBuilder {
    scenario_count: usize,
    values: BTreeMap<MarketDataKey, Vec<Decimal>>,
}

impl ImmutableScenarioMarketDataBuilder {
    /// Adds a value that is the same in every scenario.
    #[must_use]
    pub fn add_value(mut self, key: MarketDataKey, value: Decimal) -> Self {
        self.values
            .insert(key, vec![value; self.scenario_count]);
        self
    }

    /// Adds one value per scenario.
    ///
    /// # Errors
    ///
    /// Returns `TraitError::ScenarioMismatch` if the number of values is not the
    /// scenario count.
    pub fn add_scenario_values(
        mut self,
        key: MarketDataKey,
        values: Vec<Decimal>,
    ) -> Result<Self, TraitError> {
        if values.len() != self.scenario_count {
            return Err(TraitError::ScenarioMismatch {
                expected: self.scenario_count,
                actual: values.len(),
            });
        }
        self.values.insert(key, values);
        Ok(self)
    }

    /// Builds the market data.
    pub fn build(self) -> ImmutableScenarioMarketData {
        ImmutableScenarioMarketData {
            scenario_count: self.scenario_count,
            values: self.values,
        }
    }
}
