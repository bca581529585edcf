//! Scenario-indexed results.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use tessera_core::types::{Currency, CurrencyAmount};

/// One value per market data scenario, in scenario order.
///
/// A calculation producing a `ScenarioResult` always produces the full set: either
/// every scenario has a value or the measure fails as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScenarioResult<T> {
    values: Vec<T>,
}

impl<T> ScenarioResult<T> {
    /// Creates a result from per-scenario values.
    pub fn of(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no scenarios.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value for scenario `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Iterates in scenario order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Applies `f` to each scenario value.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ScenarioResult<U> {
        ScenarioResult {
            values: self.values.into_iter().map(f).collect(),
        }
    }

    /// Returns the values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T> FromIterator<T> for ScenarioResult<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ScenarioResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ScenarioResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// The value of one measure in one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScenarioValue {
    /// A monetary amount.
    Amount(CurrencyAmount),
    /// A dimensionless number such as an FX rate.
    Rate(Decimal),
}

impl ScenarioValue {
    /// Returns the amount, if this is one.
    pub fn as_amount(&self) -> Option<CurrencyAmount> {
        match self {
            ScenarioValue::Amount(a) => Some(*a),
            ScenarioValue::Rate(_) => None,
        }
    }

    /// Returns the numeric value regardless of kind.
    pub fn value(&self) -> Decimal {
        match self {
            ScenarioValue::Amount(a) => a.amount(),
            ScenarioValue::Rate(r) => *r,
        }
    }

    /// Returns the currency of an amount.
    pub fn currency(&self) -> Option<Currency> {
        self.as_amount().map(|a| a.currency())
    }
}

impl From<CurrencyAmount> for ScenarioValue {
    fn from(amount: CurrencyAmount) -> Self {
        ScenarioValue::Amount(amount)
    }
}

impl fmt::Display for ScenarioValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioValue::Amount(a) => write!(f, "{a}"),
            ScenarioValue::Rate(r) => write!(f, "{r}"),
        }
    }
}
