//! Market data requirements of a calculation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use tessera_core::types::Currency;

use crate::ids::MarketDataKey;

/// What a calculation needs before it can run.
///
/// Requirements are declared up front so that market data for many targets can be
/// acquired in one pass. They are immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRequirements {
    single_values: BTreeSet<MarketDataKey>,
    output_currencies: BTreeSet<Currency>,
}

impl FunctionRequirements {
    /// Returns requirements that need nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a builder.
    pub fn builder() -> FunctionRequirementsBuilder {
        FunctionRequirementsBuilder::default()
    }

    /// Returns the scalar market values needed.
    pub fn single_values(&self) -> &BTreeSet<MarketDataKey> {
        &self.single_values
    }

    /// Returns the currencies results may be expressed in.
    pub fn output_currencies(&self) -> &BTreeSet<Currency> {
        &self.output_currencies
    }

    /// Returns true if nothing is required.
    pub fn is_empty(&self) -> bool {
        self.single_values.is_empty() && self.output_currencies.is_empty()
    }

    /// Returns the union of both requirement sets.
    #[must_use]
    pub fn combined_with(&self, other: &FunctionRequirements) -> Self {
        Self {
            single_values: self
                .single_values
                .union(&other.single_values)
                .cloned()
                .collect(),
            output_currencies: self
                .output_currencies
                .union(&other.output_currencies)
                .copied()
                .collect(),
        }
    }
}

/// Builder for [`FunctionRequirements`].
#[derive(Debug, Clone, Default)]
pub struct FunctionRequirementsBuilder {
    single_values: BTreeSet<MarketDataKey>,
    output_currencies: BTreeSet<Currency>,
}

impl FunctionRequirementsBuilder {
    /// Adds a required market value.
    #[must_use]
    pub fn single_value(mut self, key: MarketDataKey) -> Self {
        self.single_values.insert(key);
        self
    }

    /// Adds several required market values.
    #[must_use]
    pub fn single_values(mut self, keys: impl IntoIterator<Item = MarketDataKey>) -> Self {
        self.single_values.extend(keys);
        self
    }

    /// Adds an output currency.
    #[must_use]
    pub fn output_currency(mut self, currency: Currency) -> Self {
        self.output_currencies.insert(currency);
        self
    }

    /// Builds the requirements.
    pub fn build(self) -> FunctionRequirements {
        FunctionRequirements {
            single_values: self.single_values,
            output_currencies: self.output_currencies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::types::{CurrencyPair, StandardId};

    fn quote() -> MarketDataKey {
        MarketDataKey::quote(StandardId::of("OG-Ticker", "ED-OPT").unwrap())
    }

    #[test]
    fn test_empty() {
        let reqs = FunctionRequirements::empty();
        assert!(reqs.is_empty());
        assert!(reqs.single_values().is_empty());
    }

    #[test]
    fn test_builder_deduplicates() {
        let reqs = FunctionRequirements::builder()
            .single_value(quote())
            .single_value(quote())
            .output_currency(Currency::USD)
            .output_currency(Currency::USD)
            .build();
        assert_eq!(reqs.single_values().len(), 1);
        assert_eq!(reqs.output_currencies().len(), 1);
        assert!(!reqs.is_empty());
    }

    #[test]
    fn test_combined_with() {
        let pair = CurrencyPair::of(Currency::USD, Currency::INR).unwrap();
        let a = FunctionRequirements::builder()
            .single_value(quote())
            .output_currency(Currency::USD)
            .build();
        let b = FunctionRequirements::builder()
            .single_value(MarketDataKey::fx_rate(pair))
            .output_currency(Currency::EUR)
            .build();

        let combined = a.combined_with(&b);
        assert_eq!(combined.single_values().len(), 2);
        assert!(combined.output_currencies().contains(&Currency::EUR));
        assert_eq!(combined.combined_with(&a), combined);
    }
}
