//! FX rates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Currency, CurrencyPair};
use crate::error::{CoreError, CoreResult};

/// A positive FX rate: one unit of the base currency is worth `rate` units of the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FxRate {
    pair: CurrencyPair,
    rate: Decimal,
}

impl FxRate {
    /// Creates a rate on `pair`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFxRate` unless the rate is strictly positive.
    pub fn of(pair: CurrencyPair, rate: Decimal) -> CoreResult<Self> {
        if rate <= Decimal::ZERO {
            return Err(CoreError::InvalidFxRate {
                value: rate,
                reason: "rate must be positive".into(),
            });
        }
        Ok(Self { pair, rate })
    }

    /// Returns the currency pair.
    pub fn pair(&self) -> CurrencyPair {
        self.pair
    }

    /// Returns the rate as quoted on [`pair`](Self::pair).
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Returns the same rate quoted on the inverse pair.
    pub fn inverse(&self) -> Self {
        Self {
            pair: self.pair.inverse(),
            rate: Decimal::ONE / self.rate,
        }
    }

    /// Returns the rate converting `base` into `counter`.
    ///
    /// Works for either orientation of the stored pair.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidCurrencyPair` if the currencies are not the two sides
    /// of this rate.
    pub fn fx_rate(&self, base: Currency, counter: Currency) -> CoreResult<Decimal> {
        if base == self.pair.base() && counter == self.pair.counter() {
            Ok(self.rate)
        } else if base == self.pair.counter() && counter == self.pair.base() {
            Ok(Decimal::ONE / self.rate)
        } else {
            Err(CoreError::invalid_pair(format!(
                "{base}/{counter} is not a side of {}",
                self.pair
            )))
        }
    }
}

impl fmt::Display for FxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pair, self.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usd_inr() -> CurrencyPair {
        CurrencyPair::of(Currency::USD, Currency::INR).unwrap()
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(FxRate::of(usd_inr(), dec!(0)).is_err());
        assert!(FxRate::of(usd_inr(), dec!(-83)).is_err());
    }

    #[test]
    fn test_fx_rate_both_directions() {
        let rate = FxRate::of(usd_inr(), dec!(80)).unwrap();
        assert_eq!(rate.fx_rate(Currency::USD, Currency::INR).unwrap(), dec!(80));
        assert_eq!(
            rate.fx_rate(Currency::INR, Currency::USD).unwrap(),
            dec!(0.0125)
        );
        assert!(rate.fx_rate(Currency::USD, Currency::EUR).is_err());
    }

    #[test]
    fn test_inverse() {
        let rate = FxRate::of(usd_inr(), dec!(80)).unwrap();
        let inverse = rate.inverse();
        assert_eq!(inverse.pair().base(), Currency::INR);
        assert_eq!(inverse.rate(), dec!(0.0125));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_opposite_directions_multiply_to_one(raw in 1i64..10_000_000_000) {
                let rate = FxRate::of(usd_inr(), Decimal::new(raw, 6)).unwrap();
                let there = rate.fx_rate(Currency::USD, Currency::INR).unwrap();
                let back = rate.fx_rate(Currency::INR, Currency::USD).unwrap();
                prop_assert!((there * back - Decimal::ONE).abs() < dec!(0.000000000001));
            }
        }
    }
}
