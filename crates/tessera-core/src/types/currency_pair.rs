//! Ordered currency pairs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Currency;
use crate::error::{CoreError, CoreResult};

/// An ordered pair of two distinct currencies, written `BASE/COUNTER`.
///
/// # Example
///
/// ```rust
/// use tessera_core::types::{Currency, CurrencyPair};
///
/// let pair = CurrencyPair::of(Currency::USD, Currency::INR).unwrap();
/// assert_eq!(pair.to_string(), "USD/INR");
/// assert!(pair.contains(Currency::INR));
/// assert!(pair.is_inverse(&pair.inverse()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    base: Currency,
    counter: Currency,
}

impl CurrencyPair {
    /// Creates a pair.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidCurrencyPair` if both currencies are the same.
    pub fn of(base: Currency, counter: Currency) -> CoreResult<Self> {
        if base == counter {
            return Err(CoreError::invalid_pair(format!(
                "base and counter are both {base}"
            )));
        }
        Ok(Self { base, counter })
    }

    /// Returns the base currency.
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Returns the counter currency.
    pub fn counter(&self) -> Currency {
        self.counter
    }

    /// Returns the pair with base and counter swapped.
    pub fn inverse(&self) -> Self {
        Self {
            base: self.counter,
            counter: self.base,
        }
    }

    /// Returns true if either side of the pair is `currency`.
    pub fn contains(&self, currency: Currency) -> bool {
        self.base == currency || self.counter == currency
    }

    /// Returns true if `other` is this pair with the sides swapped.
    pub fn is_inverse(&self, other: &CurrencyPair) -> bool {
        self.base == other.counter && self.counter == other.base
    }

    /// Returns the currency on the other side of the pair from `currency`.
    pub fn other(&self, currency: Currency) -> Option<Currency> {
        if currency == self.base {
            Some(self.counter)
        } else if currency == self.counter {
            Some(self.base)
        } else {
            None
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.counter)
    }
}

impl FromStr for CurrencyPair {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, counter) = s
            .split_once('/')
            .ok_or_else(|| CoreError::invalid_pair(format!("expected BASE/COUNTER, got '{s}'")))?;
        CurrencyPair::of(base.parse()?, counter.parse()?)
    }
}
