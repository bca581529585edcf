//! Amounts of money.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Currency;
use crate::error::{CoreError, CoreResult};

/// A decimal amount in a single currency.
///
/// # Example
///
/// ```rust
/// use tessera_core::types::{Currency, CurrencyAmount};
/// use rust_decimal_macros::dec;
///
/// let pv = CurrencyAmount::new(Currency::USD, dec!(1250.50));
/// assert_eq!(pv.negated().amount(), dec!(-1250.50));
/// assert_eq!(pv.to_string(), "USD 1250.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyAmount {
    currency: Currency,
    amount: Decimal,
}

impl CurrencyAmount {
    /// Creates an amount.
    #[must_use]
    pub fn new(currency: Currency, amount: Decimal) -> Self {
        Self { currency, amount }
    }

    /// Creates a zero amount.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(currency, Decimal::ZERO)
    }

    /// Returns the currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns this amount multiplied by `factor`, or `None` on overflow.
    #[must_use]
    pub fn checked_multiplied_by(&self, factor: Decimal) -> Option<Self> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Self::new(self.currency, amount))
    }

    /// Returns this amount with the sign flipped.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::new(self.currency, -self.amount)
    }

    /// Adds another amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CurrencyMismatch` if the currencies differ.
    pub fn plus(&self, other: &CurrencyAmount) -> CoreResult<Self> {
        if other.currency != self.currency {
            return Err(CoreError::CurrencyMismatch {
                expected: self.currency,
                actual: other.currency,
            });
        }
        Ok(Self::new(self.currency, self.amount + other.amount))
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}
