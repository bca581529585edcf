//! Trade direction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a trade buys or sells the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuySell {
    /// Buy: positive sign.
    Buy,
    /// Sell: negative sign.
    Sell,
}

impl BuySell {
    /// Signs `amount` for this direction, ignoring any sign already present.
    ///
    /// ```rust
    /// use tessera_core::types::BuySell;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(BuySell::Buy.normalize(dec!(-5)), dec!(5));
    /// assert_eq!(BuySell::Sell.normalize(dec!(5)), dec!(-5));
    /// ```
    pub fn normalize(&self, amount: Decimal) -> Decimal {
        match self {
            BuySell::Buy => amount.abs(),
            BuySell::Sell => -amount.abs(),
        }
    }

    /// Returns true for [`BuySell::Buy`].
    pub fn is_buy(&self) -> bool {
        matches!(self, BuySell::Buy)
    }
}

impl fmt::Display for BuySell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuySell::Buy => write!(f, "Buy"),
            BuySell::Sell => write!(f, "Sell"),
        }
    }
}
