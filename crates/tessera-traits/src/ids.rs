//! Identifier types for market data.

use serde::{Deserialize, Serialize};
use std::fmt;

use tessera_core::types::{Currency, CurrencyPair, Date, StandardId};

/// Identity of a single scalar market value.
///
/// Keys are totally ordered so requirement sets iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarketDataKey {
    /// Market quote for a listed security.
    Quote(StandardId),
    /// FX rate for a currency pair, quoted as units of counter per unit of base.
    FxRate(CurrencyPair),
    /// Discount factor in a currency to a date.
    DiscountFactor {
        /// Currency of the discount curve
        currency: Currency,
        /// Date discounted to
        date: Date,
    },
}

impl MarketDataKey {
    /// Creates a quote key.
    pub fn quote(id: StandardId) -> Self {
        MarketDataKey::Quote(id)
    }

    /// Creates an FX rate key.
    pub fn fx_rate(pair: CurrencyPair) -> Self {
        MarketDataKey::FxRate(pair)
    }

    /// Creates a discount factor key.
    pub fn discount_factor(currency: Currency, date: Date) -> Self {
        MarketDataKey::DiscountFactor { currency, date }
    }
}

impl fmt::Display for MarketDataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketDataKey::Quote(id) => write!(f, "Quote({id})"),
            MarketDataKey::FxRate(pair) => write!(f, "FxRate({pair})"),
            MarketDataKey::DiscountFactor { currency, date } => {
                write!(f, "DiscountFactor({currency}, {date})")
            }
        }
    }
}
