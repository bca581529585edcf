//! Currency type with ISO 4217 codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// ISO 4217 currency codes.
///
/// Ordered by declaration so that sets of currencies iterate deterministically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[non_exhaustive]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Canadian Dollar
    CAD,
    /// Australian Dollar
    AUD,
    /// Hong Kong Dollar
    HKD,
    /// Singapore Dollar
    SGD,
    /// Chinese Yuan Renminbi
    CNY,
    /// Indian Rupee
    INR,
    /// South Korean Won
    KRW,
    /// New Taiwan Dollar
    TWD,
    /// Brazilian Real
    BRL,
}

impl Currency {
    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::HKD => "HKD",
            Currency::SGD => "SGD",
            Currency::CNY => "CNY",
            Currency::INR => "INR",
            Currency::KRW => "KRW",
            Currency::TWD => "TWD",
            Currency::BRL => "BRL",
        }
    }

    /// Returns the full currency name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::USD => "United States Dollar",
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound Sterling",
            Currency::JPY => "Japanese Yen",
            Currency::CHF => "Swiss Franc",
            Currency::CAD => "Canadian Dollar",
            Currency::AUD => "Australian Dollar",
            Currency::HKD => "Hong Kong Dollar",
            Currency::SGD => "Singapore Dollar",
            Currency::CNY => "Chinese Yuan Renminbi",
            Currency::INR => "Indian Rupee",
            Currency::KRW => "South Korean Won",
            Currency::TWD => "New Taiwan Dollar",
            Currency::BRL => "Brazilian Real",
        }
    }

    /// Returns true if the currency is restricted and usually traded through
    /// non-deliverable forwards.
    #[must_use]
    pub fn is_non_deliverable(&self) -> bool {
        matches!(
            self,
            Currency::CNY | Currency::INR | Currency::KRW | Currency::TWD | Currency::BRL
        )
    }

    /// Returns the standard number of decimal places for the currency.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY | Currency::KRW => 0,
            _ => 2,
        }
    }

    /// Parses a currency from a string code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CHF" => Some(Currency::CHF),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            "HKD" => Some(Currency::HKD),
            "SGD" => Some(Currency::SGD),
            "CNY" => Some(Currency::CNY),
            "INR" => Some(Currency::INR),
            "KRW" => Some(Currency::KRW),
            "TWD" => Some(Currency::TWD),
            "BRL" => Some(Currency::BRL),
            _ => None,
        }
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(s.trim()).ok_or_else(|| CoreError::UnknownCurrency {
            code: s.to_string(),
        })
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::EUR.code(), "EUR");
        assert_eq!(Currency::KRW.code(), "KRW");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INR"), Some(Currency::INR));
        assert_eq!(Currency::from_code("XXX"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("cny".parse::<Currency>().unwrap(), Currency::CNY);
        let err = "ZZZ".parse::<Currency>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown currency: ZZZ");
    }

    #[test]
    fn test_non_deliverable() {
        assert!(Currency::CNY.is_non_deliverable());
        assert!(Currency::INR.is_non_deliverable());
        assert!(!Currency::USD.is_non_deliverable());
        assert!(!Currency::EUR.is_non_deliverable());
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::JPY.decimal_places(), 0);
        assert_eq!(Currency::KRW.decimal_places(), 0);
    }

    #[test]
    fn test_ordering_is_stable() {
        use std::collections::BTreeSet;
        let set: BTreeSet<_> = [Currency::INR, Currency::USD, Currency::EUR]
            .into_iter()
            .collect();
        let ordered: Vec<_> = set.into_iter().collect();
        assert_eq!(ordered, vec![Currency::USD, Currency::EUR, Currency::INR]);
    }

    #[test]
    fn test_serde() {
        let currency = Currency::EUR;
        let json = serde_json::to_string(&currency).unwrap();
        assert_eq!(json, "\"EUR\"");
        let parsed: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(currency, parsed);
    }
}
