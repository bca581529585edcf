//! Measures: the named quantities a calculation can produce.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error creating a [`Measure`] from a name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeasureError {
    /// The name is empty.
    #[error("measure name must not be empty")]
    Empty,

    /// The name contains a character other than an ASCII letter or digit.
    #[error("invalid measure name '{0}': only ASCII letters and digits are allowed")]
    InvalidName(String),
}

/// A named quantity to calculate, such as present value.
///
/// Measures compare, hash and order by name. They are used as map keys so that each
/// calculation returns one result per requested measure.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Measure(Cow<'static, str>);

impl Measure {
    /// Present value, in the priced currency.
    pub const PRESENT_VALUE: Measure = Measure(Cow::Borrowed("PresentValue"));
    /// Forward FX rate observed for the trade's currency pair.
    pub const FORWARD_FX_RATE: Measure = Measure(Cow::Borrowed("ForwardFxRate"));
    /// Currency exposure.
    pub const CURRENCY_EXPOSURE: Measure = Measure(Cow::Borrowed("CurrencyExposure"));
    /// Implied volatility.
    pub const IMPLIED_VOLATILITY: Measure = Measure(Cow::Borrowed("ImpliedVolatility"));
    /// Present value sensitivity to a one basis point shift.
    pub const PV01: Measure = Measure(Cow::Borrowed("PV01"));

    /// Every built-in measure.
    pub fn standard() -> [Measure; 5] {
        [
            Self::PRESENT_VALUE,
            Self::FORWARD_FX_RATE,
            Self::CURRENCY_EXPOSURE,
            Self::IMPLIED_VOLATILITY,
            Self::PV01,
        ]
    }

    /// Creates a measure, validating the name.
    pub fn of(name: impl Into<String>) -> Result<Self, MeasureError> {
        let name = name.into();
        if name.is_empty() {
            return Err(MeasureError::Empty);
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MeasureError::InvalidName(name));
        }
        Ok(Self(Cow::Owned(name)))
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Measure {
    type Err = MeasureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s.trim())
    }
}

impl TryFrom<String> for Measure {
    type Error = MeasureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<Measure> for String {
    fn from(measure: Measure) -> Self {
        measure.0.into_owned()
    }
}
