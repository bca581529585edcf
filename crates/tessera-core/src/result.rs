//! The domain failure channel.
//!
//! Every operation that can fail for an expected, domain-level reason returns a
//! [`CalcResult`]: either the value, or a [`Failure`] tagged with a [`FailureReason`]
//! drawn from a fixed enumeration plus a human-readable message.
//!
//! A `CalcResult` is a terminal value. Nothing in the framework retries it; callers
//! collect them into result grids so that one bad cell never hides the others.
//!
//! Faults that indicate a programming or configuration defect do not use this channel.
//! They panic.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a fallible calculation: the value or a typed [`Failure`].
pub type CalcResult<T> = Result<T, Failure>;

/// The fixed set of reasons a calculation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum FailureReason {
    /// The request was invalid, for example an unsupported measure.
    InvalidInput,
    /// A fault occurred while the calculation was running.
    CalculationFailed,
    /// Market data required by the calculation was not available.
    MissingData,
    /// No calculation function is configured for the target.
    MissingConfig,
    /// An amount could not be converted to the requested currency.
    CurrencyConversion,
    /// The measure does not apply to the target.
    NotApplicable,
    /// The operation is not supported.
    Unsupported,
    /// Any other error.
    Error,
}

impl FailureReason {
    /// Returns the stable code of the reason, e.g. `INVALID_INPUT`.
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::InvalidInput => "INVALID_INPUT",
            FailureReason::CalculationFailed => "CALCULATION_FAILED",
            FailureReason::MissingData => "MISSING_DATA",
            FailureReason::MissingConfig => "MISSING_CONFIG",
            FailureReason::CurrencyConversion => "CURRENCY_CONVERSION",
            FailureReason::NotApplicable => "NOT_APPLICABLE",
            FailureReason::Unsupported => "UNSUPPORTED",
            FailureReason::Error => "ERROR",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FailureReason::InvalidInput => "invalid input",
            FailureReason::CalculationFailed => "calculation failed",
            FailureReason::MissingData => "missing data",
            FailureReason::MissingConfig => "missing configuration",
            FailureReason::CurrencyConversion => "currency conversion",
            FailureReason::NotApplicable => "not applicable",
            FailureReason::Unsupported => "unsupported",
            FailureReason::Error => "error",
        };
        f.write_str(text)
    }
}

/// A typed, human-readable calculation failure.
///
/// # Example
///
/// ```rust
/// use tessera_core::result::{Failure, FailureReason};
///
/// let failure = Failure::invalid_input("Unsupported measure: Pv01");
/// assert_eq!(failure.reason(), FailureReason::InvalidInput);
/// assert_eq!(failure.to_string(), "invalid input: Unsupported measure: Pv01");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{reason}: {message}")]
pub struct Failure {
    reason: FailureReason,
    message: String,
}

impl Failure {
    /// Creates a failure with the given reason and message.
    pub fn new(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }

    /// Creates an [`FailureReason::InvalidInput`] failure.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(FailureReason::InvalidInput, message)
    }

    /// Creates a [`FailureReason::CalculationFailed`] failure.
    pub fn calculation_failed(message: impl Into<String>) -> Self {
        Self::new(FailureReason::CalculationFailed, message)
    }

    /// Creates a [`FailureReason::MissingData`] failure.
    pub fn missing_data(message: impl Into<String>) -> Self {
        Self::new(FailureReason::MissingData, message)
    }

    /// Creates a [`FailureReason::MissingConfig`] failure.
    pub fn missing_config(message: impl Into<String>) -> Self {
        Self::new(FailureReason::MissingConfig, message)
    }

    /// Creates a failure from any error, keeping its display text as the message.
    pub fn from_error<E: std::error::Error>(reason: FailureReason, error: &E) -> Self {
        Self::new(reason, error.to_string())
    }

    /// Returns the reason for the failure.
    pub fn reason(&self) -> FailureReason {
        self.reason
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_accessors() {
        let failure = Failure::missing_data("No quote for OG-Ticker~ABC");
        assert_eq!(failure.reason(), FailureReason::MissingData);
        assert_eq!(failure.message(), "No quote for OG-Ticker~ABC");
    }

    #[test]
    fn test_reason_display_and_code() {
        assert_eq!(FailureReason::InvalidInput.to_string(), "invalid input");
        assert_eq!(FailureReason::InvalidInput.code(), "INVALID_INPUT");
        assert_eq!(FailureReason::MissingConfig.code(), "MISSING_CONFIG");
    }

    #[test]
    fn test_from_error() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let failure = Failure::from_error(FailureReason::Error, &err);
        assert_eq!(failure.message(), "disk on fire");
    }

    #[test]
    fn test_calc_result_question_mark() {
        fn inner(ok: bool) -> CalcResult<u32> {
            if ok {
                Ok(1)
            } else {
                Err(Failure::calculation_failed("boom"))
            }
        }
        fn outer(ok: bool) -> CalcResult<u32> {
            Ok(inner(ok)? + 1)
        }
        assert_eq!(outer(true), Ok(2));
        assert_eq!(
            outer(false).unwrap_err().reason(),
            FailureReason::CalculationFailed
        );
    }

    #[test]
    fn test_serde() {
        let failure = Failure::invalid_input("bad");
        let json = serde_json::to_string(&failure).unwrap();
        assert!(json.contains("INVALID_INPUT"));
        let parsed: Failure = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, failure);
    }
}
