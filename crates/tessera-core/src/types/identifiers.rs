//! Scheme-qualified identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// An identifier made of a scheme and a value, written `scheme~value`.
///
/// Used to identify securities, exchange-traded contracts and trades. The
/// scheme names the issuing namespace (`OG-Ticker`, `ISIN`, ...).
///
/// # Example
///
/// ```rust
/// use tessera_core::types::StandardId;
///
/// let id = StandardId::of("OG-Ticker", "ED-OPT-MAR26").unwrap();
/// assert_eq!(id.to_string(), "OG-Ticker~ED-OPT-MAR26");
/// assert_eq!(id, "OG-Ticker~ED-OPT-MAR26".parse().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StandardId {
    scheme: String,
    value: String,
}

impl StandardId {
    /// Creates an identifier.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIdentifier` if either part is blank or the scheme
    /// contains the `~` separator.
    pub fn of(scheme: impl Into<String>, value: impl Into<String>) -> CoreResult<Self> {
        let scheme = scheme.into();
        let value = value.into();
        if scheme.trim().is_empty() {
            return Err(CoreError::invalid_identifier(&scheme, "scheme must not be blank"));
        }
        if scheme.contains('~') {
            return Err(CoreError::invalid_identifier(&scheme, "scheme must not contain '~'"));
        }
        if value.trim().is_empty() {
            return Err(CoreError::invalid_identifier(&value, "value must not be blank"));
        }
        Ok(Self { scheme, value })
    }

    /// Returns the scheme.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the value within the scheme.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for StandardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.scheme, self.value)
    }
}

impl FromStr for StandardId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (scheme, value) = s
            .split_once('~')
            .ok_or_else(|| CoreError::invalid_identifier(s, "expected scheme~value"))?;
        StandardId::of(scheme, value)
    }
}
