//! FX fixing indices.

use serde::{Deserialize, Serialize};
use std::fmt;

use tessera_core::types::CurrencyPair;

use crate::error::{ProductError, ProductResult};

/// An FX index: a named daily fixing of the rate on a currency pair, such as
/// `USD/INR-FBIL-INR01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FxIndex {
    name: String,
    pair: CurrencyPair,
}

impl FxIndex {
    /// Creates an index.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::InvalidField` if the name is blank.
    pub fn of(name: impl Into<String>, pair: CurrencyPair) -> ProductResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::invalid("index", "name must not be blank"));
        }
        Ok(Self { name, pair })
    }

    /// Returns the index name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the currency pair the index fixes.
    pub fn currency_pair(&self) -> CurrencyPair {
        self.pair
    }
}

impl fmt::Display for FxIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
