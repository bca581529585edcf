//! # Tessera Core
//!
//! Core value types for the Tessera calculation framework.
//!
//! This crate provides the foundational building blocks used throughout Tessera:
//!
//! - **Types**: Domain-specific value objects like `Currency`, `CurrencyPair`, `FxRate`,
//!   `CurrencyAmount`, `StandardId` and `Date`
//! - **Result channel**: [`CalcResult`], the success-or-typed-failure outcome returned by
//!   every calculation that can fail for domain reasons
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Immutability**: Value objects are validated on construction and never mutated
//! - **Two error channels**: Expected domain failures are [`Failure`] values tagged with a
//!   [`FailureReason`]; construction errors for value objects are [`CoreError`]
//!
//! ## Example
//!
//! ```rust
//! use tessera_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let pair = CurrencyPair::of(Currency::USD, Currency::INR).unwrap();
//! let rate = FxRate::of(pair, dec!(83.25)).unwrap();
//! assert_eq!(rate.inverse().pair().base(), Currency::INR);
//!
//! let failure = Failure::invalid_input("Unsupported measure: Pv01");
//! assert_eq!(failure.reason(), FailureReason::InvalidInput);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod result;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::result::{CalcResult, Failure, FailureReason};
    pub use crate::types::{
        BuySell, Currency, CurrencyAmount, CurrencyPair, Date, FxRate, StandardId,
    };
}

pub use error::{CoreError, CoreResult};
pub use result::{CalcResult, Failure, FailureReason};
pub use types::{BuySell, Currency, CurrencyAmount, CurrencyPair, Date, FxRate, StandardId};
