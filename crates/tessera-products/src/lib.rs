//! # Tessera Products
//!
//! Immutable trade definitions that act as calculation targets.
//!
//! Each trade type is a plain struct built through a validating builder. The closed
//! [`CalculationTarget`] enum wraps every supported trade so that the engine can route a
//! target to its calculation function by [`TargetType`].
//!
//! ## Supported targets
//!
//! | Target type               | Trade                                |
//! |---------------------------|--------------------------------------|
//! | `GenericFutureOption`     | [`GenericFutureOptionTrade`]         |
//! | `FxNdf`                   | [`FxNonDeliverableForwardTrade`]     |
//!
//! ## Example
//!
//! ```rust
//! use tessera_core::prelude::*;
//! use tessera_products::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let product = GenericFutureOption::builder()
//!     .product_id(StandardId::of("OG-Future", "ED-OPT").unwrap())
//!     .currency(Currency::USD)
//!     .tick_size(dec!(0.005))
//!     .tick_value(dec!(12.5))
//!     .build()
//!     .unwrap();
//!
//! let trade = GenericFutureOptionTrade::builder()
//!     .security_id(StandardId::of("OG-Ticker", "ED-OPT-MAR26").unwrap())
//!     .product(product)
//!     .quantity(20)
//!     .build()
//!     .unwrap();
//!
//! let target = CalculationTarget::from(trade);
//! assert_eq!(target.target_type(), TargetType::GenericFutureOption);
//! assert_eq!(target.priced_currency(), Currency::USD);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod future_option;
pub mod fx_index;
pub mod fx_ndf;
pub mod target;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ProductError, ProductResult};
    pub use crate::future_option::{GenericFutureOption, GenericFutureOptionTrade, PutCall};
    pub use crate::fx_index::FxIndex;
    pub use crate::fx_ndf::{
        ExpandedFxNonDeliverableForward, FxNonDeliverableForward, FxNonDeliverableForwardTrade,
    };
    pub use crate::target::{CalculationTarget, TargetType, TargetVariant};
}

pub use error::{ProductError, ProductResult};
pub use target::{CalculationTarget, TargetType, TargetVariant};
