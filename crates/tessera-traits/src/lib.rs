//! # Tessera Traits
//!
//! Narrow interfaces between the calculation engine and its external collaborators.
//!
//! This crate contains the seams only. Implementations live in `tessera-engine` (an
//! in-memory scenario container) or in downstream crates.
//!
//! ## Module Structure
//!
//! - [`ids`]: [`MarketDataKey`], the identity of a single market value
//! - [`requirements`]: [`FunctionRequirements`], what a calculation needs before it runs
//! - [`market_data`]: [`ScenarioMarketData`] (read side) and [`MarketDataBuilder`]
//!   (acquisition side)
//!
//! ## Flow
//!
//! ```ignore
//! let reqs = function.requirements(&target, &measures);   // pure
//! let data = builder.build(&reqs)?;                        // external
//! let results = function.calculate(&target, &measures, data.as_ref());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ids;
pub mod market_data;
pub mod requirements;

// Re-export commonly used types
pub use error::TraitError;
pub use ids::MarketDataKey;
pub use market_data::{MarketDataBuilder, MarketDataError, ScenarioMarketData};
pub use requirements::{FunctionRequirements, FunctionRequirementsBuilder};
