//! # Tessera Engine
//!
//! Measure-based calculation dispatch for Tessera.
//!
//! This crate provides:
//! - [`Measure`]: named quantities to calculate
//! - [`CalculationFunction`]: the per-target-type calculation contract
//! - [`MeasureCalculators`]: the immutable measure-to-calculator table behind each function
//! - [`FunctionRegistry`]: type-indexed function lookup with a missing-function fallback
//! - [`CalculationEngine`]: requirements aggregation, dispatch and the results grid
//! - [`ImmutableScenarioMarketData`]: in-memory scenario market data
//!
//! ## Architecture
//!
//! ```text
//! targets + measures ─> FunctionRegistry ─> TargetFunction::requirements ─┐
//!                                                                         │
//!           MarketDataBuilder <─ FunctionRequirements (union) <───────────┘
//!                  │
//!                  └─> ScenarioMarketData ─> TargetFunction::calculate ─> Results
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let engine = CalculationEngineBuilder::new()
//!     .with_config(EngineConfig::from_file("engine.toml")?)
//!     .build()?;
//!
//! let measures = BTreeSet::from([Measure::PRESENT_VALUE]);
//! let results = engine.run(&targets, &measures, &market_data)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod calculators;
pub mod config;
pub mod engine;
pub mod error;
pub mod function;
pub mod functions;
pub mod market_data;
pub mod measure;
pub mod registry;
pub mod scenario;

// Re-exports
pub use builder::CalculationEngineBuilder;
pub use calculators::{CalculationError, Calculator, MeasureCalculators};
pub use config::EngineConfig;
pub use engine::{CalculationEngine, ResultRow, Results};
pub use error::EngineError;
pub use function::{CalculationFunction, MeasureResults, TargetFunction, TypedFunction};
pub use functions::{FxNdfFunction, GenericFutureOptionFunction, MissingConfigFunction};
pub use market_data::{ImmutableScenarioMarketData, ImmutableScenarioMarketDataBuilder};
pub use measure::{Measure, MeasureError};
pub use registry::{FunctionRegistry, FunctionRegistryBuilder};
pub use scenario::{ScenarioResult, ScenarioValue};
