//! Built-in calculation functions, one per target type, plus the fallback.

pub mod future_option;
pub mod fx_ndf;
pub mod missing;

pub use future_option::GenericFutureOptionFunction;
pub use fx_ndf::FxNdfFunction;
pub use missing::MissingConfigFunction;
