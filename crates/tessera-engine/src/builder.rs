//! Builder pattern for the calculation engine.

use std::sync::Arc;

use tracing::info;

use crate::config::EngineConfig;
use crate::engine::CalculationEngine;
use crate::error::EngineError;
use crate::registry::FunctionRegistry;

/// Builder for constructing a [`CalculationEngine`].
pub struct CalculationEngineBuilder {
    config: Option<EngineConfig>,
    registry: Option<Arc<FunctionRegistry>>,
}

impl CalculationEngineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            registry: None,
        }
    }

    /// Set the engine configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the function registry.
    pub fn with_registry(mut self, registry: Arc<FunctionRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the calculation engine.
    ///
    /// Without an explicit registry the built-in functions are registered, checked for
    /// completeness when the configuration is strict.
    pub fn build(self) -> Result<CalculationEngine, EngineError> {
        let config = self.config.unwrap_or_default();

        let registry = match self.registry {
            Some(registry) => registry,
            None => {
                let builder = FunctionRegistry::standard_builder();
                let registry = if config.strict_registry {
                    builder.build()?
                } else {
                    builder.build_lenient()
                };
                Arc::new(registry)
            }
        };

        info!(
            engine = %config.name,
            parallel = config.parallel,
            functions = registry.target_types().len(),
            "calculation engine built"
        );
        Ok(CalculationEngine::new(registry, config))
    }
}

impl Default for CalculationEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
