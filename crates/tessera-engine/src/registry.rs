//! Type-indexed registry of calculation functions.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use tessera_products::{CalculationTarget, TargetType, TargetVariant};

use crate::error::EngineError;
use crate::function::{CalculationFunction, TargetFunction, TypedFunction};
use crate::functions::{FxNdfFunction, GenericFutureOptionFunction, MissingConfigFunction};

static MISSING: MissingConfigFunction = MissingConfigFunction;

/// Immutable mapping from target type to calculation function.
///
/// Built once at startup and shared. Lookup is a single hash probe with no side effects.
pub struct FunctionRegistry {
    functions: HashMap<TargetType, Arc<dyn TargetFunction>>,
}

impl FunctionRegistry {
    /// Returns a builder.
    pub fn builder() -> FunctionRegistryBuilder {
        FunctionRegistryBuilder::new()
    }

    /// Returns a builder with every built-in function registered.
    pub fn standard_builder() -> FunctionRegistryBuilder {
        FunctionRegistryBuilder::new()
            .register(GenericFutureOptionFunction)
            .register(FxNdfFunction)
    }

    /// Returns a registry with every built-in function registered.
    pub fn standard() -> Self {
        Self::standard_builder().build_lenient()
    }

    /// Returns the function for `target`, or the missing-function fallback.
    pub fn resolve(&self, target: &CalculationTarget) -> &dyn TargetFunction {
        self.function(target.target_type())
    }

    /// Returns the function bound to `target_type`, or the missing-function fallback.
    pub fn function(&self, target_type: TargetType) -> &dyn TargetFunction {
        match self.functions.get(&target_type) {
            Some(function) => function.as_ref(),
            None => &MISSING,
        }
    }

    /// Returns true if targets of `target_type` resolve to the fallback.
    pub fn is_fallback(&self, target_type: TargetType) -> bool {
        self.function(target_type).is_fallback()
    }

    /// The target types bound to a real function, in declaration order.
    ///
    /// Types left to the missing-function fallback are not listed.
    pub fn target_types(&self) -> Vec<TargetType> {
        TargetType::ALL
            .into_iter()
            .filter(|t| {
                self.functions
                    .get(t)
                    .is_some_and(|function| !function.is_fallback())
            })
            .collect()
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for target_type in TargetType::ALL {
            map.entry(&target_type, &self.function(target_type).name());
        }
        map.finish()
    }
}

/// Builder for [`FunctionRegistry`].
#[derive(Default)]
pub struct FunctionRegistryBuilder {
    functions: HashMap<TargetType, Arc<dyn TargetFunction>>,
}

impl FunctionRegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `function` for its target type, replacing any earlier registration.
    #[must_use]
    pub fn register<F: CalculationFunction>(mut self, function: F) -> Self {
        let target_type = <F::Target as TargetVariant>::TARGET_TYPE;
        debug!(%target_type, function = function.name(), "registering calculation function");
        let previous = self
            .functions
            .insert(target_type, Arc::new(TypedFunction::new(function)));
        if let Some(previous) = previous {
            warn!(
                %target_type,
                replaced = previous.name(),
                "calculation function registered twice"
            );
        }
        self
    }

    fn missing(&self) -> Vec<TargetType> {
        TargetType::ALL
            .into_iter()
            .filter(|t| !self.functions.contains_key(t))
            .collect()
    }

    /// Builds the registry, requiring every target type to have a function.
    pub fn build(self) -> Result<FunctionRegistry, EngineError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(EngineError::IncompleteRegistry { missing });
        }
        Ok(FunctionRegistry {
            functions: self.functions,
        })
    }

    /// Builds the registry, binding unregistered target types to the fallback.
    pub fn build_lenient(mut self) -> FunctionRegistry {
        for target_type in self.missing() {
            warn!(
                %target_type,
                "no calculation function registered, using missing-function fallback"
            );
            self.functions
                .insert(target_type, Arc::new(MissingConfigFunction));
        }
        FunctionRegistry {
            functions: self.functions,
        }
    }
}
