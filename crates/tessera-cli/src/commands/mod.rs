//! CLI command implementations.

pub mod measures;
pub mod requirements;
pub mod run;

// Re-export submodules for convenience
pub use measures::MeasuresArgs;
pub use requirements::RequirementsArgs;
pub use run::RunArgs;

use std::path::Path;

use tessera_engine::{CalculationEngine, CalculationEngineBuilder, EngineConfig};
use tracing::debug;

use crate::job::Job;

/// Loads a job and builds the engine its `[engine]` table describes.
pub fn load_job(
    path: &Path,
    adjust: impl FnOnce(&mut EngineConfig),
) -> anyhow::Result<(Job, CalculationEngine)> {
    let job = Job::load(path)?;
    let mut config = job.engine.clone();
    adjust(&mut config);
    debug!(
        path = %path.display(),
        trades = job.trades.len(),
        parallel = config.parallel,
        "Loaded job"
    );
    let engine = CalculationEngineBuilder::new().with_config(config).build()?;
    Ok((job, engine))
}
