//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The job file could not be read.
    #[error("Cannot read job file {path}: {source}")]
    ReadJob {
        /// Path of the job file.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The job file is not valid TOML or does not match the job layout.
    #[error("Invalid job file: {0}")]
    InvalidJob(String),

    /// A trade in the job could not be built.
    #[error("Invalid trade '{trade}': {reason}")]
    InvalidTrade {
        /// Trade id or position in the job.
        trade: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A market data entry could not be built.
    #[error("Invalid market data entry '{key}': {reason}")]
    InvalidMarketData {
        /// Key of the entry.
        key: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An unparseable measure name.
    #[error("Invalid measure '{0}'")]
    InvalidMeasure(String),

    /// No measures were requested.
    #[error("No measures requested. Set `measures` in the job or pass --measures.")]
    NoMeasures,
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
