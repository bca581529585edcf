//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{MeasuresArgs, RequirementsArgs, RunArgs};

/// Tessera - Measure-based scenario calculations for trades
#[derive(Parser)]
#[command(name = "tessera")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log dispatch details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a calculation job and print the results grid
    Run(RunArgs),

    /// Print the market data a job needs
    Requirements(RequirementsArgs),

    /// List target types, their functions and supported measures
    Measures(MeasuresArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
