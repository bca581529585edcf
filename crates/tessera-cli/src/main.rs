//! Tessera CLI - run measure calculations over trades and scenarios.
//!
//! # Usage
//!
//! ```bash
//! # Run a job file
//! tessera run job.toml
//!
//! # Override the measures and print JSON
//! tessera run job.toml --measures PresentValue,ForwardFxRate --format json
//!
//! # Show the market data a job needs
//! tessera requirements job.toml
//!
//! # List functions and their measures
//! tessera measures
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod job;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let format = cli.format;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Run(args) => commands::run::execute(args, format, quiet)?,
        Commands::Requirements(args) => commands::requirements::execute(args, format)?,
        Commands::Measures(args) => commands::measures::execute(args, format)?,
    }

    Ok(())
}

/// Logs go to stderr so that stdout stays parseable for JSON and CSV output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "info,tessera=debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
