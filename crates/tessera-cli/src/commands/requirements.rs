//! Requirements command implementation.
//!
//! Shows the market data and currencies a job needs, and whether the job supplies them.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use tessera_traits::ScenarioMarketData;

use crate::cli::OutputFormat;
use crate::output::print_output;

use super::load_job;

/// Arguments for the requirements command.
#[derive(Args, Debug)]
pub struct RequirementsArgs {
    /// Path to the job file
    pub job: PathBuf,

    /// Measures to derive requirements for, overriding the job's list (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub measures: Vec<String>,
}

/// One required market data key or output currency.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct RequirementLine {
    #[tabled(rename = "Kind")]
    pub kind: String,
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Supplied")]
    pub supplied: String,
}

/// Executes the requirements command.
pub fn execute(args: RequirementsArgs, format: OutputFormat) -> Result<()> {
    let (job, engine) = load_job(&args.job, |_| {})?;
    let measures = job.measures(&args.measures)?;
    let targets = job.targets()?;
    let market_data = job.market_data()?;

    let requirements = engine.requirements(&targets, &measures);

    let mut lines: Vec<RequirementLine> = requirements
        .single_values()
        .iter()
        .map(|key| RequirementLine {
            kind: "market-data".to_string(),
            key: key.to_string(),
            supplied: yes_no(market_data.contains(key)),
        })
        .collect();
    lines.extend(
        requirements
            .output_currencies()
            .iter()
            .map(|currency| RequirementLine {
                kind: "currency".to_string(),
                key: currency.to_string(),
                supplied: "-".to_string(),
            }),
    );

    print_output(&lines, format)
}

fn yes_no(value: bool) -> String {
    let text = if value { "yes" } else { "no" };
    text.to_string()
}
