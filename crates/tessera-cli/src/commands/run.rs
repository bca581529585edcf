//! Run command implementation.
//!
//! Calculates the job's measures for every trade and prints one line per scenario value.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use tessera_core::types::Currency;
use tessera_engine::Results;

use crate::cli::OutputFormat;
use crate::output::{format_value, print_json, print_output, print_success, print_warning};

use super::load_job;

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the job file
    pub job: PathBuf,

    /// Measures to calculate, overriding the job's list (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub measures: Vec<String>,

    /// Calculate trades in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Report every trade in this currency
    #[arg(long)]
    pub reporting_currency: Option<Currency>,
}

/// One scenario value, or the failure of one measure.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ResultLine {
    #[tabled(rename = "Trade")]
    pub trade: String,
    #[tabled(rename = "Type")]
    pub target_type: String,
    #[tabled(rename = "Measure")]
    pub measure: String,
    #[tabled(rename = "Scenario")]
    pub scenario: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Currency")]
    pub currency: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

/// Executes the run command.
pub fn execute(args: RunArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let (job, engine) = load_job(&args.job, |config| {
        config.parallel |= args.parallel;
        if args.reporting_currency.is_some() {
            config.reporting_currency = args.reporting_currency;
        }
    })?;

    let measures = job.measures(&args.measures)?;
    let targets = job.targets()?;
    let market_data = job.market_data()?;

    let results = engine.run(&targets, &measures, &market_data)?;

    match format {
        OutputFormat::Json => print_json(&results)?,
        OutputFormat::Table | OutputFormat::Csv => print_output(&result_lines(&results), format)?,
    }

    if !quiet && format == OutputFormat::Table {
        let summary = format!(
            "{} trades, {} succeeded, {} failed (run {})",
            results.len(),
            results.succeeded(),
            results.failed(),
            results.run_id()
        );
        if results.failed() == 0 {
            print_success(&summary);
        } else {
            print_warning(&summary);
        }
    }

    Ok(())
}

/// Flattens the results grid into display lines, in row then measure order.
pub fn result_lines(results: &Results) -> Vec<ResultLine> {
    let mut lines = Vec::new();
    for (index, row) in results.rows().iter().enumerate() {
        let trade = row
            .trade_id
            .as_ref()
            .map_or_else(|| format!("#{}", index + 1), ToString::to_string);
        let target_type = row.target_type.trade_type_name().to_string();

        for (measure, cell) in &row.cells {
            let line = |scenario: String, value: String, currency: String, status: &str| ResultLine {
                trade: trade.clone(),
                target_type: target_type.clone(),
                measure: measure.to_string(),
                scenario,
                value,
                currency,
                status: status.to_string(),
            };
            match cell {
                Ok(values) => {
                    for (scenario, value) in values.iter().enumerate() {
                        lines.push(line(
                            scenario.to_string(),
                            format_value(value.value()),
                            value.currency().map(|c| c.to_string()).unwrap_or_default(),
                            "OK",
                        ));
                    }
                }
                Err(failure) => lines.push(line(
                    "-".to_string(),
                    failure.message().to_string(),
                    String::new(),
                    failure.reason().code(),
                )),
            }
        }
    }
    lines
}
