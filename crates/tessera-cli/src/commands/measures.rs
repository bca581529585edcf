//! Measures command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use tessera_engine::FunctionRegistry;
use tessera_products::TargetType;

use crate::cli::OutputFormat;
use crate::output::{print_header, print_output};

/// Arguments for the measures command.
#[derive(Args, Debug)]
pub struct MeasuresArgs {
    /// Only show this target type (e.g. FxNonDeliverableForwardTrade)
    #[arg(short, long)]
    pub target: Option<String>,
}

/// A target type and what its function calculates.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct FunctionLine {
    #[tabled(rename = "Target Type")]
    pub target_type: String,
    #[tabled(rename = "Function")]
    pub function: String,
    #[tabled(rename = "Measures")]
    pub measures: String,
}

/// Executes the measures command.
pub fn execute(args: MeasuresArgs, format: OutputFormat) -> Result<()> {
    let registry = FunctionRegistry::standard();

    let lines: Vec<FunctionLine> = TargetType::ALL
        .iter()
        .filter(|t| {
            args.target
                .as_deref()
                .map_or(true, |name| name.eq_ignore_ascii_case(t.trade_type_name()))
        })
        .map(|&target_type| {
            let function = registry.function(target_type);
            FunctionLine {
                target_type: target_type.trade_type_name().to_string(),
                function: function.name().to_string(),
                measures: function
                    .supported_measures()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })
        .collect();

    if format == OutputFormat::Table {
        print_header("Calculation functions");
    }
    print_output(&lines, format)
}
