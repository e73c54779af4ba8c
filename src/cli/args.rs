use crate::config::ReportConfig;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Compute seller performance statistics from sales data
#[derive(Parser, Debug)]
#[command(name = "sales-report")]
#[command(about = "Compute seller revenue, profit, bonuses and top products", long_about = None)]
pub struct CliArgs {
    /// Input JSON file with sellers, products and purchase records
    #[arg(value_name = "INPUT", help = "Path to the input JSON file")]
    pub input_file: PathBuf,

    /// Output format for the report
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "csv",
        help = "Report format: 'csv' or 'json'"
    )]
    pub format: OutputFormat,

    /// Number of products in each seller's top list
    #[arg(
        long = "top-products",
        value_name = "COUNT",
        help = "Number of products in each seller's top list (default: 10)"
    )]
    pub top_products: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Available report formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl CliArgs {
    /// Create a ReportConfig from CLI arguments
    ///
    /// Falls back to defaults for anything not given on the command line.
    /// Invalid values are replaced by defaults with a warning.
    pub fn to_report_config(&self) -> ReportConfig {
        match self.top_products {
            Some(limit) => ReportConfig::new(limit),
            None => ReportConfig::default(),
        }
    }

    /// Default log filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
