//! Sales Report Engine CLI
//!
//! Command-line interface for building seller performance reports from JSON
//! sales data.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- sales.json > report.csv
//! cargo run -- --format json sales.json > report.json
//! cargo run -- --top-products 3 sales.json
//! RUST_LOG=debug cargo run -- sales.json
//! ```
//!
//! The program reads the dataset from the input file, analyses it and writes
//! the ranked report to stdout. Diagnostics go to stderr; their level is
//! chosen with `-v` flags or overridden by `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed JSON, empty collection, etc.)

use sales_report_engine::cli;
use sales_report_engine::pipeline::ReportPipeline;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let pipeline = ReportPipeline::new(args.to_report_config(), args.format);

    // Output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = pipeline.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
