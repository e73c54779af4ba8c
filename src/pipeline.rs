//! File-to-report pipeline
//!
//! This module wires the I/O shell around the analysis core. It orchestrates
//! processing by delegating:
//! - Dataset loading to `io::json_reader`
//! - Analysis to `core::engine` with the standard revenue and bonus strategies
//! - Report output to `io::report_format`
//!
//! Nothing is written to the output unless analysis succeeds, so a failed
//! run never leaves a partial report behind.

use crate::cli::OutputFormat;
use crate::config::ReportConfig;
use crate::core::{analyze_sales_data, AnalysisOptions};
use crate::io::{load_sales_data, write_summaries_csv, write_summaries_json};
use crate::types::AnalysisError;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Loads a dataset, analyses it and writes the report
///
/// # Examples
///
/// ```no_run
/// use sales_report_engine::cli::OutputFormat;
/// use sales_report_engine::config::ReportConfig;
/// use sales_report_engine::pipeline::ReportPipeline;
/// use std::path::Path;
///
/// let pipeline = ReportPipeline::new(ReportConfig::default(), OutputFormat::Csv);
/// let mut output = std::io::stdout();
///
/// pipeline
///     .process(Path::new("sales.json"), &mut output)
///     .expect("Report generation failed");
/// ```
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    config: ReportConfig,
    format: OutputFormat,
}

impl ReportPipeline {
    pub fn new(config: ReportConfig, format: OutputFormat) -> Self {
        ReportPipeline { config, format }
    }

    /// Produce a report for the dataset at `input_path`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened or parsed
    /// - A collection in the dataset is missing or empty
    /// - The report cannot be written
    pub fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), AnalysisError> {
        let data = load_sales_data(input_path)?;

        let options = AnalysisOptions::standard().with_config(self.config.clone());
        let summaries = analyze_sales_data(&data, &options)?;

        info!(
            sellers = summaries.len(),
            format = ?self.format,
            "Writing sales report"
        );

        match self.format {
            OutputFormat::Csv => write_summaries_csv(&summaries, output),
            OutputFormat::Json => write_summaries_json(&summaries, output),
        }
    }
}
