//! Report output formats
//!
//! This module centralizes report serialization, providing:
//! - CSV output, one row per seller in rank order
//! - JSON output, the summaries as a pretty-printed array
//!
//! Both writers take any `Write`, so they work the same for stdout, files
//! and in-memory buffers.

use crate::types::{AnalysisError, SellerSummary, TopProduct};
use std::io::Write;

/// Column names of the CSV report
pub const CSV_HEADER: [&str; 8] = [
    "rank",
    "seller_id",
    "name",
    "revenue",
    "profit",
    "sales_count",
    "bonus",
    "top_products",
];

/// Encode a top product list as `sku:quantity` pairs joined by `;`
pub fn format_top_products(products: &[TopProduct]) -> String {
    products
        .iter()
        .map(|product| format!("{}:{}", product.sku, product.quantity))
        .collect::<Vec<_>>()
        .join(";")
}

/// Write seller summaries in CSV format
///
/// Rows are written in the order given, which is rank order for summaries
/// produced by the engine. Rank is 1-based. Money columns always show two
/// decimal places.
///
/// # Arguments
///
/// * `summaries` - Ranked seller summaries
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(AnalysisError::OutputError)` if a write error occurred
pub fn write_summaries_csv(
    summaries: &[SellerSummary],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(CSV_HEADER)?;

    for (position, summary) in summaries.iter().enumerate() {
        writer.write_record(&[
            (position + 1).to_string(),
            summary.seller_id.to_string(),
            summary.name.clone(),
            format!("{:.2}", summary.revenue),
            format!("{:.2}", summary.profit),
            summary.sales_count.to_string(),
            format!("{:.2}", summary.bonus),
            format_top_products(&summary.top_products),
        ])?;
    }

    writer
        .flush()
        .map_err(|e| AnalysisError::output(format!("Failed to flush output: {}", e)))?;

    Ok(())
}

/// Write seller summaries as a pretty-printed JSON array
///
/// Decimal fields are written as strings so no precision is lost.
pub fn write_summaries_json(
    summaries: &[SellerSummary],
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    serde_json::to_writer_pretty(&mut *output, summaries)
        .map_err(|e| AnalysisError::output(format!("Failed to write JSON report: {}", e)))?;
    writeln!(output)
        .and_then(|_| output.flush())
        .map_err(|e| AnalysisError::output(format!("Failed to flush output: {}", e)))?;

    Ok(())
}
