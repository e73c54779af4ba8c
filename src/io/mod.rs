//! I/O module
//!
//! Handles dataset loading and report output.
//!
//! # Components
//!
//! - `json_reader` - Loads a `SalesData` document from JSON
//! - `report_format` - Writes seller summaries as CSV or JSON

pub mod json_reader;
pub mod report_format;

pub use json_reader::{load_sales_data, parse_sales_data};
pub use report_format::{format_top_products, write_summaries_csv, write_summaries_json};
