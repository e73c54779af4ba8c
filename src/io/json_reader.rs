//! JSON dataset loading
//!
//! Reads a sales dataset of the form
//!
//! ```json
//! {
//!   "sellers": [{ "id": "seller_1", "first_name": "...", "last_name": "..." }],
//!   "products": [{ "sku": "SKU_001", "purchase_price": 12.5 }],
//!   "purchase_records": [{ "seller_id": "seller_1", "items": [...] }]
//! }
//! ```
//!
//! # Error Handling
//!
//! - A missing file is reported as `FileNotFound`
//! - Other open/read failures are reported as `IoError`
//! - Malformed JSON or a collection that is not an array is a `ParseError`
//!   carrying the line number
//! - A missing collection loads as empty; rejecting it is left to analysis

use crate::types::{AnalysisError, SalesData};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Load a sales dataset from a JSON file
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Returns
///
/// * `Ok(SalesData)` if the file was read and parsed
/// * `Err(AnalysisError)` if it could not be opened or parsed
pub fn load_sales_data(path: &Path) -> Result<SalesData, AnalysisError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnalysisError::file_not_found(&path.display().to_string()),
        _ => AnalysisError::from(e),
    })?;

    let data = parse_sales_data(BufReader::with_capacity(8 * 1024, file))?;

    debug!(
        path = %path.display(),
        sellers = data.sellers.len(),
        products = data.products.len(),
        purchase_records = data.purchase_records.len(),
        "Loaded sales dataset"
    );

    Ok(data)
}

/// Parse a sales dataset from any JSON source
pub fn parse_sales_data<R: Read>(reader: R) -> Result<SalesData, AnalysisError> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary JSON file for testing
    fn create_temp_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    const DATASET: &str = r#"{
        "sellers": [
            {"id": "seller_1", "first_name": "Alexey", "last_name": "Petrov",
             "start_date": "2024-01-15", "position": "Senior Seller"}
        ],
        "products": [
            {"sku": "SKU_001", "name": "Tea", "category": "Grocery", "purchase_price": 4.5}
        ],
        "purchase_records": [
            {"receipt_id": "receipt_1", "date": "2023-12-04", "seller_id": "seller_1",
             "items": [{"sku": "SKU_001", "quantity": 3, "sale_price": 9.99, "discount": 10}]}
        ]
    }"#;

    #[test]
    fn test_load_sales_data_reads_all_collections() {
        let file = create_temp_json(DATASET);

        let data = load_sales_data(file.path()).unwrap();

        assert_eq!(data.sellers.len(), 1);
        assert_eq!(data.sellers[0].display_name(), "Alexey Petrov");
        assert_eq!(data.products[0].unit_cost(), dec!(4.5));
        assert_eq!(data.purchase_records[0].items[0].quantity, dec!(3));
        assert_eq!(data.purchase_records[0].items[0].discount, Some(dec!(10)));
    }

    #[test]
    fn test_load_sales_data_missing_file() {
        let result = load_sales_data(Path::new("nonexistent.json"));
        assert_eq!(
            result,
            Err(AnalysisError::file_not_found("nonexistent.json"))
        );
    }

    #[test]
    fn test_parse_sales_data_malformed_json() {
        let result = parse_sales_data("{\n  \"sellers\": [\n    oops\n]}".as_bytes());
        assert!(matches!(
            result,
            Err(AnalysisError::ParseError { line: Some(3), .. })
        ));
    }

    #[test]
    fn test_parse_sales_data_non_array_collection() {
        let result = parse_sales_data(r#"{"sellers": "all of them"}"#.as_bytes());
        assert!(matches!(result, Err(AnalysisError::ParseError { .. })));
    }

    #[test]
    fn test_parse_sales_data_missing_collection_is_empty() {
        let data = parse_sales_data(r#"{"sellers": [], "products": []}"#.as_bytes()).unwrap();
        assert!(data.purchase_records.is_empty());
    }

    #[test]
    fn test_parse_sales_data_mixed_identifier_types() {
        let data = parse_sales_data(
            r#"{
                "sellers": [{"id": 1, "first_name": "A", "last_name": "B"}],
                "products": [{"sku": 100, "cost_price": 1}],
                "purchase_records": [
                    {"seller_id": "1", "items": [{"sku": "100", "quantity": 1, "sale_price": 2}]}
                ]
            }"#
            .as_bytes(),
        )
        .unwrap();

        assert_eq!(data.sellers[0].id, data.purchase_records[0].seller_id);
        assert_eq!(data.products[0].sku, data.purchase_records[0].items[0].sku);
    }
}
