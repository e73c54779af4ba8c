//! Error types for the Sales Report Engine
//!
//! This module defines all error types that can occur while loading a sales
//! dataset, analysing it, or writing the resulting report.
//!
//! # Error Categories
//!
//! - **Input Shape Errors**: A required collection is missing or empty
//! - **Configuration Errors**: A revenue or bonus calculator was not supplied
//! - **Arithmetic Errors**: A sales figure does not fit in a `Decimal`
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Parsing Errors**: Malformed JSON, wrong field types
//! - **Output Errors**: The report could not be serialized or written
//!
//! Purchase records that reference unknown sellers and line items that
//! reference unknown products are not errors. They are skipped during
//! aggregation.

use thiserror::Error;

/// Main error type for the sales report engine
///
/// Every variant is fatal: analysis either produces a complete report or
/// returns one of these. Only `ArithmeticOverflow` can occur after
/// aggregation has started, and it discards everything aggregated so far.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A required input collection is missing or empty
    #[error("Input collection '{collection}' is missing or empty")]
    EmptyCollection {
        /// Name of the collection (`sellers`, `products`, `purchase_records`)
        collection: String,
    },

    /// A required calculator was not supplied in the analysis options
    #[error("Analysis option '{capability}' is required")]
    MissingCalculator {
        /// Name of the missing capability
        capability: String,
    },

    /// A revenue, cost or running total exceeded the `Decimal` range
    #[error("Arithmetic overflow in {operation} for seller {seller_id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Seller whose figures were being updated
        seller_id: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The input dataset could not be parsed
    #[error("JSON parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Description of the parsing error
        message: String,
    },

    /// The report could not be written
    #[error("Output error: {message}")]
    OutputError {
        /// Description of the output failure
        message: String,
    },
}

impl From<std::io::Error> for AnalysisError {
    fn from(error: std::io::Error) -> Self {
        AnalysisError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            return AnalysisError::IoError {
                message: error.to_string(),
            };
        }

        // serde_json reports line 0 when no position is known
        let line = Some(error.line()).filter(|&l| l > 0);

        AnalysisError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AnalysisError {
    fn from(error: csv::Error) -> Self {
        AnalysisError::OutputError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AnalysisError {
    /// Create an EmptyCollection error
    pub fn empty_collection(collection: &str) -> Self {
        AnalysisError::EmptyCollection {
            collection: collection.to_string(),
        }
    }

    /// Create a MissingCalculator error
    pub fn missing_calculator(capability: &str) -> Self {
        AnalysisError::MissingCalculator {
            capability: capability.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, seller_id: &str) -> Self {
        AnalysisError::ArithmeticOverflow {
            operation: operation.to_string(),
            seller_id: seller_id.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        AnalysisError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an OutputError
    pub fn output(message: impl Into<String>) -> Self {
        AnalysisError::OutputError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty_collection(
        AnalysisError::EmptyCollection { collection: "sellers".to_string() },
        "Input collection 'sellers' is missing or empty"
    )]
    #[case::missing_calculator(
        AnalysisError::MissingCalculator { capability: "calculate_bonus".to_string() },
        "Analysis option 'calculate_bonus' is required"
    )]
    #[case::arithmetic_overflow(
        AnalysisError::ArithmeticOverflow {
            operation: "line_revenue".to_string(),
            seller_id: "seller_1".to_string(),
        },
        "Arithmetic overflow in line_revenue for seller seller_1"
    )]
    #[case::file_not_found(
        AnalysisError::FileNotFound { path: "data.json".to_string() },
        "File not found: data.json"
    )]
    #[case::io_error(
        AnalysisError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        AnalysisError::ParseError { line: Some(12), message: "expected value".to_string() },
        "JSON parse error at line 12: expected value"
    )]
    #[case::parse_error_without_line(
        AnalysisError::ParseError { line: None, message: "expected value".to_string() },
        "JSON parse error: expected value"
    )]
    #[case::output_error(
        AnalysisError::OutputError { message: "broken pipe".to_string() },
        "Output error: broken pipe"
    )]
    fn test_error_display(#[case] error: AnalysisError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::empty_collection(
        AnalysisError::empty_collection("products"),
        AnalysisError::EmptyCollection { collection: "products".to_string() }
    )]
    #[case::missing_calculator(
        AnalysisError::missing_calculator("calculate_revenue"),
        AnalysisError::MissingCalculator { capability: "calculate_revenue".to_string() }
    )]
    #[case::arithmetic_overflow(
        AnalysisError::arithmetic_overflow("revenue", "7"),
        AnalysisError::ArithmeticOverflow {
            operation: "revenue".to_string(),
            seller_id: "7".to_string(),
        }
    )]
    #[case::file_not_found(
        AnalysisError::file_not_found("missing.json"),
        AnalysisError::FileNotFound { path: "missing.json".to_string() }
    )]
    fn test_helper_functions(#[case] result: AnalysisError, #[case] expected: AnalysisError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: AnalysisError = io_error.into();
        assert!(matches!(error, AnalysisError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_json_error_conversion_keeps_line() {
        let json_error = serde_json::from_str::<serde_json::Value>("{\n\"a\": }").unwrap_err();
        let error: AnalysisError = json_error.into();
        assert!(matches!(error, AnalysisError::ParseError { line: Some(2), .. }));
    }
}
