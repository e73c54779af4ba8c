//! Report configuration
//!
//! Settings that shape the report without changing how sales are
//! aggregated. Built from CLI arguments or directly by library callers.

use crate::core::ranking::DEFAULT_TOP_PRODUCTS;
use tracing::warn;

/// Configuration for report generation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Maximum number of products in each seller's top list
    pub top_products_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_products_limit: DEFAULT_TOP_PRODUCTS,
        }
    }
}

impl ReportConfig {
    /// Create a new ReportConfig with custom values
    ///
    /// A zero limit would empty every top list, so it falls back to the
    /// default with a warning.
    pub fn new(top_products_limit: usize) -> Self {
        let default = Self::default();

        let top_products_limit = if top_products_limit == 0 {
            warn!(
                "Invalid top_products_limit ({}), using default ({})",
                top_products_limit, default.top_products_limit
            );
            default.top_products_limit
        } else {
            top_products_limit
        };

        Self { top_products_limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::custom(5, 5)]
    #[case::large(50, 50)]
    #[case::zero_falls_back(0, DEFAULT_TOP_PRODUCTS)]
    fn test_report_config_new(#[case] limit: usize, #[case] expected: usize) {
        assert_eq!(ReportConfig::new(limit).top_products_limit, expected);
    }

    #[test]
    fn test_default_keeps_ten_products() {
        assert_eq!(ReportConfig::default().top_products_limit, 10);
    }
}
