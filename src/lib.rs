//! Sales Report Engine Library
//! # Overview
//!
//! This library turns a sales dataset (sellers, products and purchase
//! records) into a ranked per-seller performance report: revenue, profit,
//! number of distinct products sold, a profit-rank bonus and a top-products
//! list.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Seller, Product, PurchaseRecord, SellerSummary, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`config`] - Report settings such as the top-products limit
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Analysis orchestration and the `analyze_sales_data` entry point
//!   - [`core::aggregator`] - Folding purchase records into per-seller totals
//!   - [`core::ranking`] - Profit ranking, bonuses and top products
//! - [`strategy`] - Standard revenue and bonus calculators
//! - [`io`] - JSON dataset loading and CSV/JSON report output
//! - [`pipeline`] - File-to-report orchestration used by the binary
//!
//! # Calculators
//!
//! Revenue and bonus rules are pluggable. Anything implementing
//! [`RevenueCalculator`] or [`BonusCalculator`] can be supplied through
//! [`AnalysisOptions`], including plain closures:
//!
//! ```
//! use sales_report_engine::{analyze_sales_data, AnalysisOptions, SalesData, SellerAccumulator};
//! use sales_report_engine::strategy::SimpleRevenue;
//! use rust_decimal::Decimal;
//!
//! let options = AnalysisOptions::new()
//!     .with_revenue(SimpleRevenue)
//!     .with_bonus(|_rank: usize, _total: usize, _seller: &SellerAccumulator| Decimal::ZERO);
//!
//! // An empty dataset is rejected before any aggregation happens
//! assert!(analyze_sales_data(&SalesData::default(), &options).is_err());
//! ```
//!
//! # Money
//!
//! All monetary values are [`rust_decimal::Decimal`]. Revenue is accumulated
//! per line item rounded to two places, profit and bonus are rounded once at
//! the end, half away from zero.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod strategy;
pub mod types;

pub use config::ReportConfig;
pub use core::{
    analyze_sales_data, AnalysisOptions, BonusCalculator, RevenueCalculator, SalesAnalyzer,
};
pub use io::{load_sales_data, write_summaries_csv, write_summaries_json};
pub use pipeline::ReportPipeline;
pub use types::{
    AnalysisError, LineItem, Product, PurchaseRecord, RecordKey, SalesData, Seller,
    SellerAccumulator, SellerId, SellerSummary, Sku, TopProduct,
};
