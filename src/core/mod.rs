//! Core business logic module
//!
//! This module contains the sales analysis components:
//! - `traits` - Revenue and bonus calculator abstractions
//! - `rounding` - Two-decimal monetary rounding
//! - `ledger` - Per-seller accumulators indexed by seller id
//! - `catalog` - Products indexed by SKU
//! - `aggregator` - Folds purchase records into the ledger
//! - `ranking` - Profit ranking, bonuses and top products
//! - `projection` - Conversion into report rows
//! - `engine` - Pipeline orchestration and the `analyze_sales_data` entry point

pub mod aggregator;
pub mod catalog;
pub mod engine;
pub mod ledger;
pub mod projection;
pub mod ranking;
pub mod rounding;
pub mod traits;

pub use aggregator::{AggregationStats, SalesAggregator};
pub use catalog::ProductCatalog;
pub use engine::{analyze_sales_data, AnalysisOptions, SalesAnalyzer};
pub use ledger::SellerLedger;
pub use projection::{project_summaries, project_summary};
pub use ranking::{rank_sellers, top_products, DEFAULT_TOP_PRODUCTS};
pub use rounding::round_money;
pub use traits::{BonusCalculator, RevenueCalculator};
