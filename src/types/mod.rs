//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `key`: Seller and product identifiers
//! - `seller`, `product`, `purchase`: Input records
//! - `dataset`: The three input collections together
//! - `accumulator`: Mutable per-seller totals used during analysis
//! - `summary`: Report rows returned to the caller
//! - `error`: Error types for the sales report engine

pub mod accumulator;
pub mod dataset;
pub mod error;
pub mod key;
pub mod product;
pub mod purchase;
pub mod seller;
pub mod summary;

pub use accumulator::SellerAccumulator;
pub use dataset::SalesData;
pub use error::AnalysisError;
pub use key::{RecordKey, SellerId, Sku};
pub use product::Product;
pub use purchase::{LineItem, PurchaseRecord};
pub use seller::Seller;
pub use summary::{SellerSummary, TopProduct};
