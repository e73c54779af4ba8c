//! Public report rows
//!
//! These are the only values that leave the engine. Monetary fields are
//! rounded to two decimal places by the time a `SellerSummary` exists.

use super::key::{SellerId, Sku};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A SKU and the total quantity one seller sold of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: Decimal,
}

/// Final per-seller statistics, one per input seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerSummary {
    pub seller_id: SellerId,

    /// First and last name joined by a single space
    pub name: String,

    /// Total revenue, two decimal places
    pub revenue: Decimal,

    /// Total profit, two decimal places
    pub profit: Decimal,

    /// Number of distinct SKUs sold
    pub sales_count: usize,

    /// Best selling SKUs by quantity, highest first
    pub top_products: Vec<TopProduct>,

    /// Rank-based bonus, two decimal places
    pub bonus: Decimal,
}
