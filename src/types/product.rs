//! Product reference data
//!
//! Products are looked up by SKU while folding purchase line items. The unit
//! cost of a product can be recorded under one of three attribute names,
//! which are read in a fixed priority order by [`Product::unit_cost`].

use super::key::Sku;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique stock keeping unit
    pub sku: Sku,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    /// Cost attributes, highest priority first
    #[serde(default)]
    pub purchase_price: Option<Decimal>,

    #[serde(default)]
    pub cost_price: Option<Decimal>,

    #[serde(default)]
    pub prime_cost: Option<Decimal>,
}

impl Product {
    /// Create a product with no cost attributes set
    pub fn new(sku: impl Into<Sku>) -> Self {
        Product {
            sku: sku.into(),
            name: None,
            category: None,
            purchase_price: None,
            cost_price: None,
            prime_cost: None,
        }
    }

    /// Cost of one unit of this product
    ///
    /// Reads `purchase_price`, then `cost_price`, then `prime_cost`, and
    /// returns the first one present. A product with none of them costs zero.
    pub fn unit_cost(&self) -> Decimal {
        self.purchase_price
            .or(self.cost_price)
            .or(self.prime_cost)
            .unwrap_or(Decimal::ZERO)
    }
}
