//! Purchase records and their line items

use super::key::{SellerId, Sku};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One receipt: the seller who made the sale and the items sold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Seller who made the sale
    pub seller_id: SellerId,

    /// Line items in receipt order
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Receipt identifier, not used by the analysis
    #[serde(default)]
    pub receipt_id: Option<String>,

    /// Sale date, not used by the analysis
    #[serde(default)]
    pub date: Option<String>,
}

impl PurchaseRecord {
    pub fn new(seller_id: impl Into<SellerId>, items: Vec<LineItem>) -> Self {
        PurchaseRecord {
            seller_id: seller_id.into(),
            items,
            receipt_id: None,
            date: None,
        }
    }
}

/// A single SKU entry within a purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: Sku,

    /// Units sold
    #[serde(default)]
    pub quantity: Decimal,

    /// Price per unit before discount
    #[serde(default)]
    pub sale_price: Decimal,

    /// Discount in percent (0-100)
    #[serde(default)]
    pub discount: Option<Decimal>,
}

impl LineItem {
    pub fn new(sku: impl Into<Sku>, quantity: Decimal, sale_price: Decimal) -> Self {
        LineItem {
            sku: sku.into(),
            quantity,
            sale_price,
            discount: None,
        }
    }

    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = Some(discount);
        self
    }
}
