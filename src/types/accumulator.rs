//! Per-seller running totals built during aggregation
//!
//! A `SellerAccumulator` starts at zero for every input seller, is mutated in
//! place while purchase records are folded, receives its bonus and top product
//! list during ranking, and is finally consumed into a
//! [`SellerSummary`](super::summary::SellerSummary).

use super::error::AnalysisError;
use super::key::{SellerId, Sku};
use super::seller::Seller;
use super::summary::TopProduct;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Mutable per-seller statistics
#[derive(Debug, Clone, PartialEq)]
pub struct SellerAccumulator {
    pub seller_id: SellerId,

    /// "First Last"
    pub name: String,

    /// Running revenue, kept at two decimal places
    pub revenue: Decimal,

    /// Running profit (revenue minus cost), kept at two decimal places
    pub profit: Decimal,

    /// Accumulated quantity per SKU in first-seen order
    products_sold: Vec<(Sku, Decimal)>,

    /// Assigned during ranking
    pub bonus: Decimal,

    /// Assigned during ranking
    pub top_products: Vec<TopProduct>,

    /// Position of each SKU in `products_sold`
    sku_positions: HashMap<Sku, usize>,
}

impl SellerAccumulator {
    /// Create an empty accumulator for a seller
    pub fn new(seller: &Seller) -> Self {
        SellerAccumulator {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            products_sold: Vec::new(),
            bonus: Decimal::ZERO,
            top_products: Vec::new(),
            sku_positions: HashMap::new(),
        }
    }

    /// Add `quantity` units of `sku` to the per-SKU tally
    ///
    /// The first occurrence of a SKU fixes its position in `products_sold`.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the accumulated quantity would overflow;
    /// the tally is left unchanged.
    pub fn record_quantity(&mut self, sku: &Sku, quantity: Decimal) -> Result<(), AnalysisError> {
        match self.sku_positions.get(sku) {
            Some(&position) => {
                let total = &mut self.products_sold[position].1;
                *total = total.checked_add(quantity).ok_or_else(|| {
                    AnalysisError::arithmetic_overflow("quantity", self.seller_id.as_str())
                })?;
            }
            None => {
                self.sku_positions
                    .insert(sku.clone(), self.products_sold.len());
                self.products_sold.push((sku.clone(), quantity));
            }
        }
        Ok(())
    }

    /// Accumulated quantity per SKU in first-seen order
    pub fn products_sold(&self) -> &[(Sku, Decimal)] {
        &self.products_sold
    }

    /// Number of distinct SKUs this seller has sold
    pub fn sales_count(&self) -> usize {
        self.products_sold.len()
    }

    /// Accumulated quantity for one SKU
    pub fn quantity_of(&self, sku: &Sku) -> Option<Decimal> {
        self.sku_positions
            .get(sku)
            .map(|&position| self.products_sold[position].1)
    }
}
