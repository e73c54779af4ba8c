//! Sales aggregation
//!
//! This module folds purchase records into the per-seller accumulators held
//! by a [`SellerLedger`]. It is the only place where accumulators are mutated
//! with sales figures.
//!
//! For every line item whose seller and product both resolve:
//!
//! 1. `revenue_item = round(revenue(item, product))`
//! 2. `cost_item = round(product.unit_cost() * quantity)`
//! 3. `revenue = round(revenue + revenue_item)`
//! 4. `profit = round(profit + revenue_item - cost_item)`
//! 5. `products_sold[sku] += quantity`
//!
//! Records for unknown sellers and items for unknown products are skipped
//! without error; they only show up in the returned [`AggregationStats`].
//! Every step uses checked arithmetic, and a result outside the `Decimal`
//! range aborts the fold with `ArithmeticOverflow`.

use crate::core::catalog::ProductCatalog;
use crate::core::ledger::SellerLedger;
use crate::core::rounding::round_money;
use crate::core::traits::RevenueCalculator;
use crate::types::{AnalysisError, LineItem, Product, PurchaseRecord, SellerAccumulator};
use tracing::{trace, warn};

/// Counters describing what a fold applied and what it skipped
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AggregationStats {
    /// Records whose seller was found
    pub records_applied: usize,
    /// Records skipped because their seller id is unknown
    pub records_skipped: usize,
    /// Line items folded into an accumulator
    pub items_applied: usize,
    /// Line items skipped because their SKU is unknown
    pub items_skipped: usize,
}

/// Folds purchase records into seller accumulators
pub struct SalesAggregator<'a> {
    revenue: &'a dyn RevenueCalculator,
    catalog: &'a ProductCatalog<'a>,
}

impl<'a> SalesAggregator<'a> {
    /// Create an aggregator using the given revenue policy and product index
    pub fn new(revenue: &'a dyn RevenueCalculator, catalog: &'a ProductCatalog<'a>) -> Self {
        SalesAggregator { revenue, catalog }
    }

    /// Fold all records into the ledger in a single pass
    ///
    /// # Arguments
    ///
    /// * `ledger` - Accumulators to update in place
    /// * `records` - Purchase records, in any order
    ///
    /// # Returns
    ///
    /// Counts of applied and skipped records and line items
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` as soon as a line revenue, line cost or
    /// running total leaves the `Decimal` range. The ledger is then partially
    /// updated and must be discarded.
    pub fn aggregate(
        &self,
        ledger: &mut SellerLedger,
        records: &[PurchaseRecord],
    ) -> Result<AggregationStats, AnalysisError> {
        let mut stats = AggregationStats::default();
        for record in records {
            self.apply_record(ledger, record, &mut stats)?;
        }
        Ok(stats)
    }

    /// Fold a single purchase record
    pub fn apply_record(
        &self,
        ledger: &mut SellerLedger,
        record: &PurchaseRecord,
        stats: &mut AggregationStats,
    ) -> Result<(), AnalysisError> {
        let Some(seller) = ledger.get_mut(&record.seller_id) else {
            trace!(seller_id = %record.seller_id, "Skipping purchase record for unknown seller");
            stats.records_skipped += 1;
            return Ok(());
        };
        stats.records_applied += 1;

        for item in &record.items {
            match self.catalog.get(&item.sku) {
                Some(product) => {
                    self.apply_item(seller, item, product)?;
                    stats.items_applied += 1;
                }
                None => {
                    trace!(
                        sku = %item.sku,
                        seller_id = %record.seller_id,
                        "Skipping line item for unknown product"
                    );
                    stats.items_skipped += 1;
                }
            }
        }
        Ok(())
    }

    fn apply_item(
        &self,
        seller: &mut SellerAccumulator,
        item: &LineItem,
        product: &Product,
    ) -> Result<(), AnalysisError> {
        let revenue_item = self
            .revenue
            .revenue(item, product)
            .map(round_money)
            .ok_or_else(|| overflow("line_revenue", seller))?;
        let cost_item = product
            .unit_cost()
            .checked_mul(item.quantity)
            .map(round_money)
            .ok_or_else(|| overflow("line_cost", seller))?;

        let revenue = seller
            .revenue
            .checked_add(revenue_item)
            .map(round_money)
            .ok_or_else(|| overflow("revenue", seller))?;
        let profit = seller
            .profit
            .checked_add(revenue_item)
            .and_then(|profit| profit.checked_sub(cost_item))
            .map(round_money)
            .ok_or_else(|| overflow("profit", seller))?;

        seller.record_quantity(&item.sku, item.quantity)?;
        seller.revenue = revenue;
        seller.profit = profit;
        Ok(())
    }
}

fn overflow(operation: &str, seller: &SellerAccumulator) -> AnalysisError {
    warn!(
        operation,
        seller_id = %seller.seller_id,
        "Sales figure out of range"
    );
    AnalysisError::arithmetic_overflow(operation, seller.seller_id.as_str())
}
