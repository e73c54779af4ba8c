//! Seller ledger
//!
//! This module provides the `SellerLedger` struct which owns one
//! `SellerAccumulator` per input seller and resolves seller ids to those
//! accumulators during aggregation.
//!
//! The SellerLedger is responsible for:
//! - Creating exactly one zeroed accumulator per input seller
//! - Resolving purchase record seller ids in O(1)
//! - Handing the accumulators over, in input order, for ranking
//!
//! # Duplicate Handling
//!
//! If two sellers share an id, both still get an accumulator (and a report
//! row), but the id resolves to the last of them.

use crate::types::{Seller, SellerAccumulator, SellerId};
use std::collections::HashMap;

/// Owns the per-seller accumulators for one analysis run
#[derive(Debug, Clone)]
pub struct SellerLedger {
    /// Accumulators in input order
    accumulators: Vec<SellerAccumulator>,

    /// Seller id to position in `accumulators`
    index: HashMap<SellerId, usize>,
}

impl SellerLedger {
    /// Build a ledger with one empty accumulator per seller
    ///
    /// # Arguments
    ///
    /// * `sellers` - The input sellers, in the order they should be reported
    ///   when profits tie
    ///
    /// # Returns
    ///
    /// A ledger with zero revenue, profit and sales for every seller
    pub fn from_sellers(sellers: &[Seller]) -> Self {
        let accumulators: Vec<SellerAccumulator> =
            sellers.iter().map(SellerAccumulator::new).collect();

        let index = accumulators
            .iter()
            .enumerate()
            .map(|(position, acc)| (acc.seller_id.clone(), position))
            .collect();

        SellerLedger {
            accumulators,
            index,
        }
    }

    /// Get a mutable reference to the accumulator for a seller id
    ///
    /// # Returns
    ///
    /// * `Some(&mut SellerAccumulator)` - If the seller exists
    /// * `None` - If no input seller has this id
    pub fn get_mut(&mut self, seller_id: &SellerId) -> Option<&mut SellerAccumulator> {
        let position = *self.index.get(seller_id)?;
        self.accumulators.get_mut(position)
    }

    /// Get an immutable reference to the accumulator for a seller id
    pub fn get(&self, seller_id: &SellerId) -> Option<&SellerAccumulator> {
        let position = *self.index.get(seller_id)?;
        self.accumulators.get(position)
    }

    /// Number of accumulators (equals the number of input sellers)
    pub fn len(&self) -> usize {
        self.accumulators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accumulators.is_empty()
    }

    /// Consume the ledger, yielding accumulators in input order
    pub fn into_accumulators(self) -> Vec<SellerAccumulator> {
        self.accumulators
    }
}
