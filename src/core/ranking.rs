//! Ranking and bonus assignment
//!
//! Sellers are ordered by profit, highest first. The sort is stable, so
//! sellers with equal profit keep their input order and bonus assignment is
//! deterministic. Each seller then receives a bonus from the injected
//! [`BonusCalculator`] and a list of their best selling products.

use crate::core::traits::BonusCalculator;
use crate::types::{SellerAccumulator, TopProduct};

/// Number of products kept in each seller's top list
pub const DEFAULT_TOP_PRODUCTS: usize = 10;

/// Sort sellers by profit and assign bonuses and top products
///
/// # Arguments
///
/// * `sellers` - Aggregated sellers, in input order
/// * `bonus` - Policy mapping (rank, total, seller) to a bonus
/// * `top_limit` - Maximum number of products in each top list
pub fn rank_sellers(
    sellers: &mut [SellerAccumulator],
    bonus: &dyn BonusCalculator,
    top_limit: usize,
) {
    sellers.sort_by(|a, b| b.profit.cmp(&a.profit));

    let total = sellers.len();
    for (rank, seller) in sellers.iter_mut().enumerate() {
        seller.bonus = bonus.bonus(rank, total, seller);
        seller.top_products = top_products(seller, top_limit);
    }
}

/// Best selling SKUs of one seller by accumulated quantity
///
/// Ties keep the order in which the SKUs were first sold.
pub fn top_products(seller: &SellerAccumulator, limit: usize) -> Vec<TopProduct> {
    let mut products: Vec<TopProduct> = seller
        .products_sold()
        .iter()
        .map(|(sku, quantity)| TopProduct {
            sku: sku.clone(),
            quantity: *quantity,
        })
        .collect();

    products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    products.truncate(limit);
    products
}
