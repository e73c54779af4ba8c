//! Report projection
//!
//! Converts ranked accumulators into the public [`SellerSummary`] rows. This
//! is the last stage of the pipeline and the only place bonuses are rounded.

use crate::core::rounding::round_money;
use crate::types::{SellerAccumulator, SellerSummary};

/// Convert one ranked accumulator into a report row
pub fn project_summary(seller: SellerAccumulator) -> SellerSummary {
    let sales_count = seller.sales_count();

    SellerSummary {
        seller_id: seller.seller_id,
        name: seller.name,
        revenue: round_money(seller.revenue),
        profit: round_money(seller.profit),
        sales_count,
        top_products: seller.top_products,
        bonus: round_money(seller.bonus),
    }
}

/// Convert ranked accumulators into report rows, keeping their order
pub fn project_summaries(sellers: Vec<SellerAccumulator>) -> Vec<SellerSummary> {
    sellers.into_iter().map(project_summary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Seller, TopProduct};
    use rust_decimal_macros::dec;

    fn accumulator() -> SellerAccumulator {
        SellerAccumulator::new(&Seller {
            id: "seller_9".into(),
            first_name: "Olga".to_string(),
            last_name: "Kuznetsova".to_string(),
            start_date: Some("2020-01-01".to_string()),
            position: Some("Senior Seller".to_string()),
        })
    }

    #[test]
    fn test_projection_rounds_money() {
        let mut acc = accumulator();
        acc.revenue = dec!(10.005);
        acc.profit = dec!(4.444);
        acc.bonus = dec!(0.6666);

        let summary = project_summary(acc);

        assert_eq!(summary.revenue, dec!(10.01));
        assert_eq!(summary.profit, dec!(4.44));
        assert_eq!(summary.bonus, dec!(0.67));
        assert_eq!(summary.bonus.to_string(), "0.67");
    }

    #[test]
    fn test_projection_counts_distinct_skus() {
        let mut acc = accumulator();
        acc.record_quantity(&"A".into(), dec!(10)).unwrap();
        acc.record_quantity(&"B".into(), dec!(1)).unwrap();
        acc.record_quantity(&"A".into(), dec!(10)).unwrap();

        let summary = project_summary(acc);
        assert_eq!(summary.sales_count, 2);
    }

    #[test]
    fn test_projection_passes_identity_and_top_products_through() {
        let mut acc = accumulator();
        acc.top_products = vec![TopProduct {
            sku: "A".into(),
            quantity: dec!(3),
        }];

        let summary = project_summary(acc);
        assert_eq!(summary.seller_id.as_str(), "seller_9");
        assert_eq!(summary.name, "Olga Kuznetsova");
        assert_eq!(summary.top_products.len(), 1);
        assert_eq!(summary.top_products[0].quantity, dec!(3));
    }

    #[test]
    fn test_project_summaries_keeps_order() {
        let mut first = accumulator();
        first.seller_id = "first".into();
        let mut second = accumulator();
        second.seller_id = "second".into();

        let summaries = project_summaries(vec![first, second]);
        assert_eq!(summaries[0].seller_id.as_str(), "first");
        assert_eq!(summaries[1].seller_id.as_str(), "second");
    }
}
