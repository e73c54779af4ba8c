//! Core traits for pluggable pricing and bonus policy
//!
//! The aggregation and ranking stages never hardcode how revenue or bonuses
//! are computed. Callers supply implementations of these traits, either as
//! dedicated types (see [`crate::strategy`]) or as plain closures.

use crate::types::{LineItem, Product, SellerAccumulator};
use rust_decimal::Decimal;

/// Computes the revenue of one purchase line item
///
/// Implementations must be pure: the same item and product always yield the
/// same amount and nothing else is observed or changed.
pub trait RevenueCalculator {
    /// Revenue contributed by `item`, sold as `product`
    ///
    /// `None` means the amount does not fit in a `Decimal`.
    fn revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal>;
}

/// Computes a seller's bonus from their position in the profit ranking
pub trait BonusCalculator {
    /// Bonus for the seller at zero-based `rank` out of `total` sellers
    fn bonus(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> Decimal;
}

impl<F> RevenueCalculator for F
where
    F: Fn(&LineItem, &Product) -> Decimal,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> Option<Decimal> {
        Some(self(item, product))
    }
}

impl<F> BonusCalculator for F
where
    F: Fn(usize, usize, &SellerAccumulator) -> Decimal,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> Decimal {
        self(rank, total, seller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seller;
    use rust_decimal_macros::dec;

    #[test]
    fn test_closure_as_revenue_calculator() {
        let flat = |item: &LineItem, _product: &Product| item.sale_price;
        let calculator: &dyn RevenueCalculator = &flat;

        let item = LineItem::new("SKU_001", dec!(3), dec!(9.5));
        let product = Product::new("SKU_001");

        assert_eq!(calculator.revenue(&item, &product), Some(dec!(9.5)));
    }

    #[test]
    fn test_closure_as_bonus_calculator() {
        let by_rank = |rank: usize, total: usize, _seller: &SellerAccumulator| {
            Decimal::from(total - rank)
        };
        let calculator: &dyn BonusCalculator = &by_rank;

        let seller = SellerAccumulator::new(&Seller {
            id: "s1".into(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            start_date: None,
            position: None,
        });

        assert_eq!(calculator.bonus(1, 4, &seller), dec!(3));
    }
}
