//! Discounted line revenue
//!
//! `SimpleRevenue` prices a line item as
//! `sale_price * quantity * (1 - discount / 100)`, ignoring the product.

use crate::core::RevenueCalculator;
use crate::types::{LineItem, Product};
use rust_decimal::Decimal;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Revenue after a percentage discount
///
/// A missing discount counts as 0%. Discounts outside 0-100% are clamped,
/// so revenue is never negative and never exceeds the undiscounted price.
/// Returns `None` when `sale_price * quantity` overflows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueCalculator for SimpleRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> Option<Decimal> {
        let discount = item
            .discount
            .unwrap_or(Decimal::ZERO)
            .clamp(Decimal::ZERO, HUNDRED);
        let factor = Decimal::ONE - discount / HUNDRED;

        item.sale_price
            .checked_mul(item.quantity)?
            .checked_mul(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::no_discount(dec!(100), dec!(2), None, dec!(200))]
    #[case::zero_discount(dec!(100), dec!(2), Some(dec!(0)), dec!(200))]
    #[case::ten_percent(dec!(50), dec!(3), Some(dec!(10)), dec!(135))]
    #[case::fractional_discount(dec!(99.99), dec!(1), Some(dec!(12.5)), dec!(87.49125))]
    #[case::full_discount(dec!(100), dec!(5), Some(dec!(100)), dec!(0))]
    #[case::clamped_above(dec!(100), dec!(1), Some(dec!(150)), dec!(0))]
    #[case::clamped_below(dec!(100), dec!(1), Some(dec!(-20)), dec!(100))]
    #[case::zero_quantity(dec!(100), dec!(0), Some(dec!(5)), dec!(0))]
    fn test_simple_revenue(
        #[case] sale_price: Decimal,
        #[case] quantity: Decimal,
        #[case] discount: Option<Decimal>,
        #[case] expected: Decimal,
    ) {
        let item = LineItem {
            discount,
            ..LineItem::new("SKU_001", quantity, sale_price)
        };
        let product = Product::new("SKU_001");

        assert_eq!(SimpleRevenue.revenue(&item, &product), Some(expected));
    }

    #[test]
    fn test_simple_revenue_ignores_product_cost() {
        let item = LineItem::new("SKU_001", dec!(1), dec!(10));
        let product = Product {
            purchase_price: Some(dec!(9)),
            ..Product::new("SKU_001")
        };
        assert_eq!(SimpleRevenue.revenue(&item, &product), Some(dec!(10)));
    }

    #[test]
    fn test_simple_revenue_overflow_is_none() {
        let item = LineItem::new("SKU_001", dec!(1000000000000000), dec!(100000000000000000));
        let product = Product::new("SKU_001");

        assert_eq!(SimpleRevenue.revenue(&item, &product), None);
    }
}
