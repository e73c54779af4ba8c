//! Profit-rank bonus tiers
//!
//! | rank                         | bonus          |
//! |------------------------------|----------------|
//! | first                        | 15% of profit  |
//! | last (when not also first)   | 0              |
//! | second or third              | 10% of profit  |
//! | everyone else                | 5% of profit   |
//!
//! Tiers are checked top to bottom and the first match wins. A lone seller
//! is both first and last and receives 15%. The last seller receives nothing
//! even when it is also second or third.
//!
//! Checking last place before the second-or-third tier is deliberate: it is
//! what gives the second of two sellers nothing. It also means the third of
//! exactly three sellers receives 0 rather than 10%, a knowing departure
//! from the runner-up-first ordering. From four sellers on both orderings
//! agree.

use crate::core::BonusCalculator;
use crate::types::SellerAccumulator;
use rust_decimal::Decimal;

/// 0.15
const TOP_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);
/// 0.10
const RUNNER_UP_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
/// 0.05
const STANDARD_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Bonus as a share of profit, tiered by rank
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfitRankBonus;

impl BonusCalculator for ProfitRankBonus {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerAccumulator) -> Decimal {
        let rate = if rank == 0 {
            TOP_RATE
        } else if rank + 1 == total {
            Decimal::ZERO
        } else if rank == 1 || rank == 2 {
            RUNNER_UP_RATE
        } else {
            STANDARD_RATE
        };

        seller.profit * rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seller;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn seller_with_profit(profit: Decimal) -> SellerAccumulator {
        let mut acc = SellerAccumulator::new(&Seller {
            id: "s".into(),
            first_name: "S".to_string(),
            last_name: "S".to_string(),
            start_date: None,
            position: None,
        });
        acc.profit = profit;
        acc
    }

    #[rstest]
    #[case::single_seller_gets_top_rate(0, 1, dec!(150))]
    #[case::top_of_two(0, 2, dec!(150))]
    #[case::bottom_of_two(1, 2, dec!(0))]
    #[case::second_of_three(1, 3, dec!(100))]
    #[case::third_of_three_is_last_not_runner_up(2, 3, dec!(0))]
    #[case::second_of_five(1, 5, dec!(100))]
    #[case::third_of_five(2, 5, dec!(100))]
    #[case::fourth_of_five(3, 5, dec!(50))]
    #[case::bottom_of_five(4, 5, dec!(0))]
    #[case::middle_of_ten(6, 10, dec!(50))]
    fn test_profit_rank_bonus(#[case] rank: usize, #[case] total: usize, #[case] expected: Decimal) {
        let seller = seller_with_profit(dec!(1000));
        assert_eq!(ProfitRankBonus.bonus(rank, total, &seller), expected);
    }

    #[test]
    fn test_negative_profit_gives_negative_bonus() {
        let seller = seller_with_profit(dec!(-200));
        assert_eq!(ProfitRankBonus.bonus(0, 3, &seller), dec!(-30));
    }
}
