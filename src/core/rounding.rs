//! Monetary rounding
//!
//! All money in the engine is kept at two decimal places, rounded half away
//! from zero. Amounts are rounded once per line item contribution, after
//! every running-total update, and once more when the report is projected.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for monetary amounts
pub const MONEY_SCALE: u32 = 2;

/// Round to two decimal places, half away from zero
///
/// The result always carries a scale of exactly two, so `200` becomes
/// `200.00`. Rounding an already rounded value is a no-op.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}
