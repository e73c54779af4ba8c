//! Revenue and bonus strategies
//!
//! This module holds the standard pricing and bonus policies. The engine
//! only knows them through the [`RevenueCalculator`](crate::core::RevenueCalculator)
//! and [`BonusCalculator`](crate::core::BonusCalculator) traits, so callers can
//! replace either one with their own type or a closure.
//!
//! - [`SimpleRevenue`] - sale price times quantity, less a percentage discount
//! - [`ProfitRankBonus`] - 15% / 10% / 5% / 0 of profit depending on rank

pub mod bonus;
pub mod revenue;

pub use bonus::ProfitRankBonus;
pub use revenue::SimpleRevenue;
