//! Sales analysis engine
//!
//! This module provides the `SalesAnalyzer` that runs the complete pipeline
//! over one dataset, and [`analyze_sales_data`], the entry point that takes
//! its calculators from an [`AnalysisOptions`] value.
//!
//! The pipeline runs each stage exactly once:
//!
//! ```text
//! validate -> index (SellerLedger, ProductCatalog)
//!          -> aggregate (SalesAggregator + RevenueCalculator)
//!          -> rank (rank_sellers + BonusCalculator)
//!          -> project (project_summaries)
//! ```
//!
//! No state survives between calls; two runs over the same input return
//! identical reports.

use crate::config::ReportConfig;
use crate::core::aggregator::SalesAggregator;
use crate::core::catalog::ProductCatalog;
use crate::core::ledger::SellerLedger;
use crate::core::projection::project_summaries;
use crate::core::ranking::rank_sellers;
use crate::core::traits::{BonusCalculator, RevenueCalculator};
use crate::strategy::{ProfitRankBonus, SimpleRevenue};
use crate::types::{AnalysisError, SalesData, SellerSummary};
use tracing::debug;

/// Runs the aggregation and ranking pipeline with fixed calculators
///
/// Both calculators are guaranteed present by construction; use
/// [`analyze_sales_data`] when they come from optional configuration.
pub struct SalesAnalyzer<'a> {
    revenue: &'a dyn RevenueCalculator,
    bonus: &'a dyn BonusCalculator,
    config: ReportConfig,
}

impl<'a> SalesAnalyzer<'a> {
    /// Create an analyzer with the default report configuration
    pub fn new(revenue: &'a dyn RevenueCalculator, bonus: &'a dyn BonusCalculator) -> Self {
        SalesAnalyzer {
            revenue,
            bonus,
            config: ReportConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Analyse a dataset
    ///
    /// # Arguments
    ///
    /// * `data` - Sellers, products and purchase records
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<SellerSummary>)` - One row per input seller, highest profit first
    /// * `Err(AnalysisError)` - If any input collection is empty or a figure
    ///   overflows
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` before any aggregation if sellers, products
    /// or purchase records are empty, and `ArithmeticOverflow` if a sales
    /// figure leaves the `Decimal` range. Unknown seller ids and SKUs inside
    /// the purchase records are skipped, not reported.
    pub fn analyze(&self, data: &SalesData) -> Result<Vec<SellerSummary>, AnalysisError> {
        data.validate()?;

        debug!(
            sellers = data.sellers.len(),
            products = data.products.len(),
            purchase_records = data.purchase_records.len(),
            "Starting sales analysis"
        );

        let catalog = ProductCatalog::from_products(&data.products);
        let mut ledger = SellerLedger::from_sellers(&data.sellers);

        let aggregator = SalesAggregator::new(self.revenue, &catalog);
        let stats = aggregator.aggregate(&mut ledger, &data.purchase_records)?;

        debug!(
            records_applied = stats.records_applied,
            records_skipped = stats.records_skipped,
            items_applied = stats.items_applied,
            items_skipped = stats.items_skipped,
            "Aggregated purchase records"
        );

        let mut sellers = ledger.into_accumulators();
        rank_sellers(&mut sellers, self.bonus, self.config.top_products_limit);

        Ok(project_summaries(sellers))
    }
}

/// Calculators and settings for [`analyze_sales_data`]
///
/// Both calculators start out unset. Analysis refuses to run until both
/// have been supplied.
#[derive(Default)]
pub struct AnalysisOptions {
    calculate_revenue: Option<Box<dyn RevenueCalculator>>,
    calculate_bonus: Option<Box<dyn BonusCalculator>>,
    config: ReportConfig,
}

impl AnalysisOptions {
    /// Options with no calculators and the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Options using [`SimpleRevenue`] and [`ProfitRankBonus`]
    pub fn standard() -> Self {
        Self::new()
            .with_revenue(SimpleRevenue)
            .with_bonus(ProfitRankBonus)
    }

    pub fn with_revenue(mut self, calculator: impl RevenueCalculator + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(calculator));
        self
    }

    pub fn with_bonus(mut self, calculator: impl BonusCalculator + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(calculator));
        self
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }
}

/// Compute per-seller statistics for a dataset
///
/// Checks that both calculators are present and that every input
/// collection is non-empty, then runs a [`SalesAnalyzer`].
///
/// # Errors
///
/// * `MissingCalculator` - `calculate_revenue` or `calculate_bonus` is unset
/// * `EmptyCollection` - sellers, products or purchase records are empty
/// * `ArithmeticOverflow` - a revenue, cost or total leaves the `Decimal` range
pub fn analyze_sales_data(
    data: &SalesData,
    options: &AnalysisOptions,
) -> Result<Vec<SellerSummary>, AnalysisError> {
    let revenue = options
        .calculate_revenue
        .as_deref()
        .ok_or_else(|| AnalysisError::missing_calculator("calculate_revenue"))?;
    let bonus = options
        .calculate_bonus
        .as_deref()
        .ok_or_else(|| AnalysisError::missing_calculator("calculate_bonus"))?;

    SalesAnalyzer::new(revenue, bonus)
        .with_config(options.config().clone())
        .analyze(data)
}
