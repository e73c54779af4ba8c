//! The three input collections analysed together

use super::error::AnalysisError;
use super::product::Product;
use super::purchase::PurchaseRecord;
use super::seller::Seller;
use serde::{Deserialize, Serialize};

/// Sellers, products and purchase records as supplied by the caller
///
/// A collection absent from the source document deserializes as empty and
/// is then rejected by [`SalesData::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesData {
    #[serde(default)]
    pub sellers: Vec<Seller>,

    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    pub fn new(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        SalesData {
            sellers,
            products,
            purchase_records,
        }
    }

    /// Check that every collection is present and non-empty
    ///
    /// Collections are checked in the order sellers, products,
    /// purchase_records; the first failure is reported.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.sellers.is_empty() {
            return Err(AnalysisError::empty_collection("sellers"));
        }
        if self.products.is_empty() {
            return Err(AnalysisError::empty_collection("products"));
        }
        if self.purchase_records.is_empty() {
            return Err(AnalysisError::empty_collection("purchase_records"));
        }
        Ok(())
    }
}
