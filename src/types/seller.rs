//! Seller reference data
//!
//! Sellers are immutable input records. Every seller in the input produces
//! exactly one row in the final report, whether or not it made any sales.

use super::key::SellerId;
use serde::{Deserialize, Serialize};

/// A seller as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    /// Seller identifier, referenced by purchase records
    pub id: SellerId,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// Employment start date, passed through untouched
    #[serde(default)]
    pub start_date: Option<String>,

    /// Job title, passed through untouched
    #[serde(default)]
    pub position: Option<String>,
}

impl Seller {
    /// Display name used in reports: first and last name joined by one space
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
