//! Product catalog
//!
//! Read-only SKU index over the input products, built once before the fold.
//! If a SKU appears more than once the last product with that SKU wins.

use crate::types::{Product, Sku};
use std::collections::HashMap;

/// SKU to product lookup
#[derive(Debug, Clone)]
pub struct ProductCatalog<'a> {
    products: HashMap<&'a Sku, &'a Product>,
}

impl<'a> ProductCatalog<'a> {
    /// Index products by SKU
    pub fn from_products(products: &'a [Product]) -> Self {
        ProductCatalog {
            products: products
                .iter()
                .map(|product| (&product.sku, product))
                .collect(),
        }
    }

    /// Look up a product by SKU
    pub fn get(&self, sku: &Sku) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }

    /// Number of distinct SKUs in the catalog
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
