//! Cache types for catalog responses.

use std::sync::Arc;

use woo_storefront_core::{Category, Product, ProductPage};

use super::types::ProductQuery;

/// Cache key for catalog reads.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Product(String),
    Products(ProductQuery),
    Categories,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Arc<Product>),
    Products(ProductPage),
    Categories(Arc<Vec<Category>>),
}
