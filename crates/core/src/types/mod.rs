//! Core types for the Woo storefront.
//!
//! This module provides type-safe wrappers and the catalog/cart/customer
//! domain model that GraphQL responses are converted into.

pub mod cart;
pub mod customer;
pub mod email;
pub mod id;
pub mod price;
pub mod product;
pub mod status;

pub use cart::{Cart, CartLine, CartLineInput, CartTarget, IdempotencyToken, Quantity};
pub use customer::{Address, Customer, OrderSummary};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
pub use product::{
    Attribute, Category, GroupChild, Image, PageInfo, PriceDisplay, Pricing, Product,
    ProductKind, ProductKindTag, ProductPage, ProductSummary, Variation,
};
pub use status::*;
