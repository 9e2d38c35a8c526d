//! Woo Storefront library.
//!
//! A headless storefront over WooCommerce's GraphQL API: a cached catalog
//! client, per-shopper backend sessions, variant resolution for product
//! pages, and a guarded add-to-cart flow, served as a JSON API.
//!
//! The binary in `main.rs` wires this together with Sentry and tracing;
//! everything here can be driven directly from tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod account;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod forms;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod woo;
