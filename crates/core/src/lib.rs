//! Woo Storefront Core - Domain types and variant resolution.
//!
//! This crate provides the types and pure logic shared by the storefront:
//! - `storefront` - GraphQL client, cart composer, and JSON HTTP surface
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. Everything here runs synchronously inside the event
//! that triggered it (a selection click, a quantity change).
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, emails, statuses, and the product model
//! - [`catalog`] - Attribute normalization, option extraction, variation matching

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use types::*;
