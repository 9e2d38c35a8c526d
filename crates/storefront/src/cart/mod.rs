//! Cart operations on top of the WooGraphQL client.
//!
//! - [`composer`] turns a product view's selection into an `addToCart`
//!   mutation, at most one in flight per view.
//! - [`lines`] decides what a quantity change on an existing line means.

pub mod composer;
pub mod lines;

pub use composer::{
    AddToCartOutcome, AddToCartRequest, AttemptState, CartBackend, CartComposer, RejectReason,
    ViewKey, cart_target,
};
pub use lines::{LineAction, adjust_quantity, set_quantity};
