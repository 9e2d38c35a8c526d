//! Conversions from WooGraphQL response shapes to the core model.

pub mod cart;
pub mod customer;
pub mod products;

pub use cart::{convert_added_item, convert_cart};
pub use customer::{
    convert_checkout, convert_customer, convert_logged_in_user, convert_order,
    convert_payment_gateway,
};
pub use products::{convert_category, convert_product, convert_product_page};
