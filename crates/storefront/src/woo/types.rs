//! Client-side request and result types that have no place in the core model.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use woo_storefront_core::{Address, Cart, GlobalId, OrderId, OrderStatus, Price};

/// Default listing page size.
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Largest page the listing endpoint will ask for.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Parameters for a product listing page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Page size.
    pub first: i64,
    /// Cursor from the previous page.
    pub after: Option<String>,
    /// Free-text search.
    pub search: Option<String>,
    /// Category slug filter.
    pub category: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            first: DEFAULT_PAGE_SIZE,
            after: None,
            search: None,
            category: None,
        }
    }
}

impl ProductQuery {
    /// Clamp the page size and drop blank filters.
    #[must_use]
    pub fn normalized(self) -> Self {
        let blank_to_none = |s: Option<String>| {
            s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        Self {
            first: self.first.clamp(1, MAX_PAGE_SIZE),
            after: blank_to_none(self.after),
            search: blank_to_none(self.search),
            category: blank_to_none(self.category),
        }
    }

    /// Whether results may be served from cache. Searches are not cached.
    #[must_use]
    pub const fn is_cacheable(&self) -> bool {
        self.search.is_none()
    }
}

/// Result of an `addToCart` mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedCartItem {
    /// Key of the created or updated line. Absent when the backend
    /// accepted the call but created nothing.
    pub key: Option<String>,
    /// Quantity now on the line.
    pub quantity: Option<i64>,
    /// The cart after the mutation.
    pub cart: Option<Cart>,
}

/// A payment gateway enabled on the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentGateway {
    /// Gateway ID passed as `paymentMethod` (e.g. `cod`, `bacs`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Customer-facing description.
    pub description: Option<String>,
}

/// A validated checkout, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSubmission {
    /// Payment gateway ID.
    pub payment_method: String,
    /// Billing address, reused as the shipping address.
    pub billing: Address,
    /// Note to the merchant.
    pub customer_note: Option<String>,
}

/// The order a checkout created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    /// Relay node ID.
    pub id: GlobalId,
    /// Numeric ID.
    pub database_id: Option<OrderId>,
    /// Human-facing order number.
    pub order_number: Option<String>,
    /// Status after checkout.
    pub status: OrderStatus,
    /// Order total.
    pub total: Option<Price>,
}

/// Outcome of a `checkout` mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResult {
    /// Gateway result, usually `success`.
    pub result: Option<String>,
    /// Where a hosted gateway wants the customer sent.
    pub redirect: Option<String>,
    /// The created order.
    pub order: Option<PlacedOrder>,
}

/// A validated account registration.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Login name.
    pub username: String,
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: SecretString,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Profile fields to change on the logged-in customer. `None` leaves a
/// field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Replacement billing address.
    pub billing: Option<Address>,
    /// Replacement shipping address.
    pub shipping: Option<Address>,
}

/// A validated password change for the logged-in customer.
#[derive(Debug, Clone)]
pub struct PasswordChange {
    /// Password the customer logged in with.
    pub current_password: SecretString,
    /// Replacement password.
    pub new_password: SecretString,
}

/// A validated password reset from an emailed link.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    /// Reset key from the link.
    pub key: String,
    /// Login the key was issued for.
    pub login: String,
    /// Replacement password.
    pub password: SecretString,
}
