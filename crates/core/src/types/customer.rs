//! Customer account types.

use serde::{Deserialize, Serialize};

use super::id::{CustomerId, GlobalId, OrderId};
use super::price::Price;
use super::status::OrderStatus;

/// A postal address. Billing addresses also carry email and phone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A logged-in customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Relay node ID.
    pub id: GlobalId,
    /// Numeric ID.
    pub database_id: Option<CustomerId>,
    /// Account email.
    pub email: Option<String>,
    /// Login name.
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Name to greet the customer with.
    pub display_name: Option<String>,
    /// Billing address on file.
    pub billing: Option<Address>,
    /// Shipping address on file.
    pub shipping: Option<Address>,
}

impl Customer {
    /// Greeting name: display name, else first name, else username.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        [&self.display_name, &self.first_name, &self.username]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.trim().is_empty())
            .unwrap_or("")
    }
}

/// A past order in the customer's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Relay node ID.
    pub id: GlobalId,
    /// Numeric ID.
    pub database_id: Option<OrderId>,
    /// Customer-facing order number.
    pub order_number: Option<String>,
    /// Order status.
    pub status: OrderStatus,
    /// Creation date as returned by the backend.
    pub date: Option<String>,
    /// Order total.
    pub total: Option<Price>,
    /// Payment method title.
    pub payment_method_title: Option<String>,
}
