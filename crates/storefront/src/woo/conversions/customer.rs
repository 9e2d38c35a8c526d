//! Customer, order and checkout conversion functions.

use woo_storefront_core::{
    Address, Customer, CustomerId, GlobalId, OrderId, OrderStatus, OrderSummary, Price,
};

use super::super::queries::{
    AddressNode, checkout, get_customer, get_customer_orders, get_payment_gateways, login,
};
use super::super::types::{CheckoutResult, PaymentGateway, PlacedOrder};

fn convert_address(node: AddressNode) -> Address {
    Address {
        first_name: node.first_name,
        last_name: node.last_name,
        company: node.company,
        address1: node.address1,
        address2: node.address2,
        city: node.city,
        state: node.state,
        postcode: node.postcode,
        country: node.country,
        email: node.email,
        phone: node.phone,
    }
}

/// Convert the `customer` query result.
pub fn convert_customer(node: get_customer::CustomerNode) -> Customer {
    Customer {
        id: GlobalId::new(node.id),
        database_id: node.database_id.map(CustomerId::new),
        email: node.email,
        username: node.username,
        first_name: node.first_name,
        last_name: node.last_name,
        display_name: node.display_name,
        billing: node.billing.map(convert_address),
        shipping: node.shipping.map(convert_address),
    }
}

/// Convert the user returned by `login`. Addresses are not part of the payload.
pub fn convert_logged_in_user(node: login::UserNode) -> Customer {
    Customer {
        id: GlobalId::new(node.id),
        database_id: node.database_id.map(CustomerId::new),
        email: node.email,
        username: node.username,
        first_name: node.first_name,
        last_name: node.last_name,
        display_name: None,
        billing: None,
        shipping: None,
    }
}

/// Convert an order history entry.
pub fn convert_order(node: get_customer_orders::OrderNode) -> OrderSummary {
    OrderSummary {
        id: GlobalId::new(node.id),
        database_id: node.database_id.map(OrderId::new),
        order_number: node.order_number,
        status: node.status.unwrap_or(OrderStatus::Other),
        date: node.date,
        total: Price::parse(node.total.as_deref()),
        payment_method_title: node.payment_method_title,
    }
}

/// Convert a payment gateway. The title falls back to the gateway ID.
pub fn convert_payment_gateway(node: get_payment_gateways::PaymentGatewayNode) -> PaymentGateway {
    PaymentGateway {
        title: node
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| node.id.clone()),
        id: node.id,
        description: node.description.filter(|d| !d.trim().is_empty()),
    }
}

/// Convert a `checkout` payload.
pub fn convert_checkout(payload: checkout::CheckoutPayload) -> CheckoutResult {
    CheckoutResult {
        result: payload.result,
        redirect: payload.redirect.filter(|r| !r.is_empty()),
        order: payload.order.map(|order| PlacedOrder {
            id: GlobalId::new(order.id),
            database_id: order.database_id.map(OrderId::new),
            order_number: order.order_number,
            status: order.status.unwrap_or(OrderStatus::Other),
            total: Price::parse(order.total.as_deref()),
        }),
    }
}
