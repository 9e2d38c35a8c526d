//! GraphQL operations against WooGraphQL.
//!
//! Each operation is a marker type implementing [`GraphQLQuery`] plus a
//! snake-case module holding its `Variables` and `ResponseData`, the same
//! shape `#[derive(GraphQLQuery)]` generates. The documents live in
//! `graphql/queries/` and are sent whole; `operationName` picks the
//! operation.

use graphql_client::{GraphQLQuery, QueryBody};
use serde::{Deserialize, Serialize};

const PRODUCTS_DOCUMENT: &str = include_str!("../../graphql/queries/products.graphql");
const CART_DOCUMENT: &str = include_str!("../../graphql/queries/cart.graphql");
const CUSTOMER_DOCUMENT: &str = include_str!("../../graphql/queries/customer.graphql");
const CHECKOUT_DOCUMENT: &str = include_str!("../../graphql/queries/checkout.graphql");

macro_rules! operation {
    ($name:ident, $module:ident, $document:expr) => {
        pub struct $name;

        impl GraphQLQuery for $name {
            type Variables = $module::Variables;
            type ResponseData = $module::ResponseData;

            fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
                QueryBody {
                    variables,
                    query: $document,
                    operation_name: stringify!($name),
                }
            }
        }
    };
}

operation!(GetProduct, get_product, PRODUCTS_DOCUMENT);
operation!(GetProducts, get_products, PRODUCTS_DOCUMENT);
operation!(GetProductCategories, get_product_categories, PRODUCTS_DOCUMENT);
operation!(GetCart, get_cart, CART_DOCUMENT);
operation!(AddToCart, add_to_cart, CART_DOCUMENT);
operation!(UpdateItemQuantities, update_item_quantities, CART_DOCUMENT);
operation!(RemoveItemsFromCart, remove_items_from_cart, CART_DOCUMENT);
operation!(EmptyCart, empty_cart, CART_DOCUMENT);
operation!(Login, login, CUSTOMER_DOCUMENT);
operation!(Logout, logout, CUSTOMER_DOCUMENT);
operation!(RegisterCustomer, register_customer, CUSTOMER_DOCUMENT);
operation!(UpdateCustomer, update_customer, CUSTOMER_DOCUMENT);
operation!(ChangePassword, change_password, CUSTOMER_DOCUMENT);
operation!(ResetPassword, reset_password, CUSTOMER_DOCUMENT);
operation!(RequestPasswordReset, request_password_reset, CUSTOMER_DOCUMENT);
operation!(GetCustomer, get_customer, CUSTOMER_DOCUMENT);
operation!(GetCustomerOrders, get_customer_orders, CUSTOMER_DOCUMENT);
operation!(GetPaymentGateways, get_payment_gateways, CHECKOUT_DOCUMENT);
operation!(Checkout, checkout, CHECKOUT_DOCUMENT);

/// Operations with no variables.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoVariables {}

// =============================================================================
// Shared response shapes
// =============================================================================

/// `{ nodes: [...] }` connection wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Nodes<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for Nodes<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// `{ node: ... }` edge wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub source_url: Option<String>,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoNode {
    #[serde(default)]
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartNode {
    pub contents: Option<CartContents>,
    pub subtotal: Option<String>,
    pub total: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartContents {
    pub item_count: Option<i64>,
    #[serde(default)]
    pub nodes: Vec<CartItemNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemNode {
    pub key: String,
    pub quantity: Option<i64>,
    pub subtotal: Option<String>,
    pub total: Option<String>,
    pub product: Option<Edge<CartProductNode>>,
    pub variation: Option<Edge<CartVariationNode>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartProductNode {
    pub database_id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartVariationNode {
    pub database_id: i64,
    pub name: Option<String>,
}

/// Payload of every cart mutation that returns the updated cart.
#[derive(Debug, Clone, Deserialize)]
pub struct CartPayload {
    pub cart: Option<CartNode>,
}

/// Payload of account mutations that only report success.
#[derive(Debug, Clone, Deserialize)]
pub struct SuccessPayload {
    pub success: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressNode {
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

// =============================================================================
// Catalog
// =============================================================================

pub mod get_product {
    use serde::{Deserialize, Serialize};
    use woo_storefront_core::StockStatus;

    use super::{ImageNode, Nodes};

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub slug: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub product: Option<ProductNode>,
    }

    /// The product interface, discriminated by `__typename`.
    #[derive(Debug, Clone, Deserialize)]
    #[serde(tag = "__typename")]
    pub enum ProductNode {
        SimpleProduct(SimpleProduct),
        VariableProduct(VariableProduct),
        ExternalProduct(ExternalProduct),
        GroupProduct(GroupProduct),
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductFields {
        pub id: String,
        pub database_id: i64,
        pub slug: Option<String>,
        pub name: Option<String>,
        pub description: Option<String>,
        pub on_sale: Option<bool>,
        pub average_rating: Option<f64>,
        pub image: Option<ImageNode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SimpleProduct {
        #[serde(flatten)]
        pub fields: ProductFields,
        pub price: Option<String>,
        pub regular_price: Option<String>,
        pub sale_price: Option<String>,
        pub stock_quantity: Option<i64>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct VariableProduct {
        #[serde(flatten)]
        pub fields: ProductFields,
        pub price: Option<String>,
        pub regular_price: Option<String>,
        pub sale_price: Option<String>,
        pub all_pa_color: Option<Nodes<TermNode>>,
        pub all_pa_size: Option<Nodes<TermNode>>,
        pub variations: Option<Nodes<VariationNode>>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExternalProduct {
        #[serde(flatten)]
        pub fields: ProductFields,
        pub price: Option<String>,
        pub external_url: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GroupProduct {
        #[serde(flatten)]
        pub fields: ProductFields,
        pub products: Option<Nodes<GroupChildNode>>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct TermNode {
        pub name: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct VariationNode {
        pub id: String,
        pub database_id: i64,
        pub name: Option<String>,
        pub stock_status: Option<StockStatus>,
        pub stock_quantity: Option<i64>,
        pub purchasable: Option<bool>,
        pub on_sale: Option<bool>,
        pub price: Option<String>,
        pub sale_price: Option<String>,
        pub regular_price: Option<String>,
        pub attributes: Option<Nodes<VariationAttributeNode>>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct VariationAttributeNode {
        pub name: Option<String>,
        pub value: Option<String>,
    }

    /// A grouped child. Only simple children carry fields; others are `{}`.
    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GroupChildNode {
        pub id: Option<String>,
        pub database_id: Option<i64>,
        pub name: Option<String>,
        pub price: Option<String>,
    }
}

pub mod get_products {
    use serde::{Deserialize, Serialize};

    use super::{ImageNode, PageInfoNode};

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
        pub after: Option<String>,
        pub search: Option<String>,
        pub category: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub products: Option<ProductConnection>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductConnection {
        pub page_info: Option<PageInfoNode>,
        #[serde(default)]
        pub nodes: Vec<ProductSummaryNode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ProductSummaryNode {
        #[serde(rename = "__typename")]
        pub typename: String,
        pub id: String,
        pub database_id: i64,
        pub slug: Option<String>,
        pub name: Option<String>,
        pub image: Option<ImageNode>,
        pub price: Option<String>,
        pub regular_price: Option<String>,
    }
}

pub mod get_product_categories {
    use serde::{Deserialize, Serialize};

    use super::Nodes;

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub product_categories: Option<Nodes<CategoryNode>>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CategoryNode {
        pub id: String,
        pub database_id: i64,
        pub name: Option<String>,
        pub slug: Option<String>,
    }
}

// =============================================================================
// Cart
// =============================================================================

pub mod get_cart {
    use serde::Deserialize;

    use super::CartNode;

    pub type Variables = super::NoVariables;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub cart: Option<CartNode>,
    }
}

pub mod add_to_cart {
    use serde::{Deserialize, Serialize};

    use super::CartNode;

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: AddToCartInput,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AddToCartInput {
        pub client_mutation_id: String,
        pub product_id: i64,
        pub quantity: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub variation_id: Option<i64>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub add_to_cart: Option<AddToCartPayload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AddToCartPayload {
        pub cart_item: Option<CartItemRef>,
        pub cart: Option<CartNode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct CartItemRef {
        pub key: Option<String>,
        pub quantity: Option<i64>,
    }
}

pub mod update_item_quantities {
    use serde::{Deserialize, Serialize};

    use super::CartPayload;

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: UpdateItemQuantitiesInput,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UpdateItemQuantitiesInput {
        pub client_mutation_id: String,
        pub items: Vec<CartItemQuantityInput>,
    }

    #[derive(Debug, Clone, Serialize)]
    pub struct CartItemQuantityInput {
        pub key: String,
        pub quantity: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub update_item_quantities: Option<CartPayload>,
    }
}

pub mod remove_items_from_cart {
    use serde::{Deserialize, Serialize};

    use super::CartPayload;

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: RemoveItemsFromCartInput,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RemoveItemsFromCartInput {
        pub client_mutation_id: String,
        pub keys: Vec<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub remove_items_from_cart: Option<CartPayload>,
    }
}

pub mod empty_cart {
    use serde::{Deserialize, Serialize};

    use super::CartPayload;

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: EmptyCartInput,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EmptyCartInput {
        pub client_mutation_id: String,
        pub clear_persistent_cart: bool,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub empty_cart: Option<CartPayload>,
    }
}

// =============================================================================
// Customer
// =============================================================================

pub mod login {
    use serde::{Deserialize, Serialize};

    /// Login variables. No `Debug`: the password must not reach logs.
    #[derive(Clone, Serialize)]
    pub struct Variables {
        pub input: LoginInput,
    }

    #[derive(Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct LoginInput {
        pub client_mutation_id: String,
        pub username: String,
        pub password: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub login: Option<LoginPayload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct LoginPayload {
        pub auth_token: Option<String>,
        pub user: Option<UserNode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UserNode {
        pub id: String,
        pub database_id: Option<i64>,
        pub email: Option<String>,
        pub username: Option<String>,
        pub first_name: Option<String>,
        pub last_name: Option<String>,
    }
}

pub mod logout {
    use serde::Deserialize;

    use super::SuccessPayload;

    pub type Variables = super::NoVariables;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub logout: Option<SuccessPayload>,
    }
}

pub mod register_customer {
    use serde::{Deserialize, Serialize};

    use super::get_customer::CustomerNode;

    /// No `Debug`: carries the password.
    #[derive(Clone, Serialize)]
    pub struct Variables {
        pub input: RegisterCustomerInput,
    }

    #[derive(Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RegisterCustomerInput {
        pub client_mutation_id: String,
        pub username: String,
        pub email: String,
        pub password: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub first_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_name: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub register_customer: Option<CustomerPayload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct CustomerPayload {
        pub customer: Option<CustomerNode>,
    }
}

pub mod update_customer {
    use serde::{Deserialize, Serialize};
    use woo_storefront_core::Address;

    pub use super::register_customer::CustomerPayload;

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: UpdateCustomerInput,
    }

    /// Omitted fields are left unchanged by the backend.
    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct UpdateCustomerInput {
        pub client_mutation_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub first_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub billing: Option<AddressUpdate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub shipping: Option<AddressUpdate>,
    }

    #[derive(Debug, Clone, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AddressUpdate {
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub company: Option<String>,
        pub address1: Option<String>,
        pub address2: Option<String>,
        pub city: Option<String>,
        pub state: Option<String>,
        pub postcode: Option<String>,
        pub country: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub phone: Option<String>,
    }

    impl From<Address> for AddressUpdate {
        fn from(address: Address) -> Self {
            Self {
                first_name: address.first_name,
                last_name: address.last_name,
                company: address.company,
                address1: address.address1,
                address2: address.address2,
                city: address.city,
                state: address.state,
                postcode: address.postcode,
                country: address.country,
                email: address.email,
                phone: address.phone,
            }
        }
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub update_customer: Option<CustomerPayload>,
    }
}

pub mod change_password {
    use serde::{Deserialize, Serialize};

    use super::SuccessPayload;

    /// No `Debug`: carries both passwords.
    #[derive(Clone, Serialize)]
    pub struct Variables {
        pub input: ChangePasswordInput,
    }

    #[derive(Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ChangePasswordInput {
        pub client_mutation_id: String,
        pub current_password: String,
        pub new_password: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub change_password: Option<SuccessPayload>,
    }
}

pub mod reset_password {
    use serde::{Deserialize, Serialize};

    use super::SuccessPayload;

    /// No `Debug`: carries the new password.
    #[derive(Clone, Serialize)]
    pub struct Variables {
        pub input: ResetPasswordInput,
    }

    #[derive(Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResetPasswordInput {
        pub client_mutation_id: String,
        pub key: String,
        pub login: String,
        pub password: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub reset_password: Option<SuccessPayload>,
    }
}

pub mod request_password_reset {
    use serde::{Deserialize, Serialize};

    use super::SuccessPayload;

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: RequestPasswordResetInput,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestPasswordResetInput {
        pub client_mutation_id: String,
        pub username: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub request_password_reset: Option<SuccessPayload>,
    }
}

pub mod get_customer {
    use serde::Deserialize;

    use super::AddressNode;

    pub type Variables = super::NoVariables;

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub customer: Option<CustomerNode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CustomerNode {
        pub id: String,
        pub database_id: Option<i64>,
        pub email: Option<String>,
        pub username: Option<String>,
        pub first_name: Option<String>,
        pub last_name: Option<String>,
        pub display_name: Option<String>,
        pub billing: Option<AddressNode>,
        pub shipping: Option<AddressNode>,
    }
}

pub mod get_customer_orders {
    use serde::{Deserialize, Serialize};
    use woo_storefront_core::OrderStatus;

    use super::Nodes;

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub first: i64,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub customer: Option<CustomerOrders>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct CustomerOrders {
        pub orders: Option<Nodes<OrderNode>>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct OrderNode {
        pub id: String,
        pub database_id: Option<i64>,
        pub order_number: Option<String>,
        pub status: Option<OrderStatus>,
        pub date: Option<String>,
        pub total: Option<String>,
        pub payment_method_title: Option<String>,
    }
}

// =============================================================================
// Checkout
// =============================================================================

pub mod get_payment_gateways {
    use serde::Deserialize;

    use super::Nodes;

    pub type Variables = super::NoVariables;

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub payment_gateways: Option<Nodes<PaymentGatewayNode>>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct PaymentGatewayNode {
        pub id: String,
        pub title: Option<String>,
        pub description: Option<String>,
    }
}

pub mod checkout {
    use serde::{Deserialize, Serialize};
    use woo_storefront_core::OrderStatus;

    #[derive(Debug, Clone, Serialize)]
    pub struct Variables {
        pub input: CheckoutInput,
    }

    #[derive(Debug, Clone, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CheckoutInput {
        pub client_mutation_id: String,
        pub payment_method: String,
        pub billing: CustomerAddressInput,
        pub shipping: CustomerAddressInput,
        pub ship_to_different_address: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub customer_note: Option<String>,
    }

    #[derive(Debug, Clone, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CustomerAddressInput {
        pub first_name: String,
        pub last_name: String,
        pub address1: String,
        pub city: String,
        pub state: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub postcode: Option<String>,
        pub country: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub phone: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub checkout: Option<CheckoutPayload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct CheckoutPayload {
        pub result: Option<String>,
        pub redirect: Option<String>,
        pub order: Option<CheckoutOrderNode>,
    }

    #[derive(Debug, Clone, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CheckoutOrderNode {
        pub id: String,
        pub database_id: Option<i64>,
        pub order_number: Option<String>,
        pub status: Option<OrderStatus>,
        pub total: Option<String>,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_names_the_operation() {
        let body = AddToCart::build_query(add_to_cart::Variables {
            input: add_to_cart::AddToCartInput {
                client_mutation_id: "m-1".to_string(),
                product_id: 100,
                quantity: 2,
                variation_id: None,
            },
        });
        assert_eq!(body.operation_name, "AddToCart");
        assert!(body.query.contains("mutation AddToCart("));

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["operationName"], "AddToCart");
        assert_eq!(json["variables"]["input"]["productId"], 100);
        assert!(json["variables"]["input"].get("variationId").is_none());
    }

    #[test]
    fn test_profile_update_omits_unchanged_fields() {
        let body = UpdateCustomer::build_query(update_customer::Variables {
            input: update_customer::UpdateCustomerInput {
                client_mutation_id: "m-2".to_string(),
                first_name: Some("Bình".to_string()),
                last_name: None,
                email: None,
                billing: None,
                shipping: None,
            },
        });
        assert!(body.query.contains("mutation UpdateCustomer("));

        let json = serde_json::to_value(&body).unwrap();
        let input = &json["variables"]["input"];
        assert_eq!(input["firstName"], "Bình");
        assert!(input.get("lastName").is_none());
        assert!(input.get("billing").is_none());
    }

    #[test]
    fn test_no_variables_serializes_to_empty_object() {
        let json = serde_json::to_string(&NoVariables {}).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_product_node_dispatches_on_typename() {
        let json = serde_json::json!({
            "product": {
                "__typename": "VariableProduct",
                "id": "cHJvZHVjdDoxMDA=",
                "databaseId": 100,
                "slug": "ao-so-mi",
                "name": "Áo sơ mi",
                "onSale": false,
                "averageRating": 4.5,
                "image": null,
                "price": "150.000&nbsp;₫",
                "allPaColor": { "nodes": [{ "name": "Trắng" }] },
                "allPaSize": { "nodes": [] },
                "variations": {
                    "nodes": [{
                        "id": "v1",
                        "databaseId": 101,
                        "name": "Áo sơ mi - Trắng",
                        "stockStatus": "IN_STOCK",
                        "purchasable": true,
                        "attributes": { "nodes": [{ "name": "pa_color", "value": "trang" }] }
                    }]
                }
            }
        });
        let data: get_product::ResponseData = serde_json::from_value(json).unwrap();
        let Some(get_product::ProductNode::VariableProduct(product)) = data.product else {
            panic!("expected a variable product");
        };
        assert_eq!(product.fields.database_id, 100);
        assert_eq!(product.variations.unwrap().nodes.len(), 1);
    }

    #[test]
    fn test_unknown_typename_is_rejected() {
        let json = serde_json::json!({
            "product": { "__typename": "BundleProduct", "id": "x", "databaseId": 1 }
        });
        assert!(serde_json::from_value::<get_product::ResponseData>(json).is_err());
    }
}
