//! Router tests: requests go through the full layer stack via `oneshot`,
//! with WooGraphQL played by a `wiremock` server.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::net::{IpAddr, Ipv4Addr};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use tower_sessions::MemoryStore;
use url::Url;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use woo_storefront::config::{CheckoutConfig, StorefrontConfig, WooConfig};
use woo_storefront::routes;
use woo_storefront::state::AppState;

fn test_app(server: &MockServer) -> Router {
    let url = Url::parse(&format!("{}/graphql", server.uri())).expect("mock server url");
    let config = StorefrontConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        woo: WooConfig::new(url),
        checkout: CheckoutConfig::default(),
        sentry_dsn: None,
        sentry_environment: None,
    };
    let state = AppState::new(config).expect("state");
    routes::app(state, MemoryStore::default())
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    serde_json::from_slice(&bytes).expect("json parse")
}

async fn mount_product(server: &MockServer, product: Value) {
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "GetProduct" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "product": product }
        })))
        .mount(server)
        .await;
}

fn variable_product() -> Value {
    json!({
        "__typename": "VariableProduct",
        "id": "cHJvZHVjdDoxMA==",
        "databaseId": 10,
        "slug": "ao-thun",
        "name": "Áo thun",
        "price": "150.000&nbsp;₫",
        "variations": { "nodes": [
            {
                "id": "v11", "databaseId": 11, "name": "Áo thun - Đỏ, M",
                "price": "150.000&nbsp;₫",
                "attributes": { "nodes": [
                    { "name": "pa_color", "value": "do" },
                    { "name": "pa_size", "value": "m" }
                ]}
            },
            {
                "id": "v12", "databaseId": 12, "name": "Áo thun - Xanh, M",
                "price": "170.000&nbsp;₫",
                "attributes": { "nodes": [
                    { "name": "pa_color", "value": "xanh" },
                    { "name": "pa_size", "value": "m" }
                ]}
            }
        ]}
    })
}

#[tokio::test]
async fn health_is_ok_and_not_cacheable() {
    let server = MockServer::start().await;
    let response = test_app(&server)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).map(|v| v.to_str().unwrap()),
        Some("no-store")
    );
}

#[tokio::test]
async fn product_detail_lists_options_without_a_selection() {
    let server = MockServer::start().await;
    mount_product(&server, variable_product()).await;

    let response = test_app(&server)
        .oneshot(
            Request::builder()
                .uri("/products/ao-thun")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["options"]["colors"], json!(["do", "xanh"]));
    assert_eq!(json["options"]["sizes"], json!(["m"]));
    assert_eq!(json["variation"], Value::Null);
}

#[tokio::test]
async fn resolve_returns_matching_variation_and_its_price() {
    let server = MockServer::start().await;
    mount_product(&server, variable_product()).await;

    let response = test_app(&server)
        .oneshot(post_json(
            "/products/ao-thun/resolve",
            &json!({ "color": "Xanh", "size": "M" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["variation"]["database_id"], 12);
    assert_eq!(json["price"]["type"], "amount");
}

#[tokio::test]
async fn resolve_rejects_unknown_option() {
    let server = MockServer::start().await;
    mount_product(&server, variable_product()).await;

    let response = test_app(&server)
        .oneshot(post_json(
            "/products/ao-thun/resolve",
            &json!({ "color": "tim" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(response).await;
    assert!(json["error"].as_str().unwrap().contains("tim"));
}

#[tokio::test]
async fn incomplete_selection_is_rejected_without_calling_the_backend() {
    let server = MockServer::start().await;
    mount_product(&server, variable_product()).await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "AddToCart" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let response = test_app(&server)
        .oneshot(post_json(
            "/cart/add",
            &json!({ "slug": "ao-thun", "selection": { "size": "M" }, "quantity": "2" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(response).await;
    assert_eq!(json["status"], "rejected");
    assert_eq!(json["reason"], "selection_incomplete");
}

#[tokio::test]
async fn external_product_is_rejected_with_its_url() {
    let server = MockServer::start().await;
    mount_product(
        &server,
        json!({
            "__typename": "ExternalProduct",
            "id": "cHJvZHVjdDozMA==",
            "databaseId": 30,
            "slug": "sach",
            "name": "Sách",
            "price": "120.000&nbsp;₫",
            "externalUrl": "https://books.example/sach"
        }),
    )
    .await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "AddToCart" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let response = test_app(&server)
        .oneshot(post_json("/cart/add", &json!({ "slug": "sach" })))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(response).await;
    assert_eq!(json["reason"], "external_purchase");
    assert_eq!(json["url"], "https://books.example/sach");
}

#[tokio::test]
async fn account_requires_login() {
    let server = MockServer::start().await;
    let response = test_app(&server)
        .oneshot(Request::builder().uri("/account").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn checkout_reports_invalid_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "Checkout" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let response = test_app(&server)
        .oneshot(post_json(
            "/checkout",
            &json!({ "first_name": "An", "email": "not-an-email" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(response).await;
    assert!(json["fields"].is_array());
}

#[tokio::test]
async fn weak_new_password_is_rejected_without_calling_the_backend() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let response = test_app(&server)
        .oneshot(post_json(
            "/account/password",
            &json!({
                "current_password": "Old12345",
                "new_password": "short",
                "confirm_password": "shorter"
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = json_body(response).await;
    let fields: Vec<&str> = json["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .filter_map(|f| f["field"].as_str())
        .collect();
    assert!(fields.contains(&"new_password"), "got {fields:?}");
    assert!(fields.contains(&"confirm_password"), "got {fields:?}");
}

#[tokio::test]
async fn logout_succeeds_even_when_backend_logout_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "Login" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "login": {
                "authToken": "jwt-token",
                "user": { "id": "dXNlcjox", "databaseId": 1, "username": "an" }
            } }
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "Logout" })))
        .and(wiremock::matchers::header("authorization", "Bearer jwt-token"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&server);
    let response = app
        .clone()
        .oneshot(post_json(
            "/account/login",
            &json!({ "username": "an", "password": "secret" }),
        ))
        .await
        .expect("login response");
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .expect("session cookie")
        .to_string();

    let mut logout = post_json("/account/logout", &json!({}));
    logout
        .headers_mut()
        .insert(header::COOKIE, cookie.parse().expect("cookie header"));
    let response = app.oneshot(logout).await.expect("logout response");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
