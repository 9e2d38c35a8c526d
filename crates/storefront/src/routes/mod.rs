//! HTTP route handlers for the storefront.
//!
//! Every endpoint speaks JSON. Errors render through
//! [`AppError`](crate::error::AppError) as `{"error": ...}`.

pub mod account;
pub mod cart;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{get, post},
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tower_sessions::MemoryStore;

use crate::middleware::create_session_layer;
use crate::state::AppState;

/// Product and category routes.
fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/products/{slug}", get(products::show))
        .route("/products/{slug}/resolve", post(products::resolve))
        .route("/categories", get(products::categories))
}

/// Cart routes.
fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/adjust", post(cart::adjust))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Account routes.
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::show).post(account::update))
        .route("/register", post(account::register))
        .route("/login", post(account::login))
        .route("/logout", post(account::logout))
        .route("/orders", get(account::orders))
        .route("/password", post(account::change_password))
        .route("/password-reset", post(account::request_password_reset))
        .route("/password-reset/confirm", post(account::reset_password))
}

/// Checkout routes.
fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(checkout::submit))
        .route("/payment-gateways", get(checkout::payment_gateways))
}

/// Build all storefront routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(product_routes())
        .nest("/cart", cart_routes())
        .nest("/account", account_routes())
        .nest("/checkout", checkout_routes())
}

/// Liveness check. Does not touch the backend.
async fn health() -> &'static str {
    "ok"
}

/// The full application: routes, sessions, and per-request layers.
///
/// Sentry layers are added by the binary so tests can run without a hub.
pub fn app(state: AppState, store: MemoryStore) -> Router {
    let session_layer = create_session_layer(store, state.config());

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(session_layer)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
