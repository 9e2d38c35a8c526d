//! Customer account route handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{instrument, warn};

use crate::account::{
    PasswordChangeForm, PasswordResetForm, PasswordResetRequestForm, ProfileForm,
    RegistrationForm,
};
use crate::error::{AppError, Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::middleware::Shopper;
use crate::state::AppState;

/// Default number of orders listed on the account page.
const DEFAULT_ORDER_COUNT: i64 = 10;

/// Most orders one request may list.
const MAX_ORDER_COUNT: i64 = 50;

/// Login request body.
#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Order history query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersParams {
    pub first: Option<i64>,
}

/// Log in with WordPress credentials.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Json(form): Json<LoginForm>,
) -> Result<Response> {
    if form.username.trim().is_empty() || form.password.is_empty() {
        return Err(AppError::BadRequest(
            "Username and password are required".to_string(),
        ));
    }

    let customer = state
        .woo()
        .login(&mut shopper.commerce, form.username.trim(), &form.password)
        .await?;

    // New privilege level, new session ID
    shopper.cycle_id().await?;
    shopper.save().await?;

    set_sentry_user(&customer.id, customer.email.as_deref());
    add_breadcrumb("auth", "Customer logged in", None);
    tracing::info!(customer = %customer.id, "Customer logged in");

    Ok(Json(customer).into_response())
}

/// Log out and drop the backend session.
///
/// The backend logout is best-effort; local tokens are cleared either way.
#[instrument(skip_all)]
pub async fn logout(State(state): State<AppState>, mut shopper: Shopper) -> Result<StatusCode> {
    if shopper.commerce.is_authenticated()
        && let Err(e) = state.woo().logout(&mut shopper.commerce).await
    {
        warn!(error = %e, "Backend logout failed");
    }
    shopper.reset().await?;
    clear_sentry_user();
    add_breadcrumb("auth", "Customer logged out", None);
    Ok(StatusCode::NO_CONTENT)
}

/// Create an account and log straight into it.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Json(form): Json<RegistrationForm>,
) -> Result<Response> {
    let registration = form.validate().map_err(AppError::Validation)?;

    let created = state
        .woo()
        .register(&mut shopper.commerce, &registration)
        .await;
    shopper.save().await?;
    let created = created?;
    tracing::info!(customer = %created.id, "Customer registered");

    let customer = state
        .woo()
        .login(
            &mut shopper.commerce,
            &registration.username,
            registration.password.expose_secret(),
        )
        .await?;

    shopper.cycle_id().await?;
    shopper.save().await?;

    set_sentry_user(&customer.id, customer.email.as_deref());
    add_breadcrumb("auth", "Customer registered", None);

    Ok((StatusCode::CREATED, Json(customer)).into_response())
}

/// Update the logged-in customer's profile.
#[instrument(skip_all)]
pub async fn update(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Json(form): Json<ProfileForm>,
) -> Result<Response> {
    let update = form.validate().map_err(AppError::Validation)?;
    let customer = state
        .woo()
        .update_customer(&mut shopper.commerce, &update)
        .await;
    shopper.save().await?;
    Ok(Json(customer?).into_response())
}

/// Change the logged-in customer's password.
#[instrument(skip_all)]
pub async fn change_password(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Json(form): Json<PasswordChangeForm>,
) -> Result<StatusCode> {
    let change = form.validate().map_err(AppError::Validation)?;
    let result = state
        .woo()
        .change_password(&mut shopper.commerce, &change)
        .await;
    shopper.save().await?;
    result?;
    add_breadcrumb("auth", "Password changed", None);
    Ok(StatusCode::NO_CONTENT)
}

/// Email a password reset link.
#[instrument(skip_all)]
pub async fn request_password_reset(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Json(form): Json<PasswordResetRequestForm>,
) -> Result<StatusCode> {
    let username = form.validate().map_err(AppError::Validation)?;
    let result = state
        .woo()
        .request_password_reset(&mut shopper.commerce, &username)
        .await;
    shopper.save().await?;
    result?;
    Ok(StatusCode::ACCEPTED)
}

/// Set a new password from a reset key.
#[instrument(skip_all)]
pub async fn reset_password(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Json(form): Json<PasswordResetForm>,
) -> Result<StatusCode> {
    let reset = form.validate().map_err(AppError::Validation)?;
    let result = state
        .woo()
        .reset_password(&mut shopper.commerce, &reset)
        .await;
    shopper.save().await?;
    result?;
    Ok(StatusCode::NO_CONTENT)
}

/// The logged-in customer's profile.
#[instrument(skip_all)]
pub async fn show(State(state): State<AppState>, mut shopper: Shopper) -> Result<Response> {
    let customer = state.woo().get_customer(&mut shopper.commerce).await?;
    shopper.save().await?;
    Ok(Json(customer).into_response())
}

/// The logged-in customer's recent orders.
#[instrument(skip(state, shopper))]
pub async fn orders(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Query(params): Query<OrdersParams>,
) -> Result<Response> {
    let first = params
        .first
        .unwrap_or(DEFAULT_ORDER_COUNT)
        .clamp(1, MAX_ORDER_COUNT);
    let orders = state
        .woo()
        .get_customer_orders(&mut shopper.commerce, first)
        .await?;
    shopper.save().await?;
    Ok(Json(orders).into_response())
}
