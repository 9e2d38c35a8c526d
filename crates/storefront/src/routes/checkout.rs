//! Checkout route handlers.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::instrument;

use crate::checkout::{CheckoutForm, default_payment_method};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::Shopper;
use crate::state::AppState;
use crate::woo::PaymentGateway;

#[derive(Serialize)]
struct GatewayList<'a> {
    gateways: &'a [PaymentGateway],
    default_method: &'a str,
}

/// Enabled payment gateways and the one to preselect.
#[instrument(skip_all)]
pub async fn payment_gateways(
    State(state): State<AppState>,
    mut shopper: Shopper,
) -> Result<Response> {
    let gateways = state
        .woo()
        .get_payment_gateways(&mut shopper.commerce)
        .await?;
    shopper.save().await?;
    Ok(Json(GatewayList {
        default_method: default_payment_method(&gateways),
        gateways: &gateways,
    })
    .into_response())
}

/// Validate the form and place the order.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Json(form): Json<CheckoutForm>,
) -> Result<Response> {
    let submission = form
        .validate(&state.config().checkout)
        .map_err(AppError::Validation)?;

    let result = state
        .woo()
        .checkout(&mut shopper.commerce, &submission)
        .await;
    shopper.save().await?;
    let result = result?;

    if let Some(order) = &result.order {
        add_breadcrumb(
            "checkout",
            "Order placed",
            Some(&[("order", order.id.as_str())]),
        );
        tracing::info!(order = %order.id, "Order placed");
        // Stock levels changed
        state.woo().invalidate_catalog();
    }

    Ok(Json(result).into_response())
}
