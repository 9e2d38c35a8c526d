//! Cart route handlers.
//!
//! Every handler runs against the shopper's own WooCommerce session and
//! saves it afterwards, so a token refreshed by the backend sticks.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;
use woo_storefront_core::Quantity;
use woo_storefront_core::catalog::{ProductView, Selection};

use crate::cart::{AddToCartOutcome, AddToCartRequest, LineAction, RejectReason, adjust_quantity, set_quantity};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::middleware::Shopper;
use crate::state::AppState;

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub slug: String,
    #[serde(default)]
    pub selection: Selection,
    /// Number or numeric string; anything else counts as 1.
    #[serde(default)]
    pub quantity: Option<serde_json::Value>,
}

/// Set-quantity request body.
#[derive(Debug, Deserialize)]
pub struct UpdateLineForm {
    pub key: String,
    pub quantity: i64,
}

/// Step-quantity request body.
#[derive(Debug, Deserialize)]
pub struct AdjustLineForm {
    pub key: String,
    pub delta: i64,
}

/// Remove-line request body.
#[derive(Debug, Deserialize)]
pub struct RemoveLineForm {
    pub key: String,
}

fn coerce_quantity(raw: Option<&serde_json::Value>) -> Quantity {
    match raw {
        Some(serde_json::Value::Number(n)) => Quantity::from_input(&n.to_string()),
        Some(serde_json::Value::String(s)) => Quantity::from_input(s),
        _ => Quantity::ONE,
    }
}

const fn outcome_status(outcome: &AddToCartOutcome) -> StatusCode {
    match outcome {
        AddToCartOutcome::Added { .. } => StatusCode::OK,
        AddToCartOutcome::Rejected {
            reason: RejectReason::AlreadyInFlight,
            ..
        } => StatusCode::CONFLICT,
        AddToCartOutcome::Rejected { .. } | AddToCartOutcome::Failed { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

/// Current cart.
#[instrument(skip_all)]
pub async fn show(State(state): State<AppState>, mut shopper: Shopper) -> Result<Response> {
    let cart = state.woo().get_cart(&mut shopper.commerce).await?;
    shopper.save().await?;
    Ok(Json(cart).into_response())
}

/// Add the selected product or variation to the cart.
#[instrument(skip(state, shopper), fields(slug = %form.slug))]
pub async fn add(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Json(form): Json<AddToCartForm>,
) -> Result<Response> {
    let product = state.woo().get_product_by_slug(&form.slug).await?;
    let mut view = ProductView::new(product);
    view.apply(&form.selection)?;

    let view_key = shopper.view_key(view.product().database_id);
    let outcome = state
        .composer()
        .add_to_cart(
            &mut shopper.commerce,
            AddToCartRequest {
                view_key: &view_key,
                product: view.product(),
                selection: view.selection(),
                quantity: coerce_quantity(form.quantity.as_ref()),
            },
        )
        .await;
    shopper.save().await?;

    if let AddToCartOutcome::Added { cart_line_key, .. } = &outcome {
        add_breadcrumb(
            "cart",
            "Added to cart",
            Some(&[("slug", form.slug.as_str()), ("line", cart_line_key.as_str())]),
        );
    }

    Ok((outcome_status(&outcome), Json(outcome)).into_response())
}

async fn apply_line_action(
    state: &AppState,
    shopper: &mut Shopper,
    action: LineAction,
) -> Result<Response> {
    let cart = action.apply(state.woo(), &mut shopper.commerce).await?;
    shopper.save().await?;
    Ok(Json(cart).into_response())
}

/// Set a line's quantity; zero removes it.
#[instrument(skip(state, shopper))]
pub async fn update(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Json(form): Json<UpdateLineForm>,
) -> Result<Response> {
    apply_line_action(&state, &mut shopper, set_quantity(&form.key, form.quantity)).await
}

/// Step a line's quantity up or down; reaching zero removes it.
#[instrument(skip(state, shopper))]
pub async fn adjust(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Json(form): Json<AdjustLineForm>,
) -> Result<Response> {
    let cart = state.woo().get_cart(&mut shopper.commerce).await?;
    let current = cart
        .line(&form.key)
        .map(|line| line.quantity)
        .ok_or_else(|| AppError::NotFound(format!("Cart line {}", form.key)))?;
    apply_line_action(&state, &mut shopper, adjust_quantity(&form.key, current, form.delta)).await
}

/// Remove a line.
#[instrument(skip(state, shopper))]
pub async fn remove(
    State(state): State<AppState>,
    mut shopper: Shopper,
    Json(form): Json<RemoveLineForm>,
) -> Result<Response> {
    apply_line_action(&state, &mut shopper, LineAction::Remove { key: form.key }).await
}

/// Empty the cart.
#[instrument(skip_all)]
pub async fn clear(State(state): State<AppState>, mut shopper: Shopper) -> Result<Response> {
    let cart = state.woo().empty_cart(&mut shopper.commerce).await?;
    shopper.save().await?;
    Ok(Json(cart).into_response())
}
