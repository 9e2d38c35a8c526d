//! Catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use woo_storefront_core::catalog::{ProductOptions, ProductView, Selection};
use woo_storefront_core::{PriceDisplay, Product, Variation};

use crate::error::Result;
use crate::state::AppState;
use crate::woo::ProductQuery;

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    pub first: Option<i64>,
    pub after: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
}

impl From<ListingParams> for ProductQuery {
    fn from(params: ListingParams) -> Self {
        let defaults = Self::default();
        Self {
            first: params.first.unwrap_or(defaults.first),
            after: params.after,
            search: params.search,
            category: params.category,
        }
    }
}

/// A product page: the product, what can be picked, and the current match.
#[derive(Serialize)]
struct ProductDetail<'a> {
    product: &'a Product,
    options: &'a ProductOptions,
    selection: &'a Selection,
    price: PriceDisplay,
    variation: Option<&'a Variation>,
}

impl<'a> ProductDetail<'a> {
    fn new(view: &'a ProductView) -> Self {
        let variation = view.resolved();
        let price = variation
            .and_then(|v| v.pricing.effective().cloned())
            .map_or_else(|| view.product().price_display(), |price| PriceDisplay::Amount { price });
        Self {
            product: view.product(),
            options: view.options(),
            selection: view.selection(),
            price,
            variation,
        }
    }
}

/// Product listing.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Response> {
    let page = state.woo().get_products(params.into()).await?;
    Ok(Json(page).into_response())
}

/// Product detail with a fresh, empty selection.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Response> {
    let product = state.woo().get_product_by_slug(&slug).await?;
    let view = ProductView::new(product);
    Ok(Json(ProductDetail::new(&view)).into_response())
}

/// Resolve a selection to a variation.
///
/// Unknown option values are rejected; an incomplete selection yields a
/// `null` variation.
#[instrument(skip(state))]
pub async fn resolve(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(selection): Json<Selection>,
) -> Result<Response> {
    let product = state.woo().get_product_by_slug(&slug).await?;
    let mut view = ProductView::new(product);
    view.apply(&selection)?;
    Ok(Json(ProductDetail::new(&view)).into_response())
}

/// Category list.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Result<Response> {
    let categories = state.woo().get_categories().await?;
    Ok(Json(categories.as_slice()).into_response())
}
