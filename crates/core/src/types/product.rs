//! Catalog domain model.
//!
//! WooGraphQL returns products as a `Product` interface whose concrete type
//! (`SimpleProduct`, `VariableProduct`, `ExternalProduct`, `GroupProduct`)
//! decides which fields exist. Here that discriminant is a closed
//! [`ProductKind`] enum so every consumer has to handle each kind.

use serde::{Deserialize, Serialize};

use super::id::{CategoryId, GlobalId, ProductId, VariationId};
use super::price::Price;
use super::status::StockStatus;

// =============================================================================
// Shared Types
// =============================================================================

/// Product or variation image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Full-size image URL.
    pub source_url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

/// Price fields shared by simple and variable products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    /// Active price (sale price when on sale).
    pub price: Option<Price>,
    /// Regular (non-sale) price.
    pub regular_price: Option<Price>,
    /// Sale price, if a sale is configured.
    pub sale_price: Option<Price>,
}

impl Pricing {
    /// The price to show: active price, falling back to the regular price.
    #[must_use]
    pub fn effective(&self) -> Option<&Price> {
        self.price.as_ref().or(self.regular_price.as_ref())
    }
}

/// An attribute pair on a variation, as the backend spells it.
///
/// Names may be taxonomy keys (`pa_color`, `attribute_pa_size`) or labels
/// (`Color`); values may be slugs or display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value.
    pub value: String,
}

impl Attribute {
    /// Create an attribute pair.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Variations
// =============================================================================

/// A concrete purchasable SKU under a variable product.
///
/// Variations are recreated on every fetch and never mutated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    /// Relay node ID.
    pub id: GlobalId,
    /// Numeric ID used by cart mutations.
    pub database_id: VariationId,
    /// Display name (usually `"Product - Red, M"`).
    pub name: String,
    /// Stock status.
    pub stock_status: StockStatus,
    /// Units in stock, when stock is managed.
    pub stock_quantity: Option<i64>,
    /// Whether the backend allows this variation to be bought.
    pub purchasable: bool,
    /// Whether a sale price is active.
    pub on_sale: bool,
    /// Variation prices.
    pub pricing: Pricing,
    /// Which combination of dimensions this variation represents.
    pub attributes: Vec<Attribute>,
}

// =============================================================================
// Products
// =============================================================================

/// A child of a grouped product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupChild {
    /// Relay node ID.
    pub id: GlobalId,
    /// Numeric ID, addable to the cart as a simple product.
    pub database_id: ProductId,
    /// Display name.
    pub name: String,
    /// Active price.
    pub price: Option<Price>,
}

/// The concrete kind of a product and its kind-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductKind {
    /// A single SKU.
    Simple {
        /// Product prices.
        pricing: Pricing,
        /// Units in stock, when stock is managed.
        stock_quantity: Option<i64>,
    },
    /// Sold as variations over attribute dimensions.
    Variable {
        /// Price range fields of the parent.
        pricing: Pricing,
        /// Variations in backend order.
        variations: Vec<Variation>,
        /// Parent-level color term names (`allPaColor`).
        color_terms: Vec<String>,
        /// Parent-level size term names (`allPaSize`).
        size_terms: Vec<String>,
    },
    /// Sold on another site.
    External {
        /// Display price.
        price: Option<Price>,
        /// Where to buy.
        external_url: String,
    },
    /// A bundle of simple products bought individually.
    Group {
        /// Child products.
        children: Vec<GroupChild>,
    },
}

/// Kind discriminant without payload, for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKindTag {
    Simple,
    Variable,
    External,
    Group,
}

impl ProductKind {
    /// The payload-free discriminant.
    #[must_use]
    pub const fn tag(&self) -> ProductKindTag {
        match self {
            Self::Simple { .. } => ProductKindTag::Simple,
            Self::Variable { .. } => ProductKindTag::Variable,
            Self::External { .. } => ProductKindTag::External,
            Self::Group { .. } => ProductKindTag::Group,
        }
    }
}

/// A product in the catalog, as fetched for its detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Relay node ID.
    pub id: GlobalId,
    /// Numeric ID used by cart mutations.
    pub database_id: ProductId,
    /// URL slug.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// HTML description.
    pub description: Option<String>,
    /// Whether any sale is active.
    pub on_sale: bool,
    /// Average review rating.
    pub average_rating: Option<f64>,
    /// Featured image.
    pub image: Option<Image>,
    /// Kind-specific data.
    pub kind: ProductKind,
}

/// What to show where a price goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PriceDisplay {
    /// A resolved price.
    Amount {
        /// The price.
        price: Price,
    },
    /// Link out to the external seller.
    ExternalLink {
        /// Seller URL.
        url: String,
        /// Price shown next to the link, if any.
        price: Option<Price>,
    },
    /// No price is published; the customer must ask.
    ContactForPrice,
}

impl Product {
    /// Variations in backend order; empty for non-variable kinds.
    #[must_use]
    pub fn variations(&self) -> &[Variation] {
        match &self.kind {
            ProductKind::Variable { variations, .. } => variations,
            _ => &[],
        }
    }

    /// Whether this product is sold as variations.
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self.kind, ProductKind::Variable { .. })
    }

    /// Decide how the product's price is presented.
    ///
    /// Grouped products show their cheapest child with a readable amount.
    #[must_use]
    pub fn price_display(&self) -> PriceDisplay {
        let price = match &self.kind {
            ProductKind::External {
                price,
                external_url,
            } => {
                return PriceDisplay::ExternalLink {
                    url: external_url.clone(),
                    price: price.clone(),
                };
            }
            ProductKind::Simple { pricing, .. } | ProductKind::Variable { pricing, .. } => {
                pricing.effective().cloned()
            }
            ProductKind::Group { children } => children
                .iter()
                .filter_map(|child| child.price.as_ref())
                .filter(|price| price.has_amount())
                .min_by_key(|price| price.amount)
                .cloned(),
        };

        price.map_or(PriceDisplay::ContactForPrice, |price| PriceDisplay::Amount {
            price,
        })
    }
}

/// A product as it appears in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Relay node ID.
    pub id: GlobalId,
    /// Numeric ID.
    pub database_id: ProductId,
    /// URL slug.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Product kind.
    pub kind: ProductKindTag,
    /// Active or regular price.
    pub price: Option<Price>,
    /// Featured image.
    pub image: Option<Image>,
}

/// Cursor pagination info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Whether another page follows.
    pub has_next_page: bool,
    /// Cursor to pass as `after` for the next page.
    pub end_cursor: Option<String>,
}

/// One page of a product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products on this page.
    pub products: Vec<ProductSummary>,
    /// Pagination info.
    pub page_info: PageInfo,
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Relay node ID.
    pub id: GlobalId,
    /// Numeric ID.
    pub database_id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL slug, used as the listing filter.
    pub slug: String,
}
