//! Cart domain types.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::id::{ProductId, VariationId};
use super::price::Price;

/// A cart line quantity, always at least 1.
///
/// Deserializing goes through [`Quantity::clamped`], so serialized input
/// cannot produce a zero or negative quantity either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// The smallest submittable quantity.
    pub const ONE: Self = Self(1);

    /// Coerce raw input to a quantity, clamping anything below 1 up to 1.
    #[must_use]
    pub fn clamped(raw: i64) -> Self {
        Self(u32::try_from(raw.max(1)).unwrap_or(u32::MAX))
    }

    /// Coerce a textual form value; unparseable input counts as 1.
    ///
    /// Fractional input is truncated toward zero before clamping.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        let raw = raw.trim();
        raw.parse::<i64>()
            .ok()
            .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(truncate))
            .map_or(Self::ONE, Self::clamped)
    }

    /// Quantity as an integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

#[allow(clippy::cast_possible_truncation)] // saturating float-to-int cast is the intent
fn truncate(value: f64) -> i64 {
    value as i64
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<i64> for Quantity {
    fn from(raw: i64) -> Self {
        Self::clamped(raw)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self::clamped)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique token attached to a mutation so the backend can drop duplicates.
///
/// Generated fresh for each submission attempt; never reused on retry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdempotencyToken(String);

impl IdempotencyToken {
    /// Generate a new random token.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What a cart line buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartTarget {
    /// A simple product, by its own ID.
    Product {
        /// Product to add.
        product_id: ProductId,
    },
    /// A matched variation of a variable product.
    Variation {
        /// Parent product.
        product_id: ProductId,
        /// Matched variation.
        variation_id: VariationId,
    },
}

impl CartTarget {
    /// The purchasable ID the line resolves to.
    #[must_use]
    pub const fn purchasable_id(&self) -> i64 {
        match self {
            Self::Product { product_id } => product_id.as_i64(),
            Self::Variation { variation_id, .. } => variation_id.as_i64(),
        }
    }
}

/// Input for one add-to-cart mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineInput {
    /// What to add.
    pub target: CartTarget,
    /// How many.
    pub quantity: Quantity,
    /// Deduplication token for this attempt.
    pub idempotency_token: IdempotencyToken,
}

impl CartLineInput {
    /// Build an input with a freshly generated idempotency token.
    #[must_use]
    pub fn new(target: CartTarget, quantity: Quantity) -> Self {
        Self {
            target,
            quantity,
            idempotency_token: IdempotencyToken::generate(),
        }
    }
}

/// A line in the remote cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Line key used by update/remove mutations.
    pub key: String,
    /// Units on the line.
    pub quantity: u32,
    /// Product ID.
    pub product_id: ProductId,
    /// Product name.
    pub product_name: String,
    /// Product slug.
    pub product_slug: Option<String>,
    /// Variation, when the line is a variation.
    pub variation_id: Option<VariationId>,
    /// Variation name.
    pub variation_name: Option<String>,
    /// Line subtotal before discounts.
    pub subtotal: Option<Price>,
    /// Line total.
    pub total: Option<Price>,
}

/// The customer's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in backend order.
    pub lines: Vec<CartLine>,
    /// Total units across lines.
    pub item_count: u32,
    /// Cart subtotal.
    pub subtotal: Option<Price>,
    /// Cart total.
    pub total: Option<Price>,
}

impl Cart {
    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find a line by key.
    #[must_use]
    pub fn line(&self, key: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.key == key)
    }
}
