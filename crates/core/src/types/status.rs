//! Status enums mirrored from the WooGraphQL schema.

use serde::{Deserialize, Serialize};

/// Stock status of a product or variation.
///
/// Maps to WooGraphQL's `StockStatusEnum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
    OnBackorder,
}

impl StockStatus {
    /// Whether an order can be placed in this status.
    #[must_use]
    pub const fn is_orderable(self) -> bool {
        matches!(self, Self::InStock | Self::OnBackorder)
    }
}

/// Order status.
///
/// Maps to WooGraphQL's `OrderStatusEnum`. Statuses added by plugins
/// deserialize as [`OrderStatus::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
    CheckoutDraft,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::OnHold => "on-hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
            Self::Failed => "failed",
            Self::CheckoutDraft => "checkout-draft",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}
