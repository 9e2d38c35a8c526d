//! Quantity changes on existing cart lines.

use serde::Serialize;
use tracing::instrument;
use woo_storefront_core::Cart;

use crate::woo::{CommerceSession, WooClient, WooError};

/// What a quantity change amounts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LineAction {
    /// Set the line to a positive quantity.
    Update { key: String, quantity: u32 },
    /// Drop the line.
    Remove { key: String },
}

/// Step a line's quantity by `delta`. Reaching zero or below removes it.
#[must_use]
pub fn adjust_quantity(key: &str, current: u32, delta: i64) -> LineAction {
    set_quantity(key, i64::from(current).saturating_add(delta))
}

/// Set a line's quantity. Zero or below removes it.
#[must_use]
pub fn set_quantity(key: &str, quantity: i64) -> LineAction {
    let key = key.to_string();
    if quantity <= 0 {
        return LineAction::Remove { key };
    }
    LineAction::Update {
        key,
        quantity: u32::try_from(quantity).unwrap_or(u32::MAX),
    }
}

impl LineAction {
    /// Apply the change and return the updated cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the mutation fails.
    #[instrument(skip(client, session))]
    pub async fn apply(
        &self,
        client: &WooClient,
        session: &mut CommerceSession,
    ) -> Result<Cart, WooError> {
        match self {
            Self::Update { key, quantity } => {
                client
                    .update_item_quantities(session, &[(key.clone(), *quantity)])
                    .await
            }
            Self::Remove { key } => client.remove_items(session, std::slice::from_ref(key)).await,
        }
    }
}
