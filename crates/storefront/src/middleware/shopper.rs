//! Per-shopper session extractor.
//!
//! Loads the shopper's [`CommerceSession`] out of the tower session and
//! hands it to handlers, which pass it explicitly to every backend call and
//! then [`Shopper::save`] it so refreshed tokens persist.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;
use uuid::Uuid;
use woo_storefront_core::ProductId;

use crate::cart::ViewKey;
use crate::error::AppError;
use crate::woo::CommerceSession;

/// Session keys.
pub mod session_keys {
    /// Stable identifier for the shopper, independent of backend tokens.
    pub const SHOPPER_ID: &str = "shopper_id";
    /// Serialized [`CommerceSession`](crate::woo::CommerceSession).
    pub const COMMERCE: &str = "commerce";
}

/// The shopper behind a request.
pub struct Shopper {
    session: Session,
    id: String,
    /// Backend tokens, passed to every WooGraphQL call.
    pub commerce: CommerceSession,
}

impl Shopper {
    /// Key for this shopper's view of `product`.
    #[must_use]
    pub fn view_key(&self, product: ProductId) -> ViewKey {
        ViewKey::new(self.id.clone(), product)
    }

    /// Persist the commerce session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn save(&self) -> Result<(), AppError> {
        self.session
            .insert(session_keys::COMMERCE, &self.commerce)
            .await?;
        Ok(())
    }

    /// Issue a fresh session ID, keeping the data.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn cycle_id(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        Ok(())
    }

    /// Forget the backend tokens and issue a fresh session ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn reset(&mut self) -> Result<(), AppError> {
        self.commerce.clear();
        self.session
            .remove::<CommerceSession>(session_keys::COMMERCE)
            .await?;
        self.session.cycle_id().await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for Shopper
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        let id = if let Some(id) = session.get::<String>(session_keys::SHOPPER_ID).await? {
            id
        } else {
            let id = Uuid::new_v4().to_string();
            session.insert(session_keys::SHOPPER_ID, &id).await?;
            id
        };

        let commerce = session
            .get::<CommerceSession>(session_keys::COMMERCE)
            .await?
            .unwrap_or_default();

        Ok(Self {
            session,
            id,
            commerce,
        })
    }
}
