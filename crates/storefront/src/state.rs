//! Application state shared across handlers.

use std::sync::Arc;

use crate::cart::CartComposer;
use crate::config::StorefrontConfig;
use crate::woo::{WooClient, WooError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    woo: WooClient,
    composer: CartComposer<WooClient>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the WooGraphQL client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, WooError> {
        let woo = WooClient::new(&config.woo)?;
        let composer = CartComposer::new(woo.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                woo,
                composer,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the WooGraphQL client.
    #[must_use]
    pub fn woo(&self) -> &WooClient {
        &self.inner.woo
    }

    /// Get a reference to the add-to-cart composer.
    #[must_use]
    pub fn composer(&self) -> &CartComposer<WooClient> {
        &self.inner.composer
    }
}
