//! WooGraphQL client.
//!
//! # Architecture
//!
//! - Hand-declared `graphql_client` operations over the documents in
//!   `graphql/queries/`
//! - WooCommerce is the source of truth; nothing is synced locally
//! - Catalog reads are cached in memory via `moka` (5 minute TTL by default)
//! - Cart, account and checkout calls carry an explicit [`CommerceSession`]
//!   whose `woocommerce-session` token is refreshed from every response
//!
//! # Example
//!
//! ```rust,ignore
//! use woo_storefront::woo::{CommerceSession, WooClient};
//!
//! let client = WooClient::new(&config.woo);
//! let mut session = CommerceSession::default();
//!
//! let product = client.get_product_by_slug("ao-thun").await?;
//! let cart = client.get_cart(&mut session).await?;
//! ```

mod cache;
mod client;
mod conversions;
pub mod queries;
pub mod session;
pub mod types;

pub use client::WooClient;
pub use session::CommerceSession;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when talking to the WooGraphQL endpoint.
#[derive(Debug, Error)]
pub enum WooError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: u16,
        /// Leading part of the response body.
        body: String,
    },

    /// GraphQL response carried errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the backend.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// A mutation was refused with a message meant for the customer.
    #[error("User error: {0}")]
    UserError(String),

    /// The call needs a logged-in customer.
    #[error("Not logged in")]
    Unauthorized,
}

impl WooError {
    /// Whether the request never produced a usable answer from the backend.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Status { .. } | Self::Parse(_) | Self::RateLimited(_)
        )
    }

    /// The backend's own explanation, suitable for showing to the customer.
    ///
    /// WooGraphQL reports refused mutations (out of stock, invalid coupon,
    /// bad credentials) as GraphQL errors, so their messages pass through
    /// unchanged.
    #[must_use]
    pub fn backend_message(&self) -> Option<String> {
        match self {
            Self::UserError(message) => Some(message.clone()),
            Self::GraphQL(errors) => {
                let messages: Vec<&str> = errors
                    .iter()
                    .map(|e| e.message.trim())
                    .filter(|m| !m.is_empty())
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        }
    }
}

/// A GraphQL error returned by WooGraphQL.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

impl GraphQLError {
    /// An error with only a message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: vec![],
        }
    }
}

/// Location in a GraphQL document where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut parts = Vec::new();

            if !e.message.is_empty() {
                parts.push(e.message.clone());
            }

            if !e.path.is_empty() {
                let path_str = e
                    .path
                    .iter()
                    .map(|p| match p {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                parts.push(format!("path: {path_str}"));
            }

            if let Some(loc) = e.locations.first() {
                parts.push(format!("at line {}:{}", loc.line, loc.column));
            }

            if parts.is_empty() {
                format!("[error {}]: (no details)", i + 1)
            } else {
                parts.join(" ")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
