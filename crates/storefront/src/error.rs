//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::forms::FieldErrors;
use crate::woo::WooError;
use woo_storefront_core::catalog::SelectionError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// WooGraphQL call failed.
    #[error("WooCommerce error: {0}")]
    Woo(#[from] WooError),

    /// Session store failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// A selection that does not fit the product.
    #[error("Invalid selection: {0}")]
    Selection(#[from] SelectionError),

    /// Form fields failed validation.
    #[error("Invalid form: {0}")]
    Validation(FieldErrors),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Customer is not logged in.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Woo(err) => match err {
                WooError::NotFound(_) => StatusCode::NOT_FOUND,
                WooError::Unauthorized => StatusCode::UNAUTHORIZED,
                WooError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                WooError::UserError(_) | WooError::GraphQL(_) => StatusCode::UNPROCESSABLE_ENTITY,
                WooError::Http(_) | WooError::Status { .. } | WooError::Parse(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
            Self::Selection(_) | Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Whether this error is ours or the backend's rather than the caller's.
    const fn is_server_error(&self) -> bool {
        match self {
            Self::Session(_) | Self::Internal(_) => true,
            Self::Woo(err) => err.is_transport(),
            _ => false,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();

        // Don't expose internal error details to clients
        let body = match self {
            Self::Session(_) | Self::Internal(_) => json!({ "error": "Internal server error" }),
            Self::Woo(WooError::NotFound(what)) => json!({ "error": what }),
            Self::Woo(WooError::Unauthorized) | Self::Unauthorized(_) => {
                json!({ "error": "Please log in" })
            }
            Self::Woo(WooError::RateLimited(seconds)) => json!({
                "error": "Too many requests, please try again shortly",
                "retry_after": seconds,
            }),
            Self::Woo(err) => match err.backend_message() {
                Some(message) => json!({ "error": message }),
                None => json!({ "error": "External service error" }),
            },
            Self::Validation(errors) => json!({
                "error": "Please correct the highlighted fields",
                "fields": errors,
            }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context after login.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context on logout.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for a shopper action.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added to cart", Some(&[("product_id", "123")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
