//! Per-customer backend session.
//!
//! WooGraphQL identifies a guest cart by the `woocommerce-session` token it
//! hands out in a response header; a logged-in customer additionally sends a
//! JWT `authToken`. Both live on a [`CommerceSession`] that callers pass to
//! every cart, account and checkout call.

use serde::{Deserialize, Serialize};

/// Response and request header carrying the cart session token.
pub const SESSION_HEADER: &str = "woocommerce-session";

/// Backend credentials for one shopper.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommerceSession {
    woo_session: Option<String>,
    auth_token: Option<String>,
}

impl CommerceSession {
    /// The cart session token, if the backend has issued one.
    #[must_use]
    pub fn woo_session(&self) -> Option<&str> {
        self.woo_session.as_deref()
    }

    /// Record a token from a response header. Blank tokens are ignored.
    ///
    /// Returns `true` if the stored token changed.
    pub fn update_woo_session(&mut self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() || self.woo_session.as_deref() == Some(token) {
            return false;
        }
        self.woo_session = Some(token.to_string());
        true
    }

    /// The customer's JWT, when logged in.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Store the JWT returned by `login`.
    pub fn set_auth_token(&mut self, token: impl Into<String>) {
        self.auth_token = Some(token.into());
    }

    /// Whether a customer is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Forget both tokens.
    pub fn clear(&mut self) {
        self.woo_session = None;
        self.auth_token = None;
    }

    /// Value for the `woocommerce-session` request header.
    #[must_use]
    pub fn session_header_value(&self) -> Option<String> {
        self.woo_session.as_ref().map(|t| format!("Session {t}"))
    }
}

impl std::fmt::Debug for CommerceSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommerceSession")
            .field("woo_session", &self.woo_session.as_ref().map(|_| "[REDACTED]"))
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_woo_session() {
        let mut session = CommerceSession::default();
        assert_eq!(session.session_header_value(), None);

        assert!(session.update_woo_session("tok-1"));
        assert!(!session.update_woo_session("tok-1"));
        assert!(!session.update_woo_session("  "));
        assert_eq!(session.session_header_value().as_deref(), Some("Session tok-1"));
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut session = CommerceSession::default();
        session.update_woo_session("tok");
        session.set_auth_token("jwt");
        assert!(session.is_authenticated());

        session.clear();
        assert_eq!(session, CommerceSession::default());
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let mut session = CommerceSession::default();
        session.update_woo_session("secret-session");
        session.set_auth_token("secret-jwt");
        let debug = format!("{session:?}");
        assert!(!debug.contains("secret-session"));
        assert!(!debug.contains("secret-jwt"));
        assert!(debug.contains("[REDACTED]"));
    }
}
