//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request tracing)
//! 3. `Cache-Control: no-store` on every response
//! 4. Session layer (tower-sessions with an in-memory store)

pub mod session;
pub mod shopper;

pub use session::create_session_layer;
pub use shopper::Shopper;
