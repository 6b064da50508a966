//! Middleware stack for the scan API.
//!
//! Layer order: Request → Tracing → SecurityHeaders → CatchPanic → Cors → RateLimit → Handler

pub mod cors;
pub mod rate_limit;
pub mod security_headers;
pub mod tracing;

pub use cors::create_cors_layer;
pub use rate_limit::{cleanup_task, RateLimitLayer, RateLimitState};
pub use security_headers::{SecurityHeadersLayer, SECURITY_HEADERS};
pub use tracing::TracingLayer;
