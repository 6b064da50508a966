//! CORS for the browser-era clients of the scan API.

use crate::domain::config::CorsConfig;
use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Create the CORS layer. Any method and header is allowed; `*` in
/// `allowed_origins` allows any origin.
pub fn create_cors_layer(config: &CorsConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    cors.allow_origin(origins)
}
