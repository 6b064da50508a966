//! Scan service - HTTP routing, middleware assembly and server lifecycle.

use crate::api::ScanHandlers;
use crate::domain::config::ServiceConfig;
use crate::domain::error::{failure_response, messages, ServerError, ServiceError};
use crate::domain::generator::{EntropyRng, RngProvider};
use crate::middleware::{
    cleanup_task, create_cors_layer, RateLimitLayer, SecurityHeadersLayer, TracingLayer,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};
use std::any::Any;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info};

/// How often idle rate-limit buckets are swept.
const BUCKET_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Scan service state
pub struct ScanService {
    config: ServiceConfig,
    handlers: Arc<ScanHandlers>,
    rate_limit: RateLimitLayer,
}

impl ScanService {
    /// Create a service backed by OS entropy.
    pub fn new(config: ServiceConfig) -> Result<Self, ServerError> {
        Self::with_rng(config, Arc::new(EntropyRng))
    }

    /// Create a service with an explicit randomness source.
    pub fn with_rng(
        config: ServiceConfig,
        rng: Arc<dyn RngProvider>,
    ) -> Result<Self, ServerError> {
        config.validate()?;

        let handlers = Arc::new(ScanHandlers::new(rng, config.scan_delay.clone()));
        let rate_limit = RateLimitLayer::new(config.rate_limit.clone());

        Ok(Self {
            config,
            handlers,
            rate_limit,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Full router: API routes, not-found fallback and the middleware stack.
    pub fn router(&self) -> Router {
        let routes = Router::new()
            .route("/api/scan", get(scan))
            .route("/api/details/:ssid", get(details))
            .route("/api/health", get(health))
            .with_state(Arc::clone(&self.handlers));

        self.with_middleware(routes)
    }

    fn with_middleware(&self, routes: Router) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(TracingLayer::new())
            .layer(SecurityHeadersLayer::new())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(create_cors_layer(&self.config.cors))
            .layer(self.rate_limit.clone());

        routes.fallback(route_not_found).layer(middleware)
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr().map_err(ServerError::Bind)?;

        let cleanup = tokio::spawn(cleanup_task(
            self.rate_limit.state(),
            BUCKET_CLEANUP_INTERVAL,
            self.config.rate_limit.window(),
        ));

        info!(
            addr = %addr,
            health = %format!("http://localhost:{}/api/health", addr.port()),
            "Scan service listening"
        );

        let app = self
            .router()
            .into_make_service_with_connect_info::<SocketAddr>();
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve);

        cleanup.abort();
        info!("Scan service stopped");
        result
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr).await.map_err(ServerError::Bind)?;
        self.serve(listener, shutdown_signal()).await
    }
}

async fn scan(State(handlers): State<Arc<ScanHandlers>>) -> Result<Json<serde_json::Value>, ServiceError> {
    let response = handlers.list().await?;
    let body = serde_json::to_value(&response).map_err(ServiceError::scan_failed)?;
    Ok(Json(body))
}

async fn details(
    State(handlers): State<Arc<ScanHandlers>>,
    Path(ssid): Path<String>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let response = handlers.details(&ssid)?;
    let body = serde_json::to_value(&response).map_err(ServiceError::details_failed)?;
    Ok(Json(body))
}

async fn health(State(handlers): State<Arc<ScanHandlers>>) -> Json<shared_types::HealthResponse> {
    Json(handlers.health())
}

async fn route_not_found() -> Response {
    failure_response(StatusCode::NOT_FOUND, messages::ROUTE_NOT_FOUND)
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");
    error!(panic = %detail, "Handler panicked");
    failure_response(StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => {
            error!(error = %e, "Cannot listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
