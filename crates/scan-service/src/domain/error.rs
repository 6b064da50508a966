//! Service error types and their HTTP mapping.
//!
//! Not-found is an explicit outcome with its own status. Everything else that
//! goes wrong while answering a request collapses into a generic failure
//! message; the underlying reason is logged, never sent.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared_types::FailureResponse;
use tracing::error;

use crate::domain::config::ConfigError;

/// Client-facing messages.
pub mod messages {
    pub const NETWORK_NOT_FOUND: &str = "Network not found";
    pub const SCAN_FAILED: &str = "Failed to scan networks";
    pub const DETAILS_FAILED: &str = "Failed to get network details";
    pub const INTERNAL: &str = "Internal server error";
    pub const ROUTE_NOT_FOUND: &str = "Not found";
    pub const RATE_LIMITED: &str = "Too many requests, please try again later.";
}

/// Outcome of a failed List/Detail operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Detail lookup for a name absent from the catalog
    #[error("network not found: {ssid}")]
    NotFound { ssid: String },

    /// Unexpected fault; `message` is what the client sees
    #[error("{message}: {reason}")]
    Internal {
        message: &'static str,
        reason: String,
    },
}

impl ServiceError {
    pub fn not_found(ssid: impl Into<String>) -> Self {
        Self::NotFound { ssid: ssid.into() }
    }

    /// List failed.
    pub fn scan_failed(reason: impl ToString) -> Self {
        Self::Internal {
            message: messages::SCAN_FAILED,
            reason: reason.to_string(),
        }
    }

    /// Detail failed for a reason other than not-found.
    pub fn details_failed(reason: impl ToString) -> Self {
        Self::Internal {
            message: messages::DETAILS_FAILED,
            reason: reason.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the failure envelope.
    pub fn public_message(&self) -> &'static str {
        match self {
            ServiceError::NotFound { .. } => messages::NETWORK_NOT_FOUND,
            ServiceError::Internal { message, .. } => message,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::Internal { message, reason } = &self {
            error!(reason = %reason, "{}", message);
        }
        failure_response(self.status(), self.public_message())
    }
}

/// Build a `{success:false, error}` response.
pub fn failure_response(status: StatusCode, message: &str) -> Response {
    (status, Json(FailureResponse::new(message))).into_response()
}

/// Errors raised while starting or running the server
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(std::io::Error),

    /// The accept loop failed
    #[error("server error: {0}")]
    Serve(std::io::Error),
}
