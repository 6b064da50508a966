//! # Response Envelopes
//!
//! Every List/Detail response carries a `success` flag. Successful bodies
//! carry their payload next to it; failed bodies carry an `error` message.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::NetworkRecord;

/// Successful List response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub success: bool,
    pub networks: Vec<NetworkRecord>,
    #[serde(with = "crate::timestamp")]
    pub scan_time: DateTime<Utc>,
    pub total_networks: usize,
}

impl ScanResponse {
    pub fn new(networks: Vec<NetworkRecord>, scan_time: DateTime<Utc>) -> Self {
        Self {
            success: true,
            total_networks: networks.len(),
            networks,
            scan_time,
        }
    }
}

/// Successful Detail response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDetailsResponse {
    pub success: bool,
    pub network: NetworkRecord,
}

impl NetworkDetailsResponse {
    pub fn new(network: NetworkRecord) -> Self {
        Self {
            success: true,
            network,
        }
    }
}

/// Failed List/Detail response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

impl FailureResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Liveness check body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(with = "crate::timestamp")]
    pub timestamp: DateTime<Utc>,
    /// Seconds since the service started.
    pub uptime: f64,
}

/// Why an envelope could not be turned into its payload.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The service answered with `success: false`.
    #[error("service reported failure: {}", .0.as_deref().unwrap_or("<no message>"))]
    Failure(Option<String>),
    /// The body was not a recognizable envelope.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode a response body into its success payload.
///
/// The `success` flag decides the branch, so a failure body is reported as
/// [`EnvelopeError::Failure`] regardless of the HTTP status it arrived with.
pub fn decode_envelope<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, EnvelopeError> {
    let success = body
        .get("success")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false);

    if !success {
        let message = body
            .get("error")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);
        return Err(EnvelopeError::Failure(message));
    }

    Ok(serde_json::from_value(body)?)
}
