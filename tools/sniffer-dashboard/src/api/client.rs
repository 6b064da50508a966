//! HTTP client for the scan service.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use shared_types::{
    decode_envelope, EnvelopeError, NetworkDetailsResponse, NetworkRecord, ScanResponse,
};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when talking to the scan service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with `success: false`.
    #[error("service error: {}", .0.as_deref().unwrap_or("<no message>"))]
    Service(Option<String>),
    /// The body was not a recognizable envelope.
    #[error("failed to parse response: {0}")]
    Parse(String),
    /// The configured base URL cannot carry path segments.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<EnvelopeError> for ClientError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Failure(message) => ClientError::Service(message),
            EnvelopeError::Malformed(e) => ClientError::Parse(e.to_string()),
        }
    }
}

impl ClientError {
    /// Text shown to the user. Service failures surface the server's message
    /// (or `fallback` when it sent none); anything else reads as `unreachable`.
    pub fn user_message(&self, fallback: &str, unreachable: &str) -> String {
        match self {
            ClientError::Service(Some(message)) => message.clone(),
            ClientError::Service(None) => fallback.to_string(),
            ClientError::Transport(_) | ClientError::Parse(_) | ClientError::InvalidEndpoint(_) => {
                unreachable.to_string()
            }
        }
    }
}

/// The two calls the dashboard makes against the scan service.
#[async_trait]
pub trait ScanApi: Send + Sync {
    /// List: the full scan result.
    async fn scan(&self) -> Result<ScanResponse, ClientError>;

    /// Detail: one network with its quality and security descriptor.
    async fn details(&self, ssid: &str) -> Result<NetworkRecord, ClientError>;
}

/// Scan API client.
pub struct ScanApiClient {
    client: Client,
    base_url: Url,
}

impl ScanApiClient {
    /// Create a client for a base URL such as `http://localhost:3001/api`.
    ///
    /// No timeout is configured; a hung service leaves the call pending.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidEndpoint(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidEndpoint(base_url.to_string()));
        }

        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    /// Base URL with `segments` appended, each percent-encoded as a single
    /// path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        Ok(decode_envelope(body)?)
    }
}

#[async_trait]
impl ScanApi for ScanApiClient {
    async fn scan(&self) -> Result<ScanResponse, ClientError> {
        let url = self.endpoint(&["scan"])?;
        self.get(url).await
    }

    async fn details(&self, ssid: &str) -> Result<NetworkRecord, ClientError> {
        let url = self.endpoint(&["details", ssid])?;
        let response: NetworkDetailsResponse = self.get(url).await?;
        Ok(response.network)
    }
}
