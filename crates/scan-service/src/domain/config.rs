//! Service configuration with validation.
//!
//! Every field has a default; the only environment override is `PORT`.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Artificial List latency
    pub scan_delay: ScanDelayConfig,
    /// Rate limiting configuration
    pub rate_limit: RateLimitConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl ServiceConfig {
    /// Defaults, with the listen port taken from `PORT` when it parses.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(port) = std::env::var("PORT").ok().and_then(|v| v.parse().ok()) {
            config.http.port = port;
        }
        config
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rate_limit.max_requests == 0 {
            return Err(ConfigError::InvalidRateLimit(
                "max_requests cannot be 0".into(),
            ));
        }

        if self.rate_limit.window_secs == 0 {
            return Err(ConfigError::InvalidRateLimit(
                "window_secs cannot be 0".into(),
            ));
        }

        if self.scan_delay.min_ms > self.scan_delay.max_ms {
            return Err(ConfigError::InvalidScanDelay {
                min_ms: self.scan_delay.min_ms,
                max_ms: self.scan_delay.max_ms,
            });
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 3001)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 3001,
        }
    }
}

/// Bounds of the uniformly distributed List delay, inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanDelayConfig {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for ScanDelayConfig {
    fn default() -> Self {
        Self {
            min_ms: 1000,
            max_ms: 3000,
        }
    }
}

impl ScanDelayConfig {
    /// No delay at all. Used by tests and local tooling.
    pub fn none() -> Self {
        Self { min_ms: 0, max_ms: 0 }
    }
}

/// Per-IP rate limiting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    pub enabled: bool,
    /// Requests allowed per window per IP
    pub max_requests: u32,
    /// Window length in seconds
    pub window_secs: u64,
    /// Honour X-Forwarded-For / X-Real-IP when identifying the client
    pub trust_proxy_headers: bool,
    /// IPs exempt from rate limiting
    pub whitelist: Vec<IpAddr>,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: 100,
            window_secs: 15 * 60,
            trust_proxy_headers: false,
            whitelist: Vec::new(),
        }
    }
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins, `*` for any
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid rate limit: {0}")]
    InvalidRateLimit(String),
    #[error("invalid scan delay: min {min_ms}ms exceeds max {max_ms}ms")]
    InvalidScanDelay { min_ms: u64, max_ms: u64 },
}
