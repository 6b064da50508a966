//! # Sniffer Telemetry
//!
//! Structured logging for the scan service and the dashboard.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sniffer_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env("scan-service");
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SNIFFER_LOG_LEVEL` | `info` | Log level or `EnvFilter` directive |
//! | `RUST_LOG` | | Fallback for `SNIFFER_LOG_LEVEL` |
//! | `SNIFFER_JSON_LOGS` | `false` | JSON lines instead of human output |

mod config;
mod logging;

pub use config::{LogOutput, TelemetryConfig};
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install subscriber: {0}")]
    Init(String),

    #[error("Cannot open log output {path}: {reason}")]
    Output { path: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
