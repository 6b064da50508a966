//! Telemetry configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Where formatted log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    /// Appended to a file. Used by the terminal dashboard, which owns stdout.
    File(PathBuf),
}

/// Configuration for structured logging.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to the startup event
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full
    /// `EnvFilter` directive
    pub log_level: String,

    /// Whether to emit JSON lines instead of human-readable output
    pub json_logs: bool,

    /// Log destination
    pub output: LogOutput,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "wifi-sniffer".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            output: LogOutput::Stdout,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SNIFFER_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `SNIFFER_JSON_LOGS`: Enable JSON logs (default: false outside containers)
    pub fn from_env(service_name: &str) -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: service_name.to_string(),

            log_level: env::var("SNIFFER_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("SNIFFER_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(is_container),

            output: LogOutput::Stdout,
        }
    }

    /// Redirect output to a file.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = LogOutput::File(path.into());
        self
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}
