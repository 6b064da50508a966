//! Scan service binary.
//!
//! Listens on `0.0.0.0:$PORT` (default 3001) until Ctrl-C.

use anyhow::{Context, Result};
use scan_service::{ScanService, ServiceConfig};
use sniffer_telemetry::{init_logging, TelemetryConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(&TelemetryConfig::from_env("scan-service"))
        .context("failed to initialize logging")?;

    let config = ServiceConfig::from_env();
    info!(
        port = config.http.port,
        rate_limit = config.rate_limit.max_requests,
        window_secs = config.rate_limit.window_secs,
        "Starting scan service"
    );

    let service = ScanService::new(config).context("invalid service configuration")?;
    service.start().await.context("scan service failed")?;

    Ok(())
}
