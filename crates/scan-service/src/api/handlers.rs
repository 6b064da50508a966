//! List, Detail and Health operations.
//!
//! Handlers are plain methods on [`ScanHandlers`] so they can be called
//! without going through HTTP; the axum glue lives in `service.rs`.

use crate::domain::config::ScanDelayConfig;
use crate::domain::error::ServiceError;
use crate::domain::generator::{self, RngProvider};
use crate::domain::masking::mask_record;
use chrono::Utc;
use rand::Rng;
use shared_types::{
    signal_quality, HealthResponse, NetworkDetailsResponse, NetworkRecord, ScanResponse,
    SecurityDetails,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Value of `status` in every health response.
pub const HEALTHY: &str = "healthy";

/// Scan API operations
pub struct ScanHandlers {
    rng: Arc<dyn RngProvider>,
    scan_delay: ScanDelayConfig,
    started_at: Instant,
}

impl ScanHandlers {
    pub fn new(rng: Arc<dyn RngProvider>, scan_delay: ScanDelayConfig) -> Self {
        Self {
            rng,
            scan_delay,
            started_at: Instant::now(),
        }
    }

    /// Simulate a scan: wait out the artificial delay, then return the whole
    /// catalog with masked identifiers.
    pub async fn list(&self) -> Result<ScanResponse, ServiceError> {
        let mut rng = self.rng.rng();
        let delay_ms = rng.gen_range(self.scan_delay.min_ms..=self.scan_delay.max_ms);
        debug!(delay_ms, "Simulating scan");

        tokio::time::sleep(Duration::from_millis(delay_ms)).await;

        let scan_time = Utc::now();
        let networks: Vec<NetworkRecord> = generator::generate(&mut rng, scan_time)
            .into_iter()
            .map(mask_record)
            .collect();

        info!(count = networks.len(), delay_ms, "Scan completed");
        Ok(ScanResponse::new(networks, scan_time))
    }

    /// Look up one network by exact name and attach its quality and security
    /// descriptor.
    pub fn details(&self, ssid: &str) -> Result<NetworkDetailsResponse, ServiceError> {
        let entry = generator::find_entry(ssid).ok_or_else(|| ServiceError::not_found(ssid))?;
        let mut rng = self.rng.rng();
        let network = mask_record(entry.observe(&mut rng, Utc::now()));

        debug!(ssid = %ssid, "Network details resolved");
        Ok(NetworkDetailsResponse::new(augment(network, rng.gen_bool(0.5))))
    }

    /// Liveness check. Never fails.
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: HEALTHY.to_string(),
            timestamp: Utc::now(),
            uptime: self.started_at.elapsed().as_secs_f64(),
        }
    }
}

/// Attach detail-only fields. `wps_enabled` is whatever the caller rolled.
fn augment(mut network: NetworkRecord, wps_enabled: bool) -> NetworkRecord {
    network.signal_quality = Some(signal_quality(network.rssi));
    network.security_details = Some(SecurityDetails {
        encryption: network.encryption.clone(),
        authenticated: network.is_secured(),
        wps_enabled,
    });
    network
}
