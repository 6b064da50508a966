//! Scanner client state.
//!
//! ```text
//!   Idle ──begin_scan──► Scanning ──complete_scan(Ok)──► Idle (list replaced)
//!                            └──────complete_scan(Err)─► Idle (list kept, error set)
//! ```
//!
//! Detail lookups never touch the list or the scanning flag; they only set the
//! error on failure.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared_types::{NetworkRecord, ScanResponse};
use tracing::{info, warn};

use crate::api::{ClientError, ScanApi};

pub const SCAN_FAILED: &str = "Failed to scan networks";
pub const SCAN_UNREACHABLE: &str = "Network error: Unable to connect to scanning service";
pub const DETAILS_FAILED: &str = "Failed to get network details";
pub const DETAILS_UNREACHABLE: &str = "Network error: Unable to get network details";

/// Where the scanner is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Scanning,
}

/// Result set and status flags shown by the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScannerState {
    pub networks: Vec<NetworkRecord>,
    pub scanning: bool,
    pub last_scan_time: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl ScannerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ScanPhase {
        if self.scanning {
            ScanPhase::Scanning
        } else {
            ScanPhase::Idle
        }
    }

    /// Enter the scanning phase and clear any previous error.
    pub fn begin_scan(&mut self) {
        self.scanning = true;
        self.error = None;
    }

    /// Apply the outcome of a List call. Always leaves the scanning phase.
    pub fn complete_scan(&mut self, result: Result<ScanResponse, ClientError>) {
        match result {
            Ok(response) => {
                info!(count = response.networks.len(), "Scan results received");
                self.networks = response.networks;
                self.last_scan_time = Some(response.scan_time);
            }
            Err(e) => {
                warn!(error = %e, "Scan failed");
                self.error = Some(e.user_message(SCAN_FAILED, SCAN_UNREACHABLE));
            }
        }
        self.scanning = false;
    }

    /// Apply the outcome of a Detail call, returning the record on success.
    pub fn complete_details(
        &mut self,
        result: Result<NetworkRecord, ClientError>,
    ) -> Option<NetworkRecord> {
        match result {
            Ok(network) => Some(network),
            Err(e) => {
                warn!(error = %e, "Detail lookup failed");
                self.error = Some(e.user_message(DETAILS_FAILED, DETAILS_UNREACHABLE));
                None
            }
        }
    }

    /// Dismiss the error banner.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// A [`ScannerState`] bundled with the API it drives.
pub struct Scanner {
    api: Arc<dyn ScanApi>,
    state: ScannerState,
}

impl Scanner {
    pub fn new(api: Arc<dyn ScanApi>) -> Self {
        Self {
            api,
            state: ScannerState::new(),
        }
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    pub fn clear_error(&mut self) {
        self.state.clear_error();
    }

    /// Run one scan to completion.
    pub async fn scan(&mut self) {
        self.state.begin_scan();
        let result = self.api.scan().await;
        self.state.complete_scan(result);
    }

    /// Fetch the augmented record for `ssid`.
    pub async fn details(&mut self, ssid: &str) -> Option<NetworkRecord> {
        let result = self.api.details(ssid).await;
        self.state.complete_details(result)
    }
}
