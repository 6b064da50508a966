//! # Domain Entities
//!
//! The network record and the pieces attached to it on detail lookups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Encryption label of an unprotected network.
pub const OPEN_ENCRYPTION: &str = "Open";

/// Token substituted for redacted identifier octets.
pub const MASK_TOKEN: &str = "XX";

/// One synthetic observation of a wireless network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
    /// Network name.
    pub ssid: String,
    /// Hardware identifier, colon-separated hex octets.
    pub mac: String,
    /// Signal strength in dBm.
    pub rssi: i32,
    pub channel: u32,
    /// Center frequency in MHz.
    pub frequency: u32,
    pub encryption: String,
    pub vendor: String,
    #[serde(with = "crate::timestamp")]
    pub last_seen: DateTime<Utc>,
    /// Only present on detail lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_quality: Option<u8>,
    /// Only present on detail lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_details: Option<SecurityDetails>,
}

impl NetworkRecord {
    /// Whether the network requires authentication.
    pub fn is_secured(&self) -> bool {
        self.encryption != OPEN_ENCRYPTION
    }

    /// Signal quality derived from `rssi`, whether or not the record carries
    /// the detail-only field.
    pub fn quality(&self) -> u8 {
        self.signal_quality
            .unwrap_or_else(|| crate::signal::signal_quality(self.rssi))
    }
}

/// Security descriptor attached on detail lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityDetails {
    /// Echo of the record's encryption label.
    pub encryption: String,
    /// `true` unless the label is `"Open"`.
    pub authenticated: bool,
    /// Random coin flip. Not meaningful.
    pub wps_enabled: bool,
}
