//! Synthetic network catalog and scan generation.
//!
//! Each scan returns every catalog entry with its signal perturbed by a small
//! uniform jitter and its last-seen time set to the scan instant.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared_types::NetworkRecord;
use std::sync::atomic::{AtomicU64, Ordering};

/// Jitter bound applied to each base signal, in dBm, both directions.
pub const JITTER_DBM: i32 = 5;

/// Immutable description of one simulated network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub ssid: &'static str,
    pub mac: &'static str,
    pub base_rssi: i32,
    pub channel: u32,
    pub frequency: u32,
    pub encryption: &'static str,
    pub vendor: &'static str,
}

/// The fixed set of simulated networks, in generation order.
pub const CATALOG: [CatalogEntry; 8] = [
    CatalogEntry {
        ssid: "HomeNetwork_5G",
        mac: "AA:BB:CC:DD:EE:FF",
        base_rssi: -45,
        channel: 36,
        frequency: 5180,
        encryption: "WPA3",
        vendor: "Netgear",
    },
    CatalogEntry {
        ssid: "CoffeeShop_WiFi",
        mac: "11:22:33:44:55:66",
        base_rssi: -72,
        channel: 6,
        frequency: 2437,
        encryption: "WPA2",
        vendor: "Cisco",
    },
    CatalogEntry {
        ssid: "Office_Network",
        mac: "77:88:99:AA:BB:CC",
        base_rssi: -38,
        channel: 149,
        frequency: 5745,
        encryption: "WPA2-Enterprise",
        vendor: "Ubiquiti",
    },
    CatalogEntry {
        ssid: "AndroidAP_1234",
        mac: "DD:EE:FF:00:11:22",
        base_rssi: -85,
        channel: 11,
        frequency: 2462,
        encryption: "WPA2",
        vendor: "Samsung",
    },
    CatalogEntry {
        ssid: "SmartHome_IoT",
        mac: "33:44:55:66:77:88",
        base_rssi: -55,
        channel: 44,
        frequency: 5220,
        encryption: "WPA3",
        vendor: "TP-Link",
    },
    CatalogEntry {
        ssid: "Guest_Network",
        mac: "99:AA:BB:CC:DD:EE",
        base_rssi: -68,
        channel: 1,
        frequency: 2412,
        encryption: "Open",
        vendor: "Linksys",
    },
    CatalogEntry {
        ssid: "Enterprise_Secure",
        mac: "FF:00:11:22:33:44",
        base_rssi: -42,
        channel: 157,
        frequency: 5785,
        encryption: "WPA3-Enterprise",
        vendor: "Aruba",
    },
    CatalogEntry {
        ssid: "Neighbor_WiFi",
        mac: "55:66:77:88:99:AA",
        base_rssi: -78,
        channel: 3,
        frequency: 2422,
        encryption: "WPA2",
        vendor: "D-Link",
    },
];

impl CatalogEntry {
    /// Materialize the entry with a jittered signal. The identifier is
    /// returned unmasked.
    pub fn observe<R: Rng + ?Sized>(&self, rng: &mut R, now: DateTime<Utc>) -> NetworkRecord {
        NetworkRecord {
            ssid: self.ssid.to_string(),
            mac: self.mac.to_string(),
            rssi: self.base_rssi + rng.gen_range(-JITTER_DBM..=JITTER_DBM),
            channel: self.channel,
            frequency: self.frequency,
            encryption: self.encryption.to_string(),
            vendor: self.vendor.to_string(),
            last_seen: now,
            signal_quality: None,
            security_details: None,
        }
    }
}

/// Produce one scan: every catalog entry, in catalog order.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<NetworkRecord> {
    CATALOG.iter().map(|entry| entry.observe(rng, now)).collect()
}

/// Catalog entry with exactly this name. Case-sensitive.
pub fn find_entry(ssid: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.ssid == ssid)
}

/// Source of randomness for request handlers.
///
/// Each call hands out an independent generator so handlers never hold a
/// shared lock across an await point.
pub trait RngProvider: Send + Sync + 'static {
    fn rng(&self) -> StdRng;
}

/// OS-seeded generators.
#[derive(Debug, Default, Clone, Copy)]
pub struct EntropyRng;

impl RngProvider for EntropyRng {
    fn rng(&self) -> StdRng {
        StdRng::from_entropy()
    }
}

/// Deterministic generators derived from a base seed and a call counter.
#[derive(Debug)]
pub struct SeededRng {
    seed: u64,
    calls: AtomicU64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            calls: AtomicU64::new(0),
        }
    }
}

impl RngProvider for SeededRng {
    fn rng(&self) -> StdRng {
        let n = self.calls.fetch_add(1, Ordering::Relaxed);
        StdRng::seed_from_u64(self.seed.wrapping_add(n))
    }
}
