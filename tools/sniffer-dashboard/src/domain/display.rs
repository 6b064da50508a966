//! Display formatting for cards and the header.

use chrono::{DateTime, Local, Utc};
use shared_types::OPEN_ENCRYPTION;

/// Relative age of an observation: `Just now`, `Xm ago` or `Xh ago`.
pub fn format_last_seen(last_seen: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - last_seen).num_seconds();
    if secs < 60 {
        "Just now".to_string()
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else {
        format!("{}h ago", secs / 3600)
    }
}

/// Last successful scan in local time, or `Never`.
pub fn format_scan_time(scan_time: Option<DateTime<Utc>>) -> String {
    match scan_time {
        Some(time) => time
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "Never".to_string(),
    }
}

/// Coarse protection class, used to pick the shield color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protection {
    Open,
    Wpa3,
    Other,
}

impl Protection {
    pub fn from_encryption(encryption: &str) -> Self {
        if encryption == OPEN_ENCRYPTION {
            Protection::Open
        } else if encryption.contains("WPA3") {
            Protection::Wpa3
        } else {
            Protection::Other
        }
    }
}

/// `Found N network(s)`.
pub fn found_label(count: usize) -> String {
    format!("Found {} network{}", count, if count == 1 { "" } else { "s" })
}
