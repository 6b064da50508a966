//! CSV and JSON export of the displayed list.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_types::{timestamp, NetworkRecord};
use thiserror::Error;
use tracing::info;

pub const CSV_HEADERS: [&str; 8] = [
    "SSID",
    "MAC Address",
    "Signal (dBm)",
    "Channel",
    "Frequency (MHz)",
    "Encryption",
    "Vendor",
    "Last Seen",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// JSON export document.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument<'a> {
    #[serde(with = "timestamp")]
    scan_time: DateTime<Utc>,
    total_networks: usize,
    networks: &'a [NetworkRecord],
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Header line plus one row per record, `\n`-joined, no trailing newline.
pub fn to_csv(networks: &[NetworkRecord]) -> String {
    let mut lines = Vec::with_capacity(networks.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    lines.extend(networks.iter().map(|n| {
        [
            quote(&n.ssid),
            quote(&n.mac),
            n.rssi.to_string(),
            n.channel.to_string(),
            n.frequency.to_string(),
            quote(&n.encryption),
            quote(&n.vendor),
            quote(&timestamp::format(&n.last_seen)),
        ]
        .join(",")
    }));
    lines.join("\n")
}

/// Pretty-printed `{scanTime, totalNetworks, networks}`; `scanTime` is the
/// export instant.
pub fn to_json(networks: &[NetworkRecord], exported_at: DateTime<Utc>) -> Result<String, ExportError> {
    let document = ExportDocument {
        scan_time: exported_at,
        total_networks: networks.len(),
        networks,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// `wifi-scan-YYYY-MM-DD.<ext>` for the UTC date of `now`.
pub fn file_name(format: ExportFormat, now: DateTime<Utc>) -> String {
    format!("wifi-scan-{}.{}", now.format("%Y-%m-%d"), format.extension())
}

/// Render `networks` and write them into `dir`, replacing any file of the same
/// name. Returns the written path.
pub fn write_export(
    dir: &Path,
    format: ExportFormat,
    networks: &[NetworkRecord],
    now: DateTime<Utc>,
) -> Result<PathBuf, ExportError> {
    let contents = match format {
        ExportFormat::Csv => to_csv(networks),
        ExportFormat::Json => to_json(networks, now)?,
    };

    let path = dir.join(file_name(format, now));
    std::fs::write(&path, contents).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), count = networks.len(), %format, "Export written");
    Ok(path)
}
