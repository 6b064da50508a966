//! WiFi Sniffer Dashboard
//!
//! A TUI for browsing simulated WiFi scan results served by the scan service.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  WIFI SNIFFER   8 Networks   Last Scan: 2024-05-01 12:00:01     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  [Scan]  Search  Sort  Filter                                   │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Found 8 networks • Sorted by rssi (descending)                 │
//! │  ▶ HomeNetwork_5G       AA:BB:XX:XX:EE:FF   ✓ WPA3              │
//! │    Ch 36 (5GHz)   Just now   Netgear                            │
//! │    Signal: ▂▄▆█ -45 dBm (100%)                                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - `api`: HTTP client for List and Detail
//! - `domain`: scanner state, presentation pipeline, export, key handling
//! - `ui`: rendering only, reads an [`App`] and never mutates it

pub mod api;
pub mod domain;
pub mod ui;

pub use api::{ClientError, ScanApi, ScanApiClient};
pub use domain::{Action, App, AppState, ExportFormat, FilterBy, SortBy, SortOrder, ViewQuery};
