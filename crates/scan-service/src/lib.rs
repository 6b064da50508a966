//! Scan Service - simulated WiFi scan results over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    SCAN SERVICE                      │
//! ├──────────────────────────────────────────────────────┤
//! │  GET /api/scan   GET /api/details/:ssid   /api/health│
//! │          │                 │                   │     │
//! │  ┌───────┴─────────────────┴───────────────────┴──┐  │
//! │  │ Tracing → SecurityHeaders → CatchPanic → Cors  │  │
//! │  │                 → RateLimit                    │  │
//! │  └───────────────────────┬────────────────────────┘  │
//! │                          │                           │
//! │  ┌───────────────────────┴────────────────────────┐  │
//! │  │ ScanHandlers: delay → generate → mask          │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is stored between requests. Every call regenerates the fixed
//! catalog with fresh signal jitter and timestamps, and every hardware
//! identifier is masked before it leaves the service.
//!
//! # Usage
//!
//! ```ignore
//! use scan_service::{ScanService, ServiceConfig};
//!
//! let service = ScanService::new(ServiceConfig::from_env())?;
//! service.start().await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod api;
pub mod domain;
pub mod middleware;
pub mod service;

pub use domain::config::{RateLimitConfig, ScanDelayConfig, ServiceConfig};
pub use domain::error::{ServerError, ServiceError};
pub use domain::generator::{EntropyRng, RngProvider, SeededRng};
pub use service::ScanService;
