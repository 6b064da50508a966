//! Domain layer: configuration, errors, the synthetic catalog and masking.

pub mod config;
pub mod error;
pub mod generator;
pub mod masking;

pub use config::{ConfigError, CorsConfig, HttpConfig, RateLimitConfig, ScanDelayConfig, ServiceConfig};
pub use error::{ServerError, ServiceError};
pub use generator::{EntropyRng, RngProvider, SeededRng, CATALOG, JITTER_DBM};
pub use masking::{mask_mac, mask_record};
