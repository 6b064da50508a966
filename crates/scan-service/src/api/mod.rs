//! Request handlers for the scan API.

pub mod handlers;

pub use handlers::{ScanHandlers, HEALTHY};
