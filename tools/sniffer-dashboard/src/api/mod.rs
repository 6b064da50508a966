//! API client module for the scan service's List and Detail endpoints.

mod client;

pub use client::{ClientError, ScanApi, ScanApiClient};
