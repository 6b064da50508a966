//! # WiFi Sniffer Test Suite
//!
//! Cross-crate tests that run a real scan service on a loopback port and
//! drive it through the dashboard's client, scanner and export code.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Service ⇄ dashboard flows
//!     └── end_to_end.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sniffer-tests
//! ```

pub mod integration;
