//! # Shared Types Crate
//!
//! Entities and response envelopes exchanged between the scan service and the
//! dashboard.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the JSON shape of a network record is defined
//!   once, here, and both sides of the HTTP boundary (de)serialize through it.
//! - **Masked at the boundary**: records in this crate carry whatever
//!   identifier they were built with; the service masks before serializing.
//! - **Stable wire names**: camelCase field names (`lastSeen`,
//!   `signalQuality`, ...) match the published HTTP interface.

pub mod entities;
pub mod responses;
pub mod signal;
pub mod timestamp;

pub use entities::*;
pub use responses::*;
pub use signal::*;
