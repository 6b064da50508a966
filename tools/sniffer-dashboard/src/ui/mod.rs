//! UI module - TUI rendering components.
//!
//! - `layout.rs`: Main layout orchestration
//! - `controls.rs`: Scan button, search box, sort and filter selectors
//! - `cards.rs`: One card per displayed network
//! - `widgets/`: Overlays drawn on top of the dashboard

mod cards;
mod controls;
mod layout;

pub mod widgets;

pub use layout::render;
