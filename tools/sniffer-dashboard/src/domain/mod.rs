//! Domain models for the dashboard.

mod app;
pub mod display;
pub mod export;
pub mod pipeline;
pub mod scanner;

pub use app::{Action, App, AppState};
pub use export::{ExportError, ExportFormat};
pub use pipeline::{FilterBy, SortBy, SortOrder, ViewQuery};
pub use scanner::{ScanPhase, Scanner, ScannerState};
