//! Application state management.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shared_types::NetworkRecord;

use super::export::{write_export, ExportFormat};
use super::pipeline::ViewQuery;
use super::scanner::ScannerState;

/// Application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Main dashboard view.
    #[default]
    Dashboard,
    /// Typing into the search box.
    Search,
    /// Help overlay.
    Help,
    /// Detail overlay for one network.
    Detail,
    /// Quitting.
    Quit,
}

/// Work the event loop must start after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Call List. The scanner is already in its scanning phase.
    Scan,
    /// Call Detail for this name.
    FetchDetails(String),
}

/// Main application model.
pub struct App {
    /// Current application state/view.
    pub state: AppState,
    /// Result set and status flags.
    pub scanner: ScannerState,
    /// Filter, search and sort settings.
    pub query: ViewQuery,
    /// Index into the displayed list.
    pub selected: usize,
    /// Record shown in the detail overlay.
    pub detail: Option<NetworkRecord>,
    /// Outcome of the last export.
    pub notice: Option<String>,
    /// Where exports are written.
    pub export_dir: PathBuf,
    /// Scan service base URL, shown in the header.
    pub endpoint: String,
}

impl App {
    pub fn new(export_dir: impl Into<PathBuf>, endpoint: impl Into<String>) -> Self {
        Self {
            state: AppState::Dashboard,
            scanner: ScannerState::new(),
            query: ViewQuery::default(),
            selected: 0,
            detail: None,
            notice: None,
            export_dir: export_dir.into(),
            endpoint: endpoint.into(),
        }
    }

    /// The list as currently filtered, searched and sorted.
    pub fn displayed(&self) -> Vec<NetworkRecord> {
        self.query.apply(&self.scanner.networks)
    }

    pub fn selected_network(&self) -> Option<NetworkRecord> {
        self.displayed().into_iter().nth(self.selected)
    }

    /// Start a scan unless one is already running.
    pub fn request_scan(&mut self) -> Action {
        if self.scanner.scanning {
            return Action::None;
        }
        self.scanner.begin_scan();
        Action::Scan
    }

    /// Handle keyboard input.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.state = AppState::Quit;
            return Action::None;
        }

        match self.state {
            AppState::Dashboard => self.handle_dashboard_key(key.code),
            AppState::Search => {
                self.handle_search_key(key.code);
                Action::None
            }
            AppState::Help => {
                // Any key closes help
                self.state = AppState::Dashboard;
                Action::None
            }
            AppState::Detail => {
                self.close_details();
                Action::None
            }
            AppState::Quit => Action::None,
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.state = AppState::Quit;
            }
            KeyCode::Char('?') => self.state = AppState::Help,
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('r') | KeyCode::Char('R') => {
                return self.request_scan();
            }
            KeyCode::Char('/') => self.state = AppState::Search,
            KeyCode::Char('f') | KeyCode::Char('F') => {
                self.query.filter = self.query.filter.next();
                self.clamp_selection();
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                self.query.sort_by = self.query.sort_by.next();
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                self.query.sort_order = self.query.sort_order.toggle();
            }
            KeyCode::Char('c') | KeyCode::Char('C') => self.export(ExportFormat::Csv, Utc::now()),
            KeyCode::Char('j') | KeyCode::Char('J') => self.export(ExportFormat::Json, Utc::now()),
            KeyCode::Char('x') | KeyCode::Char('X') => {
                self.scanner.clear_error();
                self.notice = None;
            }
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(),
            KeyCode::Enter => {
                if let Some(network) = self.selected_network() {
                    return Action::FetchDetails(network.ssid);
                }
            }
            _ => {}
        }
        Action::None
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                self.query.search.push(c);
                self.selected = 0;
            }
            KeyCode::Backspace => {
                self.query.search.pop();
                self.selected = 0;
            }
            KeyCode::Enter | KeyCode::Esc => self.state = AppState::Dashboard,
            _ => {}
        }
    }

    /// Move selection up.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let len = self.displayed().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.displayed().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Open the detail overlay.
    pub fn show_details(&mut self, network: NetworkRecord) {
        self.detail = Some(network);
        self.state = AppState::Detail;
    }

    pub fn close_details(&mut self) {
        self.detail = None;
        self.state = AppState::Dashboard;
    }

    /// Write the displayed list to the export directory.
    pub fn export(&mut self, format: ExportFormat, now: DateTime<Utc>) {
        let displayed = self.displayed();
        self.notice = Some(match write_export(&self.export_dir, format, &displayed, now) {
            Ok(path) => format!(
                "Exported {} networks as {} to {}",
                displayed.len(),
                format,
                path.display()
            ),
            Err(e) => format!("Export failed: {}", e),
        });
    }

    /// Keep the selection inside the list after it was replaced.
    pub fn on_scan_applied(&mut self) {
        self.clamp_selection();
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quit
    }
}
