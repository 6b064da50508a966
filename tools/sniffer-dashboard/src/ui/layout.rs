//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  WIFI SNIFFER   8 Networks   Last Scan: 2024-05-01 12:00:01     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  [Scan]  Search: ____   Sort: Signal Strength ↓  Filter: All    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ⚠ error banner (only when set)                                 │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Found N networks • Sorted by rssi (descending)                 │
//! │  cards...                                                       │
//! └─────────────────────────────────────────────────────────────────┘
//! │  [S] Scan  [/] Search  [O] Sort  [D] Direction  [F] Filter ...  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::display::format_scan_time;
use crate::domain::{App, AppState};

use super::{cards, controls, widgets};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();
    let has_banner = app.scanner.error.is_some() || app.notice.is_some();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                // Header
            Constraint::Length(3),                                // Controls
            Constraint::Length(if has_banner { 3 } else { 0 }),   // Banner
            Constraint::Min(6),                                   // Cards
            Constraint::Length(3),                                // Footer (keybinds)
        ])
        .split(size);

    render_header(frame, main_chunks[0], app);
    controls::render(frame, main_chunks[1], app);
    if has_banner {
        render_banner(frame, main_chunks[2], app);
    }
    cards::render(frame, main_chunks[3], app);
    render_footer(frame, main_chunks[4]);

    match app.state {
        AppState::Help => widgets::render_help_overlay(frame),
        AppState::Detail => {
            if let Some(network) = &app.detail {
                widgets::render_detail_overlay(frame, network);
            }
        }
        _ => {}
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled(
            " WIFI SNIFFER ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} Networks ", app.scanner.networks.len()),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!("  Last Scan: {} ", format_scan_time(app.scanner.last_scan_time)),
            Style::default().fg(Color::Blue),
        ),
        Span::styled(
            format!("  {} ", app.endpoint),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

/// Error takes precedence over the export notice.
fn render_banner(frame: &mut Frame, area: Rect, app: &App) {
    let (text, color) = match (&app.scanner.error, &app.notice) {
        (Some(error), _) => (format!(" ⚠ {} ", error), Color::Red),
        (None, Some(notice)) => (format!(" {} ", notice), Color::Green),
        (None, None) => return,
    };

    let banner = Paragraph::new(Line::from(vec![
        Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled("[X] dismiss", Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(banner, area);
}

/// Render the footer with keyboard shortcuts.
fn render_footer(frame: &mut Frame, area: Rect) {
    let keybinds = [
        ("[S]", " Scan  "),
        ("[/]", " Search  "),
        ("[O]", " Sort  "),
        ("[D]", " Direction  "),
        ("[F]", " Filter  "),
        ("[↑↓]", " Select  "),
        ("[Enter]", " Details  "),
        ("[C/J]", " Export  "),
        ("[?]", " Help  "),
        ("[Q]", " Quit"),
    ]
    .into_iter()
    .flat_map(|(key, label)| {
        [
            Span::styled(key, Style::default().fg(Color::Yellow)),
            Span::raw(label),
        ]
    })
    .collect::<Vec<_>>();

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
