//! Help overlay widget.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

const KEYS: &[(&str, &str)] = &[
    ("  S / R   ", "Scan for networks"),
    ("  /       ", "Edit search (Enter or Esc to finish)"),
    ("  F       ", "Cycle filter: all, secure, open, WPA2, WPA3"),
    ("  O       ", "Cycle sort key: signal, name, channel, encryption"),
    ("  D       ", "Toggle sort direction"),
    ("  ↑/↓     ", "Select a network"),
    ("  Enter   ", "Show network details"),
];

const EXPORT_KEYS: &[(&str, &str)] = &[
    ("  C       ", "Export displayed networks as CSV"),
    ("  J       ", "Export displayed networks as JSON"),
    ("  X       ", "Dismiss error or export message"),
    ("  Q / Esc ", "Quit"),
    ("  ?       ", "Toggle this help"),
];

fn section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    lines.extend(keys.iter().map(|(key, description)| {
        Line::from(vec![
            Span::styled(*key, Style::default().fg(Color::Yellow)),
            Span::raw(*description),
        ])
    }));
    lines.push(Line::raw(""));
    lines
}

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, popup_area);

    let mut help_text = vec![
        Line::from(Span::styled(
            "WIFI SNIFFER HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    help_text.extend(section("Browsing", KEYS));
    help_text.extend(section("Actions", EXPORT_KEYS));
    help_text.push(Line::from(Span::styled(
        "MAC addresses are partially masked by the scan service.",
        Style::default().fg(Color::DarkGray),
    )));
    help_text.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}
