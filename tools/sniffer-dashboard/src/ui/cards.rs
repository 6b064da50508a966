//! Network cards.
//!
//! ```text
//! ▶ HomeNetwork_5G                 AA:BB:XX:XX:EE:FF     ■ WPA3
//!   Ch 36 (5GHz)   Just now   Netgear
//!   Signal: ▂▄▆█ -45 dBm (100%)
//! ```

use chrono::Utc;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use shared_types::{signal_bars, FrequencyBand, NetworkRecord, SignalLevel};

use crate::domain::display::{format_last_seen, found_label, Protection};
use crate::domain::{App, FilterBy};

const BAR_GLYPHS: [&str; 4] = ["▂", "▄", "▆", "█"];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if app.scanner.scanning {
        render_message(frame, area, "Scanning for WiFi networks...", None);
        return;
    }

    let displayed = app.displayed();
    if displayed.is_empty() {
        let hint = if app.query.search.is_empty() {
            "Press [S] to start scanning."
        } else {
            "Try adjusting your search criteria."
        };
        render_message(frame, area, "No networks found", Some(hint));
        return;
    }

    let now = Utc::now();
    let items: Vec<ListItem> = displayed
        .iter()
        .map(|network| ListItem::new(card_lines(network, now)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(summary(app, displayed.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Title line: count, active search and filter, sort description.
fn summary(app: &App, count: usize) -> String {
    let mut parts = vec![found_label(count)];
    if !app.query.search.is_empty() {
        parts.push(format!("Filtered by \"{}\"", app.query.search));
    }
    if app.query.filter != FilterBy::All {
        parts.push(format!("Showing {} networks", app.query.filter.name()));
    }
    parts.push(format!(
        "Sorted by {} ({})",
        app.query.sort_by.name(),
        app.query.sort_order.label()
    ));
    format!(" {} ", parts.join(" • "))
}

fn card_lines(network: &NetworkRecord, now: chrono::DateTime<Utc>) -> Vec<Line<'static>> {
    let (shield_color, shield) = match Protection::from_encryption(&network.encryption) {
        Protection::Open => (Color::Red, "✗"),
        Protection::Wpa3 => (Color::Green, "✓"),
        Protection::Other => (Color::Yellow, "■"),
    };

    let quality = network.quality();
    let level = SignalLevel::from_rssi(network.rssi);
    let filled = signal_bars(quality, BAR_GLYPHS.len() as u8) as usize;

    let mut signal = vec![Span::styled("  Signal: ", Style::default().fg(Color::Gray))];
    signal.extend(BAR_GLYPHS.iter().enumerate().map(|(i, glyph)| {
        if i < filled {
            Span::styled(*glyph, Style::default().fg(level_color(level)))
        } else {
            Span::styled(*glyph, Style::default().fg(Color::DarkGray))
        }
    }));
    signal.push(Span::raw(format!(" {} dBm ", network.rssi)));
    signal.push(Span::styled(
        format!("({}%)", quality),
        Style::default().fg(Color::Gray),
    ));

    vec![
        Line::from(vec![
            Span::styled(
                format!("{:<24}", network.ssid),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<20}", network.mac),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(format!("{} ", shield), Style::default().fg(shield_color)),
            Span::raw(network.encryption.clone()),
        ]),
        Line::from(vec![
            Span::raw(format!(
                "  Ch {} ({})",
                network.channel,
                FrequencyBand::from_frequency(network.frequency)
            )),
            Span::styled(
                format!("   {}", format_last_seen(network.last_seen, now)),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("   {}", network.vendor),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(signal),
    ]
}

fn level_color(level: SignalLevel) -> Color {
    match level {
        SignalLevel::Excellent => Color::Green,
        SignalLevel::Good => Color::Blue,
        SignalLevel::Fair => Color::Yellow,
        SignalLevel::Poor => Color::Red,
    }
}

fn render_message(frame: &mut Frame, area: Rect, title: &str, hint: Option<&str>) {
    let mut lines = vec![
        Line::raw(""),
        Line::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(hint) = hint {
        lines.push(Line::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}
