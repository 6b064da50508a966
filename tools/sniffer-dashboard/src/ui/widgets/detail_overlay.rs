//! Detail overlay for a single network, as returned by the Detail endpoint.

use chrono::Utc;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use shared_types::{timestamp, FrequencyBand, NetworkRecord, SignalLevel};

use super::centered_rect;
use crate::domain::display::format_last_seen;

fn row(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<15}", label), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

pub(crate) fn detail_lines(network: &NetworkRecord) -> Vec<Line<'static>> {
    let quality = network.quality();
    let level = SignalLevel::from_rssi(network.rssi);

    let mut lines = vec![
        Line::from(Span::styled(
            network.ssid.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        row("MAC", network.mac.clone()),
        row(
            "Signal",
            format!("{} dBm ({}%, {})", network.rssi, quality, level.label()),
        ),
        row(
            "Channel",
            format!(
                "{} ({})",
                network.channel,
                FrequencyBand::from_frequency(network.frequency)
            ),
        ),
        row("Frequency", format!("{} MHz", network.frequency)),
        row("Vendor", network.vendor.clone()),
        row(
            "Last seen",
            format!(
                "{} ({})",
                format_last_seen(network.last_seen, Utc::now()),
                timestamp::format(&network.last_seen)
            ),
        ),
        Line::raw(""),
        Line::from(Span::styled(
            "Security",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    match &network.security_details {
        Some(security) => {
            lines.push(row("Encryption", security.encryption.clone()));
            lines.push(row("Authenticated", yes_no(security.authenticated)));
            lines.push(row(
                "WPS",
                format!("{} (simulated)", yes_no(security.wps_enabled)),
            ));
        }
        None => lines.push(row("Encryption", network.encryption.clone())),
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

/// Render a centered overlay with everything known about `network`.
pub fn render_detail_overlay(frame: &mut Frame, network: &NetworkRecord) {
    let popup_area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(detail_lines(network))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Network Details ")
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

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::SecurityDetails;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn network() -> NetworkRecord {
        NetworkRecord {
            ssid: "CoffeeShop_Guest".to_string(),
            mac: "00:1A:XX:XX:4D:5E".to_string(),
            rssi: -65,
            channel: 6,
            frequency: 2437,
            encryption: "Open".to_string(),
            vendor: "Cisco".to_string(),
            last_seen: Utc::now(),
            signal_quality: None,
            security_details: None,
        }
    }

    #[test]
    fn test_augmented_record_shows_security() {
        let mut network = network();
        network.signal_quality = Some(70);
        network.security_details = Some(SecurityDetails {
            encryption: "Open".to_string(),
            authenticated: false,
            wps_enabled: true,
        });

        let rendered = text(&detail_lines(&network));
        assert!(rendered.contains("-65 dBm (70%, fair)"));
        assert!(rendered.contains("6 (2.4GHz)"));
        assert!(rendered.contains("Authenticated  No"));
        assert!(rendered.contains("Yes (simulated)"));
    }

    #[test]
    fn test_plain_record_falls_back_to_derived_quality() {
        let rendered = text(&detail_lines(&network()));
        assert!(rendered.contains("-65 dBm (70%, fair)"));
        assert!(!rendered.contains("WPS"));
    }
}
