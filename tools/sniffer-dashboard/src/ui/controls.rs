//! Control bar: scan button, search box, sort and filter selectors.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{App, AppState};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let scan_button = if app.scanner.scanning {
        Span::styled(" ⟳ Scanning... ", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            " ⟳ Scan Networks ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
    };

    let editing = app.state == AppState::Search;
    let search_text = if app.query.search.is_empty() && !editing {
        "Search networks...".to_string()
    } else if editing {
        format!("{}▏", app.query.search)
    } else {
        app.query.search.clone()
    };
    let search_style = if editing {
        Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
    } else if app.query.search.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let spans = vec![
        scan_button,
        Span::raw("   "),
        Span::styled("Search: ", Style::default().fg(Color::Gray)),
        Span::styled(search_text, search_style),
        Span::raw("   "),
        Span::styled("Sort by: ", Style::default().fg(Color::Gray)),
        Span::styled(app.query.sort_by.label(), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" {}", app.query.sort_order.arrow()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("   "),
        Span::styled("Filter: ", Style::default().fg(Color::Gray)),
        Span::styled(app.query.filter.label(), Style::default().fg(Color::Cyan)),
    ];

    let controls = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if editing {
                Color::Yellow
            } else {
                Color::DarkGray
            })),
    );

    frame.render_widget(controls, area);
}
