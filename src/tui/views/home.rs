//! Home view
//!
//! The screen behind the dialog: a title, where transactions are sent and
//! how to open the dialog.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

/// Render the title bar
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();

    let title = Line::from(vec![
        Span::styled(
            " dt-money ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(theme.muted)),
        Span::styled(
            app.settings.api.base_url.as_str(),
            Style::default().fg(theme.muted),
        ),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.muted)),
    );
    frame.render_widget(header, area);
}

/// Render the main area
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let key = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("n", key),
            Span::raw(" to register a new transaction"),
        ]),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("q", key),
            Span::raw(" to quit"),
        ]),
    ];

    let body = Paragraph::new(lines)
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(body, area);
}
