use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// A panel whose request failed: what failed, the server's reason, and the
/// key that retries it.
pub fn render_error(frame: &mut Frame, area: Rect, what: &str, reason: &str, retry_key: &str) {
    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("✗ {}", what),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(reason.to_string(), Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                retry_key.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
        ]),
    ])
    .wrap(Wrap { trim: false });

    frame.render_widget(body, area);
}
