use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Progress marker for a request that has not answered yet
pub fn loading_line(message: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("⏳ ", Style::default().fg(Color::Yellow)),
        Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Fill a panel whose content is still being fetched
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let body = Paragraph::new(vec![Line::from(""), loading_line(message)])
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}
