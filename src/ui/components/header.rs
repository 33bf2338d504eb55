use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the fixed header with the backend address
pub fn render_header(frame: &mut Frame, api_base_url: &str, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Budget & Settings",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
            Span::styled(api_base_url.to_string(), Style::default().fg(Color::White)),
        ]),
        Line::from(vec![Span::styled(
            "Monitor costs and manage your configuration",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}
