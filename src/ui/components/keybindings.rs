use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, AppState};

/// Render the keybindings bar at the bottom
pub fn render_keybindings(frame: &mut Frame, app: &App, area: Rect) {
    let keys: Vec<(&str, &str)> = match &app.state {
        AppState::Viewing => {
            let mut keys = vec![("j/k", "Field")];
            if app.can_edit() {
                keys.push(("Enter", "Edit"));
                if !app.webhooks.is_saving {
                    keys.push(("s", "Save"));
                }
            }
            keys.extend([("r", "Refresh status"), ("R", "Reload webhooks"), ("q", "Quit")]);
            keys
        }
        AppState::Editing(field) => vec![
            ("Editing", field.label()),
            ("Type", "Edit URL"),
            ("Ctrl+U", "Clear"),
            ("Ctrl+S", "Save"),
            ("Esc", "Done"),
        ],
    };

    // Build the line with key highlights
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(paragraph, area);
}
