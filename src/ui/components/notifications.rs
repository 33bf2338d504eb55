use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::notify::{Level, Notification};

/// Most recent toasts, newest last
pub fn render_notifications(frame: &mut Frame, notifications: &[Notification], area: Rect) {
    let visible = area.height as usize;
    let start = notifications.len().saturating_sub(visible);

    let lines: Vec<Line> = notifications[start..]
        .iter()
        .map(|n| {
            let (marker, color) = match n.level {
                Level::Success => ("✓", Color::Green),
                Level::Warning => ("⚠", Color::Yellow),
                Level::Error => ("✗", Color::Red),
            };
            Line::from(Span::styled(
                format!(" {} {}", marker, n.message),
                Style::default().fg(color),
            ))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
