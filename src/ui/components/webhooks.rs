use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, AppState};
use crate::domain::types::WebhookField;

use super::loading::render_loading;

const PLACEHOLDER: &str = "https://hooks.zapier.com/hooks/catch/...";

/// Webhook edit form
pub fn render_webhooks(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Webhook Integration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.webhooks.loading_settings {
        render_loading(frame, inner, "Loading webhook settings...");
        return;
    }

    let mut lines: Vec<Line> = Vec::new();

    if !app.has_api_key {
        lines.push(Line::from(Span::styled(
            "⚠ No API key configured. Set SPLANTS_API_KEY to load and save webhooks.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    for field in WebhookField::ALL {
        lines.extend(field_lines(app, field));
        lines.push(Line::from(""));
    }

    let save = if app.webhooks.is_saving {
        Span::styled(" Saving... ", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            " [s] Save Webhook Settings ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(save));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Create a webhook trigger in Zapier, Make, or IFTTT, paste its URL above and save.",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn field_lines(app: &App, field: WebhookField) -> Vec<Line<'static>> {
    let selected = app.selected_field == field;
    let editing = app.state == AppState::Editing(field);
    let value = app.webhooks.working.get(field);

    let pointer = if selected { "▶ " } else { "  " };
    let label_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let header = Line::from(vec![
        Span::styled(pointer, Style::default().fg(Color::Cyan)),
        Span::styled(field.label(), label_style),
        Span::styled(
            format!("  ({})", field.hint()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let input = if editing {
        let split = value
            .char_indices()
            .nth(app.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(value.len());
        let (before, after) = value.split_at(split);
        Line::from(vec![
            Span::raw("  "),
            Span::styled(before.to_string(), Style::default().fg(Color::White)),
            Span::styled("│", Style::default().fg(Color::Yellow)),
            Span::styled(after.to_string(), Style::default().fg(Color::White)),
        ])
    } else if value.is_empty() {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(value.to_string(), Style::default().fg(Color::Green)),
        ])
    };

    vec![header, input]
}
