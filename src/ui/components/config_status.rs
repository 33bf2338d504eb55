use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::domain::public_config::PublicConfigStore;
use crate::domain::status::{feature_status, missing_configuration_alert};

use super::error::render_error;
use super::loading::{loading_line, render_loading};

/// Server configuration: missing secrets and feature flags
pub fn render_config_status(frame: &mut Frame, store: &PublicConfigStore, area: Rect) {
    let block = Block::default()
        .title(" Configuration Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(config) = &store.data else {
        if let Some(error) = &store.error {
            render_error(
                frame,
                inner,
                "Could not load server configuration",
                error,
                "r",
            );
        } else {
            render_loading(frame, inner, "Loading configuration...");
        }
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    if let Some(alert) = missing_configuration_alert(config) {
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", alert),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    for (feature, enabled) in feature_status(&config.features) {
        let (marker, color) = if enabled {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", marker), Style::default().fg(color)),
            Span::styled(
                feature.label,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                if enabled { "  enabled" } else { "  disabled" },
                Style::default().fg(color),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", feature.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    if store.loading {
        lines.push(Line::from(""));
        lines.push(loading_line("Refreshing..."));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
