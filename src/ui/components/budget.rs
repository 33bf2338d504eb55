use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::domain::budget::{Budget, COST_BREAKDOWN, Severity, USAGE_TIPS};

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Normal => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Critical => Color::Red,
    }
}

/// Monthly budget gauge plus the cost breakdown and tips
pub fn render_budget(frame: &mut Frame, budget: &Budget, area: Rect) {
    let block = Block::default()
        .title(" Monthly Budget ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spend headline
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Percent / remaining
            Constraint::Min(0),    // Alert, breakdown, tips
        ])
        .split(inner);

    let percent = budget.usage_percent();
    let severity = budget.severity();
    let color = severity_color(severity);

    let headline = Line::from(vec![
        Span::styled(
            format!("${:.0}", budget.current_usage),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" of ${:.0}", budget.monthly_budget),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(headline), chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, chunks[1]);

    let usage = Line::from(vec![
        Span::styled(format!("{:.1}% used", percent), Style::default().fg(color)),
        Span::styled(" │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("${:.2} remaining", budget.remaining()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(usage), chunks[2]);

    let mut lines: Vec<Line> = Vec::new();

    if let (Some(headline), Some(message)) = (severity.headline(), severity.message()) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", headline),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(message, Style::default().fg(color))));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Cost Breakdown",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for item in COST_BREAKDOWN {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<20}", item.name), Style::default().fg(Color::White)),
            Span::styled(format!("${:>3}", item.cost), Style::default().fg(Color::White)),
            Span::styled(
                format!("  {:>3}% of total", item.percent),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Usage Tips",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for tip in USAGE_TIPS {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(Color::Cyan)),
            Span::styled(*tip, Style::default().fg(Color::DarkGray)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[3]);
}
