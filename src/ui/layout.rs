use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

use super::components::{
    budget::render_budget, config_status::render_config_status, header::render_header,
    keybindings::render_keybindings, notifications::render_notifications,
    webhooks::render_webhooks,
};

/// Main render function
pub fn render(frame: &mut Frame, app: &App, api_base_url: &str) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Dashboard
            Constraint::Length(3), // Toasts
            Constraint::Length(2), // Keybindings bar
        ])
        .split(size);

    render_header(frame, api_base_url, chunks[0]);

    // Budget on the left, configuration and webhooks on the right
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_budget(frame, &app.budget, columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(14), Constraint::Min(8)])
        .split(columns[1]);

    render_config_status(frame, &app.public_config, right[0]);
    render_webhooks(frame, app, right[1]);

    render_notifications(frame, &app.notifications, chunks[2]);
    render_keybindings(frame, app, chunks[3]);
}
