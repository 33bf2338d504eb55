use std::time::Instant;

use crate::domain::budget::Budget;
use crate::domain::public_config::PublicConfigStore;
use crate::domain::types::WebhookField;
use crate::domain::webhooks::WebhookSync;
use crate::notify::Notification;

/// Application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Browsing the dashboard
    Viewing,
    /// Editing one webhook URL
    Editing(WebhookField),
}

/// The main application
pub struct App {
    /// Current state
    pub state: AppState,
    /// Budget figures
    pub budget: Budget,
    /// Public server configuration
    pub public_config: PublicConfigStore,
    /// Webhook working copy and its sync state
    pub webhooks: WebhookSync,
    /// Whether a client API key was configured at startup
    pub has_api_key: bool,
    /// Webhook field under the cursor
    pub selected_field: WebhookField,
    /// Cursor position (in chars) in the field being edited
    pub cursor_pos: usize,
    /// Active toasts, oldest first
    pub notifications: Vec<Notification>,
    /// Should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(budget: Budget, has_api_key: bool) -> Self {
        Self {
            state: AppState::Viewing,
            budget,
            public_config: PublicConfigStore::new(),
            webhooks: WebhookSync::new(),
            has_api_key,
            selected_field: WebhookField::ContentGenerated,
            cursor_pos: 0,
            notifications: Vec::new(),
            should_quit: false,
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop toasts that have been on screen long enough
    pub fn prune_notifications(&mut self, now: Instant) {
        self.notifications.retain(|n| !n.is_expired(now));
    }

    pub fn next_field(&mut self) {
        self.selected_field = self.selected_field.next();
    }

    pub fn prev_field(&mut self) {
        self.selected_field = self.selected_field.prev();
    }

    /// The form is hidden while settings are loading
    pub fn can_edit(&self) -> bool {
        !self.webhooks.loading_settings
    }

    /// Enter edit mode for the selected field
    pub fn start_editing(&mut self) {
        if !self.can_edit() {
            return;
        }
        self.cursor_pos = self.current_text().chars().count();
        self.state = AppState::Editing(self.selected_field);
    }

    /// Exit edit mode
    pub fn stop_editing(&mut self) {
        self.state = AppState::Viewing;
    }

    pub fn current_text(&self) -> &str {
        self.webhooks.working.get(self.selected_field)
    }

    fn byte_offset(text: &str, char_pos: usize) -> usize {
        text.char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    }

    /// Insert character at cursor
    pub fn insert_char(&mut self, c: char) {
        let field = self.selected_field;
        let text = self.webhooks.working.get_mut(field);
        let at = Self::byte_offset(text, self.cursor_pos);
        text.insert(at, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let field = self.selected_field;
        let text = self.webhooks.working.get_mut(field);
        let at = Self::byte_offset(text, self.cursor_pos - 1);
        if at < text.len() {
            text.remove(at);
            self.cursor_pos -= 1;
        }
    }

    /// Clear the field being edited
    pub fn clear_field(&mut self) {
        let field = self.selected_field;
        self.webhooks.working.get_mut(field).clear();
        self.cursor_pos = 0;
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.current_text().chars().count() {
            self.cursor_pos += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.current_text().chars().count();
    }

    /// Keep the cursor inside the text after it was replaced by a load
    pub fn clamp_cursor(&mut self) {
        let len = self.current_text().chars().count();
        self.cursor_pos = self.cursor_pos.min(len);
    }
}
