use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::App;
use crate::command::Command;

use super::helpers;

pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    match code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
            app.stop_editing();
            Vec::new()
        }
        KeyCode::Backspace => {
            app.delete_char();
            Vec::new()
        }
        KeyCode::Left => {
            app.cursor_left();
            Vec::new()
        }
        KeyCode::Right => {
            app.cursor_right();
            Vec::new()
        }
        KeyCode::Home => {
            app.cursor_home();
            Vec::new()
        }
        KeyCode::End => {
            app.cursor_end();
            Vec::new()
        }
        KeyCode::Char('s') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.stop_editing();
            helpers::save_settings(app)
        }
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_field();
            Vec::new()
        }
        KeyCode::Char(_) if modifiers.contains(KeyModifiers::CONTROL) => Vec::new(),
        KeyCode::Char(c) => {
            app.insert_char(c);
            Vec::new()
        }
        _ => Vec::new(),
    }
}
