use crossterm::event::{KeyCode, KeyModifiers};

use crate::app::App;
use crate::command::Command;

use super::helpers;

pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Vec<Command> {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
            app.should_quit = true;
            Vec::new()
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.should_quit = true;
            Vec::new()
        }
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) | (KeyCode::Tab, _) => {
            app.next_field();
            Vec::new()
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) | (KeyCode::BackTab, _) => {
            app.prev_field();
            Vec::new()
        }
        (KeyCode::Enter, _) | (KeyCode::Char('e'), KeyModifiers::NONE) => {
            app.start_editing();
            Vec::new()
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) | (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            helpers::save_settings(app)
        }
        (KeyCode::Char('r'), KeyModifiers::NONE) => vec![helpers::refresh_public_config(app)],
        (KeyCode::Char('R'), _) => helpers::load_settings(app),
        _ => Vec::new(),
    }
}
