use crate::app::App;
use crate::command::Command;
use crate::domain::error::ApiError;
use crate::domain::webhooks::{LoadStart, SaveStart};
use crate::notify::Notification;

pub const MISSING_KEY_WARNING: &str =
    "No API key configured. Set SPLANTS_API_KEY to load webhook settings.";

pub fn refresh_public_config(app: &mut App) -> Command {
    let ticket = app.public_config.refresh();
    Command::FetchPublicConfig {
        generation: ticket.generation,
        cancel: ticket.cancel,
    }
}

pub fn load_settings(app: &mut App) -> Vec<Command> {
    match app.webhooks.begin_load(app.has_api_key) {
        LoadStart::Issue(generation) => vec![Command::FetchSettings { generation }],
        LoadStart::MissingKey { warn } => {
            if warn {
                tracing::warn!(
                    error = %ApiError::ConfigurationMissing,
                    "webhook settings not loaded"
                );
                app.notify(Notification::warning(MISSING_KEY_WARNING));
            }
            Vec::new()
        }
    }
}

pub fn save_settings(app: &mut App) -> Vec<Command> {
    match app.webhooks.begin_save(app.has_api_key) {
        SaveStart::Issue(settings) => {
            tracing::info!("saving webhook settings");
            vec![Command::SaveSettings { settings }]
        }
        SaveStart::InFlight => Vec::new(),
        SaveStart::Loading => {
            tracing::debug!("save ignored while webhook settings are loading");
            Vec::new()
        }
        SaveStart::MissingKey => {
            let err = ApiError::ConfigurationMissing;
            tracing::warn!(error = %err, "webhook settings not saved");
            app.notify(Notification::error(format!(
                "Failed to save webhook settings: {}",
                err
            )));
            Vec::new()
        }
    }
}
