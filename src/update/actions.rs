use crate::app::{App, AppState};
use crate::command::Command;
use crate::domain::error::ApiError;
use crate::domain::types::{PublicConfigResponse, SettingsEnvelope};
use crate::domain::webhooks::{LoadOutcome, SaveOutcome};
use crate::notify::Notification;

use super::helpers;

pub fn handle_public_config_loaded(
    app: &mut App,
    generation: u64,
    result: Result<PublicConfigResponse, ApiError>,
) -> Vec<Command> {
    if app.public_config.commit(generation, result) {
        tracing::debug!(generation, "public config updated");
    }
    Vec::new()
}

pub fn handle_settings_loaded(
    app: &mut App,
    generation: u64,
    result: Result<SettingsEnvelope, ApiError>,
) -> Vec<Command> {
    match app.webhooks.finish_load(generation, result) {
        LoadOutcome::Applied => {
            tracing::info!(generation, "webhook settings loaded");
            if let AppState::Editing(_) = app.state {
                app.clamp_cursor();
            }
        }
        LoadOutcome::Failed(err) => {
            tracing::error!(
                status = ?err.status(),
                error = %err,
                "failed to load webhook settings"
            );
            app.notify(Notification::error("Failed to load webhook settings"));
        }
        LoadOutcome::Stale => {}
    }
    Vec::new()
}

/// A successful save refreshes the public config (feature flags such as
/// `webhooks_configured` may have changed) and then reloads the settings.
pub fn handle_settings_saved(app: &mut App, result: Result<(), ApiError>) -> Vec<Command> {
    match app.webhooks.finish_save(result) {
        SaveOutcome::Saved => {
            tracing::info!("webhook settings saved");
            app.notify(Notification::success("Webhook settings saved successfully!"));

            let mut commands = vec![helpers::refresh_public_config(app)];
            commands.extend(helpers::load_settings(app));
            commands
        }
        SaveOutcome::Failed(err) => {
            tracing::error!(
                status = ?err.status(),
                error = %err,
                "failed to save webhook settings"
            );
            app.notify(Notification::error("Failed to save webhook settings"));
            Vec::new()
        }
    }
}
