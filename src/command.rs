use tokio_util::sync::CancellationToken;

use crate::action::Action;
use crate::domain::api::Backend;
use crate::domain::types::WebhookSettings;

pub enum Command {
    FetchPublicConfig {
        generation: u64,
        cancel: CancellationToken,
    },
    FetchSettings {
        generation: u64,
    },
    SaveSettings {
        settings: WebhookSettings,
    },
}

/// Run a command against the backend. `None` means there is nothing to report,
/// which only happens when a request was cancelled.
pub async fn execute_command(command: Command, backend: &dyn Backend) -> Option<Action> {
    match command {
        Command::FetchPublicConfig { generation, cancel } => {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(generation, "public config fetch cancelled");
                    None
                }
                result = backend.fetch_public_config() => {
                    Some(Action::PublicConfigLoaded { generation, result })
                }
            }
        }
        Command::FetchSettings { generation } => {
            let result = backend.fetch_settings().await;
            Some(Action::SettingsLoaded { generation, result })
        }
        Command::SaveSettings { settings } => {
            let result = backend.save_settings(&settings).await;
            Some(Action::SettingsSaved(result))
        }
    }
}
