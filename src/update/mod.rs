mod actions;
mod editing;
mod helpers;
mod viewing;

use crate::action::Action;
use crate::app::{App, AppState};
use crate::command::Command;

/// Commands to run when the dashboard opens
pub fn init(app: &mut App) -> Vec<Command> {
    let mut commands = vec![helpers::refresh_public_config(app)];
    commands.extend(helpers::load_settings(app));
    commands
}

pub fn update(app: &mut App, action: Action) -> Vec<Command> {
    match action {
        Action::Input { code, modifiers } => match app.state {
            AppState::Viewing => viewing::handle_input(app, code, modifiers),
            AppState::Editing(_) => editing::handle_input(app, code, modifiers),
        },
        Action::PublicConfigLoaded { generation, result } => {
            actions::handle_public_config_loaded(app, generation, result)
        }
        Action::SettingsLoaded { generation, result } => {
            actions::handle_settings_loaded(app, generation, result)
        }
        Action::SettingsSaved(result) => actions::handle_settings_saved(app, result),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::command::execute_command;
    use crate::command::tests::{FakeBackend, public_config};
    use crate::domain::budget::Budget;
    use crate::domain::error::ApiError;
    use crate::domain::types::{WebhookField, WebhookSettings};
    use crate::notify::Level;

    fn app(has_api_key: bool) -> App {
        App::new(Budget::new(80.0, 42.0), has_api_key)
    }

    fn backend_with(json: serde_json::Value) -> FakeBackend {
        let backend = FakeBackend::default();
        *backend.settings_json.lock().unwrap() = Some(json);
        backend
    }

    /// Run commands one at a time, feeding results back, until none remain.
    async fn drain(app: &mut App, backend: &FakeBackend, mut pending: Vec<Command>) {
        while !pending.is_empty() {
            let command = pending.remove(0);
            if let Some(action) = execute_command(command, backend).await {
                pending.extend(update(app, action));
            }
        }
    }

    fn key(app: &mut App, code: KeyCode) -> Vec<Command> {
        update(
            app,
            Action::Input {
                code,
                modifiers: KeyModifiers::NONE,
            },
        )
    }

    fn count(app: &App, level: Level) -> usize {
        app.notifications.iter().filter(|n| n.level == level).count()
    }

    fn scenario_json() -> serde_json::Value {
        serde_json::json!({
            "settings": { "webhook_content_generated_url": { "value": "https://a" } },
            "environment_fallbacks": {
                "webhook_content_generated_url": "https://b",
                "webhook_daily_report_url": "https://c"
            }
        })
    }

    #[tokio::test]
    async fn missing_key_skips_request_and_warns_once() {
        let backend = FakeBackend::default();
        let mut app = app(false);

        let commands = init(&mut app);
        drain(&mut app, &backend, commands).await;
        let commands = key(&mut app, KeyCode::Char('R'));
        assert!(commands.is_empty());

        assert_eq!(backend.settings_calls.load(Ordering::SeqCst), 0);
        assert_eq!(app.webhooks.working, WebhookSettings::default());
        assert_eq!(count(&app, Level::Warning), 1);
        assert_eq!(app.notifications[0].message, helpers::MISSING_KEY_WARNING);
    }

    #[tokio::test]
    async fn init_loads_public_config_and_settings() {
        let backend = backend_with(scenario_json());
        let mut app = app(true);

        let commands = init(&mut app);
        assert!(app.public_config.loading);
        assert!(app.webhooks.loading_settings);
        drain(&mut app, &backend, commands).await;

        assert_eq!(app.public_config.data, Some(public_config()));
        assert!(!app.public_config.loading);
        assert!(!app.webhooks.loading_settings);
        assert_eq!(
            app.webhooks.working,
            WebhookSettings {
                webhook_content_generated_url: "https://a".to_string(),
                webhook_content_published_url: String::new(),
                webhook_daily_report_url: "https://c".to_string(),
            }
        );
        assert!(app.notifications.is_empty());
    }

    #[tokio::test]
    async fn failed_load_notifies_and_keeps_defaults() {
        let backend = FakeBackend::default();
        let mut app = app(true);

        let commands = init(&mut app);
        drain(&mut app, &backend, commands).await;

        assert_eq!(app.webhooks.working, WebhookSettings::default());
        assert!(!app.webhooks.loading_settings);
        assert_eq!(count(&app, Level::Error), 1);
        assert_eq!(app.notifications[0].message, "Failed to load webhook settings");
    }

    #[tokio::test]
    async fn rejected_save_keeps_values_and_clears_flag() {
        let mut backend = backend_with(scenario_json());
        backend.save_status = Some(503);
        let mut app = app(true);

        let commands = init(&mut app);
        drain(&mut app, &backend, commands).await;
        let loaded = app.webhooks.working.clone();

        let commands = key(&mut app, KeyCode::Char('s'));
        assert!(app.webhooks.is_saving);
        drain(&mut app, &backend, commands).await;

        assert!(!app.webhooks.is_saving);
        assert_eq!(app.webhooks.working, loaded);
        assert_eq!(count(&app, Level::Error), 1);
        assert_eq!(backend.settings_calls.load(Ordering::SeqCst), 1);
        assert_eq!(backend.public_config_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn network_failure_on_save_keeps_values() {
        let backend = backend_with(scenario_json());
        let mut app = app(true);

        let commands = init(&mut app);
        drain(&mut app, &backend, commands).await;
        let loaded = app.webhooks.working.clone();

        let commands = key(&mut app, KeyCode::Char('s'));
        assert_eq!(commands.len(), 1);

        // Nothing listens on this port any more.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = reqwest::Client::new()
            .post(format!("http://{}/api/v1/system/settings", addr))
            .send()
            .await
            .unwrap_err();

        let follow_up = update(&mut app, Action::SettingsSaved(Err(ApiError::from(err))));

        assert!(follow_up.is_empty());
        assert!(!app.webhooks.is_saving);
        assert_eq!(app.webhooks.working, loaded);
        assert_eq!(count(&app, Level::Error), 1);
        assert_eq!(app.notifications[0].message, "Failed to save webhook settings");
    }

    #[tokio::test]
    async fn save_before_first_load_lands_is_ignored() {
        let backend = backend_with(serde_json::json!({
            "settings": { "webhook_content_generated_url": { "value": "https://existing" } },
            "environment_fallbacks": {}
        }));
        let mut app = app(true);

        let pending = init(&mut app);
        assert!(app.webhooks.loading_settings);

        assert!(key(&mut app, KeyCode::Char('s')).is_empty());
        let ctrl_s = update(
            &mut app,
            Action::Input {
                code: KeyCode::Char('s'),
                modifiers: KeyModifiers::CONTROL,
            },
        );
        assert!(ctrl_s.is_empty());
        assert!(!app.webhooks.is_saving);
        assert!(app.notifications.is_empty());

        drain(&mut app, &backend, pending).await;
        assert!(backend.saved.lock().unwrap().is_empty());
        assert_eq!(
            app.webhooks.working.webhook_content_generated_url,
            "https://existing"
        );

        // Once loaded, saving sends the server's values back unchanged.
        let commands = key(&mut app, KeyCode::Char('s'));
        drain(&mut app, &backend, commands).await;
        assert_eq!(
            backend.saved.lock().unwrap()[0].webhook_content_generated_url,
            "https://existing"
        );
    }

    #[tokio::test]
    async fn successful_save_refreshes_then_reloads() {
        let backend = backend_with(scenario_json());
        let mut app = app(true);

        let commands = init(&mut app);
        drain(&mut app, &backend, commands).await;

        // Edit the published URL by hand.
        key(&mut app, KeyCode::Down);
        key(&mut app, KeyCode::Enter);
        for c in "https://p".chars() {
            key(&mut app, KeyCode::Char(c));
        }
        key(&mut app, KeyCode::Esc);
        assert_eq!(app.webhooks.working.webhook_content_published_url, "https://p");

        // The server stores something slightly different from what was sent.
        *backend.settings_json.lock().unwrap() = Some(serde_json::json!({
            "settings": {
                "webhook_content_generated_url": { "value": "https://a" },
                "webhook_content_published_url": { "value": "https://p/confirmed" }
            },
            "environment_fallbacks": {}
        }));

        let commands = key(&mut app, KeyCode::Char('s'));
        assert!(matches!(commands.as_slice(), [Command::SaveSettings { .. }]));

        let action = execute_command(commands.into_iter().next().unwrap(), &backend)
            .await
            .unwrap();
        let follow_up = update(&mut app, action);
        assert!(matches!(
            follow_up.as_slice(),
            [Command::FetchPublicConfig { .. }, Command::FetchSettings { .. }]
        ));
        assert_eq!(count(&app, Level::Success), 1);

        drain(&mut app, &backend, follow_up).await;

        assert_eq!(
            backend.saved.lock().unwrap()[0].webhook_content_published_url,
            "https://p"
        );
        assert_eq!(backend.public_config_calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            app.webhooks.working.webhook_content_published_url,
            "https://p/confirmed"
        );
        assert_eq!(app.webhooks.working.webhook_daily_report_url, "");
        assert!(!app.webhooks.is_saving);
    }

    #[tokio::test]
    async fn save_without_key_fails_immediately() {
        let mut app = app(false);
        let commands = key(&mut app, KeyCode::Char('s'));

        assert!(commands.is_empty());
        assert!(!app.webhooks.is_saving);
        assert_eq!(count(&app, Level::Error), 1);
    }

    #[test]
    fn second_save_while_in_flight_is_ignored() {
        let mut app = app(true);
        assert_eq!(key(&mut app, KeyCode::Char('s')).len(), 1);
        assert!(key(&mut app, KeyCode::Char('s')).is_empty());
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn stale_settings_load_is_ignored() {
        let mut app = app(true);
        let first = init(&mut app);
        let second = key(&mut app, KeyCode::Char('R'));

        let generation_of = |commands: &[Command]| {
            commands.iter().find_map(|c| match c {
                Command::FetchSettings { generation } => Some(*generation),
                _ => None,
            })
        };
        let older = generation_of(&first).unwrap();
        let newer = generation_of(&second).unwrap();

        let newer_env = serde_json::from_value(scenario_json()).unwrap();
        update(
            &mut app,
            Action::SettingsLoaded {
                generation: newer,
                result: Ok(newer_env),
            },
        );
        update(
            &mut app,
            Action::SettingsLoaded {
                generation: older,
                result: Ok(Default::default()),
            },
        );

        assert_eq!(app.webhooks.working.webhook_content_generated_url, "https://a");
    }

    #[test]
    fn refresh_supersedes_in_flight_public_config() {
        let mut app = app(true);
        let first = key(&mut app, KeyCode::Char('r'));
        let second = key(&mut app, KeyCode::Char('r'));

        let (
            Command::FetchPublicConfig {
                cancel: c1,
                generation: g1,
            },
            Command::FetchPublicConfig { generation: g2, .. },
        ) = (&first[0], &second[0])
        else {
            panic!("expected public config fetches");
        };
        assert!(c1.is_cancelled());

        update(
            &mut app,
            Action::PublicConfigLoaded {
                generation: *g2,
                result: Ok(public_config()),
            },
        );
        update(
            &mut app,
            Action::PublicConfigLoaded {
                generation: *g1,
                result: Err(ApiError::Decode("late".to_string())),
            },
        );

        assert_eq!(app.public_config.data, Some(public_config()));
        assert!(app.public_config.error.is_none());
    }

    #[test]
    fn ctrl_s_while_editing_saves() {
        let mut app = app(true);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Editing(WebhookField::ContentGenerated));

        let commands = update(
            &mut app,
            Action::Input {
                code: KeyCode::Char('s'),
                modifiers: KeyModifiers::CONTROL,
            },
        );
        assert_eq!(app.state, AppState::Viewing);
        assert!(matches!(commands.as_slice(), [Command::SaveSettings { .. }]));
    }

    #[test]
    fn quit_keys() {
        let mut app = app(true);
        key(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
