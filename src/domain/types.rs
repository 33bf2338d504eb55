use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response from `GET /v1/config/public`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicConfigResponse {
    pub api_key_configured: bool,
    pub openai_configured: bool,
    pub features: FeatureFlags,
}

/// Optional backend subsystems and whether they are active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    pub redis_enabled: bool,
    pub anthropic_enabled: bool,
    pub webhooks_configured: bool,
    pub budget_enforced: bool,
    pub daily_limit_enforced: bool,
}

/// The three webhook endpoints, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebhookField {
    ContentGenerated,
    ContentPublished,
    DailyReport,
}

impl WebhookField {
    pub const ALL: [WebhookField; 3] = [
        WebhookField::ContentGenerated,
        WebhookField::ContentPublished,
        WebhookField::DailyReport,
    ];

    /// Key used by the backend for this setting
    pub fn key(&self) -> &'static str {
        match self {
            WebhookField::ContentGenerated => "webhook_content_generated_url",
            WebhookField::ContentPublished => "webhook_content_published_url",
            WebhookField::DailyReport => "webhook_daily_report_url",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WebhookField::ContentGenerated => "Content Generated Webhook",
            WebhookField::ContentPublished => "Content Published Webhook",
            WebhookField::DailyReport => "Daily Report Webhook",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            WebhookField::ContentGenerated => "Triggered when new content is created",
            WebhookField::ContentPublished => "Triggered when content is published to a platform",
            WebhookField::DailyReport => "Triggered once per day with usage summary",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            WebhookField::ContentGenerated => WebhookField::ContentPublished,
            WebhookField::ContentPublished => WebhookField::DailyReport,
            WebhookField::DailyReport => WebhookField::ContentGenerated,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            WebhookField::ContentGenerated => WebhookField::DailyReport,
            WebhookField::ContentPublished => WebhookField::ContentGenerated,
            WebhookField::DailyReport => WebhookField::ContentPublished,
        }
    }
}

/// Webhook URLs; an empty string means the webhook is unset.
/// Serializes to the body expected by `POST /v1/system/settings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSettings {
    pub webhook_content_generated_url: String,
    pub webhook_content_published_url: String,
    pub webhook_daily_report_url: String,
}

impl WebhookSettings {
    pub fn get(&self, field: WebhookField) -> &str {
        match field {
            WebhookField::ContentGenerated => &self.webhook_content_generated_url,
            WebhookField::ContentPublished => &self.webhook_content_published_url,
            WebhookField::DailyReport => &self.webhook_daily_report_url,
        }
    }

    pub fn get_mut(&mut self, field: WebhookField) -> &mut String {
        match field {
            WebhookField::ContentGenerated => &mut self.webhook_content_generated_url,
            WebhookField::ContentPublished => &mut self.webhook_content_published_url,
            WebhookField::DailyReport => &mut self.webhook_daily_report_url,
        }
    }
}

/// Response from `GET /v1/system/settings`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsEnvelope {
    #[serde(default)]
    pub settings: Option<HashMap<String, Option<PersistedSetting>>>,
    #[serde(default)]
    pub environment_fallbacks: Option<HashMap<String, Option<String>>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersistedSetting {
    #[serde(default)]
    pub value: Option<String>,
}

impl SettingsEnvelope {
    /// Resolve a field: persisted value, then environment fallback, then empty.
    pub fn resolve_field(&self, field: WebhookField) -> String {
        let persisted = self
            .settings
            .as_ref()
            .and_then(|s| s.get(field.key()))
            .and_then(|s| s.as_ref())
            .and_then(|s| s.value.as_deref())
            .filter(|v| !v.is_empty());

        let fallback = || {
            self.environment_fallbacks
                .as_ref()
                .and_then(|f| f.get(field.key()))
                .and_then(|v| v.as_deref())
                .filter(|v| !v.is_empty())
        };

        persisted.or_else(fallback).unwrap_or_default().to_string()
    }

    pub fn resolve(&self) -> WebhookSettings {
        let mut resolved = WebhookSettings::default();
        for field in WebhookField::ALL {
            *resolved.get_mut(field) = self.resolve_field(field);
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: serde_json::Value) -> SettingsEnvelope {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn persisted_value_wins_over_fallback() {
        for field in WebhookField::ALL {
            let env = envelope(serde_json::json!({
                "settings": { field.key(): { "value": "https://persisted" } },
                "environment_fallbacks": { field.key(): "https://fallback" }
            }));
            assert_eq!(env.resolve_field(field), "https://persisted");
        }
    }

    #[test]
    fn fallback_used_when_persisted_missing_or_empty() {
        for field in WebhookField::ALL {
            let missing = envelope(serde_json::json!({
                "settings": {},
                "environment_fallbacks": { field.key(): "https://fallback" }
            }));
            assert_eq!(missing.resolve_field(field), "https://fallback");

            let empty = envelope(serde_json::json!({
                "settings": { field.key(): { "value": "" } },
                "environment_fallbacks": { field.key(): "https://fallback" }
            }));
            assert_eq!(empty.resolve_field(field), "https://fallback");
        }
    }

    #[test]
    fn resolves_to_empty_when_nothing_is_set() {
        let env = envelope(serde_json::json!({}));
        assert_eq!(env.resolve(), WebhookSettings::default());

        let nulls = envelope(serde_json::json!({
            "settings": null,
            "environment_fallbacks": { "webhook_daily_report_url": null }
        }));
        assert_eq!(nulls.resolve(), WebhookSettings::default());
    }

    #[test]
    fn mixed_sources_resolve_per_field() {
        let env = envelope(serde_json::json!({
            "settings": {
                "webhook_content_generated_url": { "value": "https://a", "updated_at": "2024-01-01" }
            },
            "environment_fallbacks": {
                "webhook_content_generated_url": "https://b",
                "webhook_daily_report_url": "https://c"
            }
        }));

        assert_eq!(
            env.resolve(),
            WebhookSettings {
                webhook_content_generated_url: "https://a".to_string(),
                webhook_content_published_url: String::new(),
                webhook_daily_report_url: "https://c".to_string(),
            }
        );
    }

    #[test]
    fn webhook_settings_serialize_with_backend_keys() {
        let settings = WebhookSettings {
            webhook_content_generated_url: "https://a".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "webhook_content_generated_url": "https://a",
                "webhook_content_published_url": "",
                "webhook_daily_report_url": ""
            })
        );
    }

    #[test]
    fn field_navigation_wraps() {
        assert_eq!(WebhookField::DailyReport.next(), WebhookField::ContentGenerated);
        assert_eq!(WebhookField::ContentGenerated.prev(), WebhookField::DailyReport);
    }
}
