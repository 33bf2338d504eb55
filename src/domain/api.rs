use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{PublicConfigResponse, SettingsEnvelope, WebhookSettings};
use crate::config::ClientConfig;

const PUBLIC_CONFIG_PATH: &str = "/v1/config/public";
const SYSTEM_SETTINGS_PATH: &str = "/v1/system/settings";
const API_KEY_HEADER: &str = "X-API-Key";

/// The SPLANTS backend operations the dashboard needs
#[async_trait]
pub trait Backend: Send + Sync {
    /// Public status document. No authentication.
    async fn fetch_public_config(&self) -> Result<PublicConfigResponse, ApiError>;

    /// Persisted webhook settings plus server-side environment fallbacks
    async fn fetch_settings(&self) -> Result<SettingsEnvelope, ApiError>;

    /// Persist all three webhook URLs
    async fn save_settings(&self, settings: &WebhookSettings) -> Result<(), ApiError>;
}

/// `Backend` over HTTP
pub struct HttpBackend {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, config })
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::ServerRejected { status, body })
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch_public_config(&self) -> Result<PublicConfigResponse, ApiError> {
        let url = self.config.build_api_url(PUBLIC_CONFIG_PATH);
        tracing::debug!(%url, "fetching public config");

        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn fetch_settings(&self) -> Result<SettingsEnvelope, ApiError> {
        let url = self.config.build_api_url(SYSTEM_SETTINGS_PATH);
        tracing::debug!(%url, "fetching system settings");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn save_settings(&self, settings: &WebhookSettings) -> Result<(), ApiError> {
        let url = self.config.build_api_url(SYSTEM_SETTINGS_PATH);
        tracing::debug!(%url, "saving system settings");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(settings)
            .send()
            .await?;

        Self::check_status(response).await.map(|_| ())
    }
}
