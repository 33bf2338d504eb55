use super::error::ApiError;
use super::types::{SettingsEnvelope, WebhookSettings};

/// Outcome of asking to load settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStart {
    /// Issue the request and report back with this generation
    Issue(u64),
    /// No API key. `warn` is true only the first time this happens.
    MissingKey { warn: bool },
}

/// Outcome of a finished load
#[derive(Debug)]
pub enum LoadOutcome {
    Applied,
    Failed(ApiError),
    /// A newer load was issued after this one; the result was dropped
    Stale,
}

/// Outcome of asking to save settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStart {
    /// Issue the request with this snapshot of the working copy
    Issue(WebhookSettings),
    /// A save is already in flight
    InFlight,
    /// The working copy is still being replaced by a load
    Loading,
    MissingKey,
}

/// Outcome of a finished save
#[derive(Debug)]
pub enum SaveOutcome {
    /// Persisted. The caller must refresh the public config and then reload.
    Saved,
    Failed(ApiError),
}

/// Working copy of the webhook settings and the load/save lifecycle around it.
#[derive(Debug, Default)]
pub struct WebhookSync {
    pub working: WebhookSettings,
    pub is_saving: bool,
    pub loading_settings: bool,
    latest_load: u64,
    missing_key_warned: bool,
}

impl WebhookSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self, has_api_key: bool) -> LoadStart {
        if !has_api_key {
            self.loading_settings = false;
            let warn = !self.missing_key_warned;
            self.missing_key_warned = true;
            return LoadStart::MissingKey { warn };
        }

        self.latest_load += 1;
        self.loading_settings = true;
        LoadStart::Issue(self.latest_load)
    }

    pub fn finish_load(
        &mut self,
        generation: u64,
        result: Result<SettingsEnvelope, ApiError>,
    ) -> LoadOutcome {
        if generation != self.latest_load {
            tracing::debug!(
                generation,
                latest = self.latest_load,
                "discarding stale settings load"
            );
            return LoadOutcome::Stale;
        }

        self.loading_settings = false;
        match result {
            Ok(envelope) => {
                self.working = envelope.resolve();
                LoadOutcome::Applied
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    pub fn begin_save(&mut self, has_api_key: bool) -> SaveStart {
        if !has_api_key {
            return SaveStart::MissingKey;
        }
        if self.is_saving {
            return SaveStart::InFlight;
        }
        if self.loading_settings {
            return SaveStart::Loading;
        }

        self.is_saving = true;
        SaveStart::Issue(self.working.clone())
    }

    pub fn finish_save(&mut self, result: Result<(), ApiError>) -> SaveOutcome {
        self.is_saving = false;
        match result {
            Ok(()) => SaveOutcome::Saved,
            Err(err) => SaveOutcome::Failed(err),
        }
    }
}
