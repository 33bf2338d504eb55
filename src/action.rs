use crossterm::event::{KeyCode, KeyModifiers};

use crate::domain::error::ApiError;
use crate::domain::types::{PublicConfigResponse, SettingsEnvelope};

#[derive(Debug)]
pub enum Action {
    Input { code: KeyCode, modifiers: KeyModifiers },
    PublicConfigLoaded {
        generation: u64,
        result: Result<PublicConfigResponse, ApiError>,
    },
    SettingsLoaded {
        generation: u64,
        result: Result<SettingsEnvelope, ApiError>,
    },
    SettingsSaved(Result<(), ApiError>),
}
