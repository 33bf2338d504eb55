pub mod api;
pub mod budget;
pub mod error;
pub mod public_config;
pub mod status;
pub mod types;
pub mod webhooks;
