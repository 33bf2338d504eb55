pub mod budget;
pub mod config_status;
pub mod error;
pub mod header;
pub mod keybindings;
pub mod loading;
pub mod notifications;
pub mod webhooks;
