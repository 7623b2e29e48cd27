// Settings service
// Loads and saves grid settings from a TOML file

mod service;

pub use service::SettingsService;
