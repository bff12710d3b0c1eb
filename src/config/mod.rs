//! Configuration loaded from `config.toml` plus saved preferences.

mod loader;
mod preferences;
mod types;

pub use loader::{ConfigError, MIN_DIALOG_PERCENT};
pub use preferences::{Preferences, PreferencesError};
pub use types::{Config, DialogConfig, LoggingConfig, UiConfig};
