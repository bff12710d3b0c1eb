use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::context::ThemeMode;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub dialog: DialogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Event loop and appearance settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Interval between idle ticks in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Theme used when no saved preference exists (default: light).
    #[serde(default)]
    pub theme: ThemeMode,
}

/// Defaults for the demo dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogConfig {
    #[serde(default = "default_dialog_title")]
    pub title: String,
    #[serde(default = "default_true")]
    pub show_close_control: bool,
    #[serde(default = "default_true")]
    pub close_on_click_outside: bool,
    /// Content width as a percentage of the screen (10..=100, default: 60).
    #[serde(default = "default_width_percent")]
    pub width_percent: u16,
    /// Content height as a percentage of the screen (10..=100, default: 40).
    #[serde(default = "default_height_percent")]
    pub height_percent: u16,
}

/// Log output settings. Logging is off unless `file` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_dialog_title() -> String {
    "Save Changes".to_string()
}

fn default_true() -> bool {
    true
}

fn default_width_percent() -> u16 {
    60
}

fn default_height_percent() -> u16 {
    40
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            theme: ThemeMode::default(),
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            title: default_dialog_title(),
            show_close_control: true,
            close_on_click_outside: true,
            width_percent: default_width_percent(),
            height_percent: default_height_percent(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
