//! Command-line flags. Flags override values loaded from the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::context::ThemeMode;

/// Terminal demo host for the modal dialog component
#[derive(Debug, Parser)]
#[command(name = "dialogkit")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Theme for this session (overrides the saved preference)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeMode>,

    /// Dialog title
    #[arg(long)]
    pub title: Option<String>,

    /// Hide the dialog's close control
    #[arg(long)]
    pub no_close_control: bool,

    /// Keep the dialog open when clicking outside it
    #[arg(long)]
    pub no_click_outside: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Sign in as this email address
    #[arg(long)]
    pub user: Option<String>,
}

impl Cli {
    /// Config file to load: `--config` or the default location.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Layers flag values over `config`. `--theme` is resolved separately
    /// because it also outranks saved preferences.
    pub fn apply(&self, config: &mut Config) {
        if let Some(title) = &self.title {
            config.dialog.title = title.clone();
        }
        if self.no_close_control {
            config.dialog.show_close_control = false;
        }
        if self.no_click_outside {
            config.dialog.close_on_click_outside = false;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }

    /// Session theme: flag, then saved preference, then config.
    pub fn resolve_theme(&self, saved: Option<ThemeMode>, config: &Config) -> ThemeMode {
        self.theme.or(saved).unwrap_or(config.ui.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_dialog_config() {
        let cli = Cli::try_parse_from([
            "dialogkit",
            "--title",
            "Delete file",
            "--no-close-control",
            "--no-click-outside",
        ])
        .unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.dialog.title, "Delete file");
        assert!(!config.dialog.show_close_control);
        assert!(!config.dialog.close_on_click_outside);
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let cli = Cli::try_parse_from(["dialogkit"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn theme_precedence() {
        let mut config = Config::default();
        config.ui.theme = ThemeMode::Dark;

        let cli = Cli::try_parse_from(["dialogkit"]).unwrap();
        assert_eq!(cli.resolve_theme(None, &config), ThemeMode::Dark);
        assert_eq!(
            cli.resolve_theme(Some(ThemeMode::Light), &config),
            ThemeMode::Light
        );

        let cli = Cli::try_parse_from(["dialogkit", "--theme", "dark"]).unwrap();
        assert_eq!(
            cli.resolve_theme(Some(ThemeMode::Light), &config),
            ThemeMode::Dark
        );
    }
}
