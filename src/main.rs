use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use dialogkit::args::Cli;
use dialogkit::config::{Config, Preferences};
use dialogkit::context::{AppContext, AuthContext, AuthIntent, AuthReducer, ThemeContext, User};
use dialogkit::logging::init_tracing;
use dialogkit::ui::app::App;
use dialogkit::ui::mvi::Reducer;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    cli.apply(&mut config);

    init_tracing(&config.logging).context("initializing logging")?;

    let preferences_path = Preferences::path_for(&config_path);
    let saved = match Preferences::load_from(&preferences_path) {
        Ok(prefs) => prefs.theme,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable preferences");
            None
        }
    };
    let theme = ThemeContext::new(cli.resolve_theme(saved, &config));

    let user = cli.user.as_deref().map(User::from_email);
    let auth = AuthReducer::reduce(AuthContext::Loading, AuthIntent::Resolved(user));

    tracing::info!(
        config = %config_path.display(),
        theme = %theme.mode(),
        "starting dialogkit"
    );

    let context = AppContext::new(theme, auth);
    let dialog_config = config.dialog.clone();
    dialogkit::ui::run(Duration::from_millis(config.ui.tick_rate_ms), move |events| {
        App::new(context, dialog_config, events).with_preferences_path(preferences_path)
    })
    .context("running terminal UI")?;

    Ok(())
}
