use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::surface::SurfaceEvent;
use crate::ui::app::App;

/// Route one terminal event. While the dialog is shown it receives all
/// input; otherwise keys drive the home screen.
pub fn handle_input(app: &mut App, event: &Event) {
    if let Event::Key(key) = event {
        if is_interrupt(key) {
            app.request_quit();
            return;
        }
    }

    if app.dialog_shown() {
        if let Some(event) = SurfaceEvent::from_terminal(event) {
            app.dispatch_to_dialog(&event);
        }
        return;
    }

    if let Event::Key(key) = event {
        handle_home_key(app, key);
    }
}

fn handle_home_key(app: &mut App, key: &KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('o') => app.open_dialog(),
        KeyCode::Char('t') => {
            let mode = app.toggle_theme();
            tracing::debug!(theme = %mode, "theme toggled from home screen");
        }
        KeyCode::Char('s') => app.sign_out(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && key.code == KeyCode::Char('c')
}
