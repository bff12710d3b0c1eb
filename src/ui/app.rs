use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use ratatui::layout::Rect;
use ratatui::text::{Line, Text};
use ratatui::Frame;

use crate::config::{DialogConfig, Preferences};
use crate::context::{AppContext, AuthIntent, AuthReducer, ThemeMode};
use crate::surface::{SurfaceEvent, TerminalSurface};
use crate::ui::dialog::{DialogController, DialogProps, SetOpen};
use crate::ui::events::AppEvent;
use crate::ui::host::{HostIntent, HostReducer, HostState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Open intent and dismissal count (MVI pattern).
    host: HostState,
    context: AppContext,
    dialog_config: DialogConfig,
    /// Created once so the dialog's listener keeps a stable callback.
    set_dialog_open: SetOpen,
    preferences_path: Option<PathBuf>,
    dialog: DialogController<TerminalSurface>,
}

impl App {
    /// Build the app. Close requests from the dialog are sent to `events`
    /// as [`AppEvent::SetDialogOpen`] and applied on the next loop turn.
    pub fn new(context: AppContext, dialog_config: DialogConfig, events: Sender<AppEvent>) -> Self {
        let set_dialog_open: SetOpen = Arc::new(move |open: bool| {
            if events.send(AppEvent::SetDialogOpen(open)).is_err() {
                tracing::warn!(open, "event loop gone, dropping dialog open request");
            }
        });
        let host = HostState::default();
        let props = dialog_props(&dialog_config, &host, &set_dialog_open);
        let dialog = DialogController::mount(TerminalSurface::new(), &props);

        Self {
            should_quit: false,
            host,
            context,
            dialog_config,
            set_dialog_open,
            preferences_path: None,
            dialog,
        }
    }

    /// Persist theme toggles to `path`.
    pub fn with_preferences_path(mut self, path: PathBuf) -> Self {
        self.preferences_path = Some(path);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn host(&self) -> &HostState {
        &self.host
    }

    pub fn dialog(&self) -> &DialogController<TerminalSurface> {
        &self.dialog
    }

    /// True while the dialog surface intercepts input.
    pub fn dialog_shown(&self) -> bool {
        self.dialog.is_shown()
    }

    pub fn open_dialog(&mut self) {
        dispatch_mvi!(self, host, HostReducer, HostIntent::OpenDialog);
    }

    pub fn set_dialog_open(&mut self, open: bool) {
        dispatch_mvi!(self, host, HostReducer, HostIntent::SetDialogOpen(open));
        tracing::debug!(open, dismissals = self.host.dismissals, "dialog open intent updated");
    }

    pub fn dispatch_to_dialog(&mut self, event: &SurfaceEvent) {
        self.dialog.dispatch(event);
    }

    pub fn sign_out(&mut self) {
        let auth = std::mem::take(&mut self.context.auth);
        self.context.auth = AuthReducer::reduce(auth, AuthIntent::SignOut);
    }

    /// Flip the theme and save it when a preferences path is set.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mode = self.context.theme.toggle();
        if let Some(path) = &self.preferences_path {
            let prefs = Preferences { theme: Some(mode) };
            if let Err(err) = prefs.save_to(path) {
                tracing::warn!(error = %err, "failed to save theme preference");
            }
        }
        mode
    }

    /// Reconcile the dialog with the current intent without drawing, so
    /// [`dialog_shown`](Self::dialog_shown) reflects this frame.
    pub fn sync_dialog(&mut self) {
        let props = dialog_props(&self.dialog_config, &self.host, &self.set_dialog_open);
        self.dialog.update(&props);
    }

    /// Render the dialog over `area`, reconciling it with the current intent.
    pub fn render_dialog(&mut self, frame: &mut Frame, area: Rect) {
        let props = dialog_props(&self.dialog_config, &self.host, &self.set_dialog_open);
        self.dialog.render(frame, area, &props, &self.context);
    }
}

fn dialog_props(
    config: &DialogConfig,
    host: &HostState,
    set_dialog_open: &SetOpen,
) -> DialogProps<'static> {
    DialogProps::from_config(config, host.dialog_open, Arc::clone(set_dialog_open))
        .id("demo-dialog")
        .class("dialog")
        .data("testid", "demo-dialog")
        .body(dialog_body())
}

fn dialog_body() -> Text<'static> {
    Text::from(vec![
        Line::from("You have unsaved changes."),
        Line::from(""),
        Line::from("Press Esc or click outside to dismiss."),
        Line::from("Tab focuses the close control; Enter activates it."),
    ])
}
