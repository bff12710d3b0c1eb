//! Shared test utilities: a spy surface and a close-request recorder.

#![allow(dead_code, unused_imports)]

use dialogkit::surface::{
    Listener, ListenerId, ListenerRegistry, ModalSurface, SurfaceError, SurfaceEvent,
};
use dialogkit::ui::dialog::{DialogProps, SetOpen};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Calls observed by a [`SpySurface`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SurfaceLog {
    pub shown: bool,
    pub shows: usize,
    pub hides: usize,
    pub subscribes: usize,
    pub unsubscribes: usize,
    pub rejected: usize,
    pub attached: usize,
}

pub type SharedLog = Arc<Mutex<SurfaceLog>>;

/// Modal surface that records every call into a shared log.
///
/// Like a real modal primitive it refuses redundant show/hide calls.
pub struct SpySurface {
    log: SharedLog,
    listeners: ListenerRegistry,
}

impl SpySurface {
    pub fn new() -> (Self, SharedLog) {
        let log = SharedLog::default();
        let surface = Self {
            log: Arc::clone(&log),
            listeners: ListenerRegistry::new(),
        };
        (surface, log)
    }
}

impl ModalSurface for SpySurface {
    fn show(&mut self) -> Result<(), SurfaceError> {
        let mut log = self.log.lock();
        if log.shown {
            log.rejected += 1;
            return Err(SurfaceError::AlreadyShown);
        }
        log.shown = true;
        log.shows += 1;
        Ok(())
    }

    fn hide(&mut self) -> Result<(), SurfaceError> {
        let mut log = self.log.lock();
        if !log.shown {
            log.rejected += 1;
            return Err(SurfaceError::AlreadyHidden);
        }
        log.shown = false;
        log.hides += 1;
        Ok(())
    }

    fn is_shown(&self) -> bool {
        self.log.lock().shown
    }

    fn subscribe(&mut self, listener: Listener) -> ListenerId {
        let id = self.listeners.insert(listener);
        let mut log = self.log.lock();
        log.subscribes += 1;
        log.attached = self.listeners.len();
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let removed = self.listeners.remove(id);
        let mut log = self.log.lock();
        log.unsubscribes += 1;
        log.attached = self.listeners.len();
        removed
    }

    fn dispatch(&mut self, event: &SurfaceEvent) {
        if self.is_shown() {
            self.listeners.notify(event);
        }
    }
}

/// Records every value passed to `set_is_open`.
pub fn close_recorder() -> (Arc<Mutex<Vec<bool>>>, SetOpen) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let set_open: SetOpen = Arc::new(move |open: bool| sink.lock().push(open));
    (calls, set_open)
}

/// Props for a titled dialog on a 100x50 screen layout (60% x 40%).
pub fn titled_props(is_open: bool, set_open: &SetOpen) -> DialogProps<'static> {
    DialogProps::new(is_open, Arc::clone(set_open))
        .title("Save Changes")
        .body("Unsaved edits will be lost.")
}

/// Temporary directory holding `config.toml` with `content`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Width and height of the test screen.
pub const SCREEN: (u16, u16) = (100, 50);

/// Content box of a default-size dialog on [`SCREEN`]: x, y, width, height.
pub const CONTENT: (u16, u16, u16, u16) = (20, 15, 60, 20);

/// Cell of the close control on [`SCREEN`].
pub const CLOSE_CELL: (u16, u16) = (77, 16);

pub fn test_terminal() -> ratatui::Terminal<ratatui::backend::TestBackend> {
    let backend = ratatui::backend::TestBackend::new(SCREEN.0, SCREEN.1);
    ratatui::Terminal::new(backend).expect("Failed to create test terminal")
}

/// Render `controller` over the whole test screen.
pub fn draw<S: ModalSurface>(
    terminal: &mut ratatui::Terminal<ratatui::backend::TestBackend>,
    controller: &mut dialogkit::ui::dialog::DialogController<S>,
    props: &DialogProps<'_>,
) {
    let context = dialogkit::context::AppContext::default();
    terminal
        .draw(|frame| {
            let area = frame.area();
            controller.render(frame, area, props, &context);
        })
        .expect("Failed to draw");
}

/// Text of one buffer row.
pub fn row_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}
