use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_input;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the event loop until the user quits or input stops.
///
/// `build` receives the event sender used for the dialog's close requests.
pub fn run<F>(tick_rate: Duration, build: F) -> io::Result<()>
where
    F: FnOnce(std::sync::mpsc::Sender<AppEvent>) -> App,
{
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = build(events.sender());
    tracing::info!("event loop started");

    loop {
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("event loop stopped");
    drop(app);
    drop(guard);
    Ok(())
}

/// Apply one loop event to the app.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Input(event) => handle_input(app, &event),
        AppEvent::SetDialogOpen(open) => app.set_dialog_open(open),
        AppEvent::Tick => {}
        AppEvent::Resize(cols, rows) => {
            tracing::debug!(cols, rows, "terminal resized");
        }
        AppEvent::InputClosed(reason) => {
            tracing::warn!(%reason, "input reader stopped, quitting");
            app.request_quit();
        }
    }
}
