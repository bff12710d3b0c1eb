use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};

pub enum AppEvent {
    /// Raw terminal input (keys and mouse).
    Input(Event),
    Tick,
    Resize(u16, u16),
    /// Open intent reported by the dialog's `set_is_open` callback.
    SetDialogOpen(bool),
    /// The input reader stopped; no further input will arrive.
    InputClosed(String),
}

/// Where the input thread reads terminal events from.
pub trait EventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// Reads from the process terminal through crossterm.
pub struct CrosstermSource;

impl EventSource for CrosstermSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_source(tick_rate, CrosstermSource)
    }

    pub fn with_source<S>(tick_rate: Duration, source: S) -> Self
    where
        S: EventSource + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let reason = pump(source, &event_tx, tick_rate);
            // The handler keeps a sender alive, so the loop only learns
            // about the exit through this event.
            let _ = event_tx.send(AppEvent::InputClosed(reason));
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Forward events until the source fails or the receiver is gone.
/// Returns why it stopped.
fn pump<S: EventSource>(mut source: S, tx: &Sender<AppEvent>, tick_rate: Duration) -> String {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        match source.poll(timeout) {
            Ok(true) => {
                let event = match source.read() {
                    Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                    Ok(event) => AppEvent::Input(event),
                    Err(err) => {
                        tracing::error!(error = %err, "failed to read terminal event");
                        return format!("failed to read terminal event: {err}");
                    }
                };
                if tx.send(event).is_err() {
                    return "event receiver dropped".to_string();
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "failed to poll terminal events");
                return format!("failed to poll terminal events: {err}");
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return "event receiver dropped".to_string();
            }
            last_tick = Instant::now();
        }
    }
}
