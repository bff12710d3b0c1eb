//! Tests for the input thread and the loop's reaction to its events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use dialogkit::config::DialogConfig;
use dialogkit::context::AppContext;
use dialogkit::ui::app::App;
use dialogkit::ui::events::{AppEvent, EventHandler, EventSource};
use dialogkit::ui::runtime::handle_event;
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

/// Replays scripted events, then fails like a lost terminal.
struct ScriptedSource {
    events: VecDeque<Event>,
}

impl ScriptedSource {
    fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }
}

impl EventSource for ScriptedSource {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        if self.events.is_empty() {
            Err(io::Error::new(io::ErrorKind::NotConnected, "no terminal"))
        } else {
            Ok(true)
        }
    }

    fn read(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "drained"))
    }
}

/// Collect events until the reader reports it stopped.
fn drain_until_closed(handler: &EventHandler) -> Vec<AppEvent> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut seen = Vec::new();
    while Instant::now() < deadline {
        if let Ok(event) = handler.next(Duration::from_millis(50)) {
            let closed = matches!(event, AppEvent::InputClosed(_));
            seen.push(event);
            if closed {
                return seen;
            }
        }
    }
    panic!("reader exit was never reported");
}

#[test]
fn failing_source_reports_input_closed() {
    let handler = EventHandler::with_source(Duration::from_millis(20), ScriptedSource::new(vec![]));

    let seen = drain_until_closed(&handler);

    match seen.last() {
        Some(AppEvent::InputClosed(reason)) => assert!(reason.contains("no terminal")),
        _ => panic!("expected InputClosed last"),
    }
}

#[test]
fn events_before_failure_are_delivered_in_order() {
    let key = Event::Key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE));
    let source = ScriptedSource::new(vec![key.clone(), Event::Resize(90, 30)]);
    let handler = EventHandler::with_source(Duration::from_secs(10), source);

    let seen = drain_until_closed(&handler);

    assert_eq!(seen.len(), 3);
    assert!(matches!(&seen[0], AppEvent::Input(event) if *event == key));
    assert!(matches!(seen[1], AppEvent::Resize(90, 30)));
    assert!(matches!(seen[2], AppEvent::InputClosed(_)));
}

#[test]
fn loop_quits_once_reader_stops() {
    let handler = EventHandler::with_source(Duration::from_millis(20), ScriptedSource::new(vec![]));
    let mut app = App::new(AppContext::default(), DialogConfig::default(), handler.sender());

    for event in drain_until_closed(&handler) {
        handle_event(&mut app, event);
    }

    assert!(app.should_quit());
}

#[test]
fn close_request_event_updates_host_state() {
    let handler = EventHandler::with_source(Duration::from_secs(10), ScriptedSource::new(vec![]));
    let mut app = App::new(AppContext::default(), DialogConfig::default(), handler.sender());

    handle_event(&mut app, AppEvent::SetDialogOpen(true));
    assert!(app.host().dialog_open);
    handle_event(&mut app, AppEvent::SetDialogOpen(false));

    assert!(!app.host().dialog_open);
    assert_eq!(app.host().dismissals, 1);
    assert!(!app.should_quit());
}
