use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear};
use ratatui::Frame;

use crate::ui::theme::Palette;

use super::{Listener, ListenerId, ListenerRegistry, ModalSurface, SurfaceError, SurfaceEvent};

/// Overlay surface drawn on top of the terminal frame.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    shown: bool,
    listeners: ListenerRegistry,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ModalSurface for TerminalSurface {
    fn show(&mut self) -> Result<(), SurfaceError> {
        if self.shown {
            return Err(SurfaceError::AlreadyShown);
        }
        self.shown = true;
        tracing::trace!("terminal surface shown");
        Ok(())
    }

    fn hide(&mut self) -> Result<(), SurfaceError> {
        if !self.shown {
            return Err(SurfaceError::AlreadyHidden);
        }
        self.shown = false;
        tracing::trace!("terminal surface hidden");
        Ok(())
    }

    fn is_shown(&self) -> bool {
        self.shown
    }

    fn subscribe(&mut self, listener: Listener) -> ListenerId {
        self.listeners.insert(listener)
    }

    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn dispatch(&mut self, event: &SurfaceEvent) {
        if !self.shown {
            return;
        }
        self.listeners.notify(event);
    }

    fn draw_backdrop(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        if !self.shown {
            return;
        }
        frame.render_widget(Clear, area);
        let backdrop = Block::default().style(
            Style::default()
                .bg(palette.backdrop)
                .add_modifier(Modifier::DIM),
        );
        frame.render_widget(backdrop, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::KeyInput;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn redundant_show_is_rejected() {
        let mut surface = TerminalSurface::new();
        assert!(surface.show().is_ok());
        assert_eq!(surface.show(), Err(SurfaceError::AlreadyShown));
        assert!(surface.is_shown());
    }

    #[test]
    fn redundant_hide_is_rejected() {
        let mut surface = TerminalSurface::new();
        assert_eq!(surface.hide(), Err(SurfaceError::AlreadyHidden));
        surface.show().unwrap();
        assert!(surface.hide().is_ok());
        assert!(!surface.is_shown());
    }

    #[test]
    fn hidden_surface_does_not_deliver_events() {
        let mut surface = TerminalSurface::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        surface.subscribe(Box::new(move |event: &SurfaceEvent| sink.lock().push(*event)));

        surface.dispatch(&SurfaceEvent::key(KeyInput::Escape));
        assert!(seen.lock().is_empty());

        surface.show().unwrap();
        surface.dispatch(&SurfaceEvent::key(KeyInput::Escape));
        assert_eq!(seen.lock().as_slice(), &[SurfaceEvent::key(KeyInput::Escape)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut surface = TerminalSurface::new();
        surface.show().unwrap();
        let seen = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&seen);
        let id = surface.subscribe(Box::new(move |_: &SurfaceEvent| *sink.lock() += 1));
        assert_eq!(surface.listener_count(), 1);

        assert!(surface.unsubscribe(id));
        surface.dispatch(&SurfaceEvent::click(0, 0));
        assert_eq!(*seen.lock(), 0);
        assert_eq!(surface.listener_count(), 0);
    }
}
