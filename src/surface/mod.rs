//! Modal surface primitive.
//!
//! A surface is an imperative show/hide overlay that renders above all
//! other content and, while shown, intercepts pointer and key input and
//! hands it to its subscribed listeners.
//!
//! The primitive is deliberately not idempotent: showing a shown surface or
//! hiding a hidden one is an error, so callers must check [`ModalSurface::is_shown`]
//! before acting.

mod event;
mod terminal;

use ratatui::layout::Rect;
use ratatui::Frame;
use thiserror::Error;

use crate::ui::theme::Palette;

pub use event::{KeyInput, PointerEvent, SurfaceEvent};
pub use terminal::TerminalSurface;

/// Callback receiving raw surface events.
pub type Listener = Box<dyn FnMut(&SurfaceEvent) + Send>;

/// Handle returned by [`ModalSurface::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("modal surface is already shown")]
    AlreadyShown,
    #[error("modal surface is already hidden")]
    AlreadyHidden,
}

pub trait ModalSurface {
    /// Show the surface. Fails with [`SurfaceError::AlreadyShown`] if shown.
    fn show(&mut self) -> Result<(), SurfaceError>;

    /// Hide the surface. Fails with [`SurfaceError::AlreadyHidden`] if hidden.
    fn hide(&mut self) -> Result<(), SurfaceError>;

    fn is_shown(&self) -> bool;

    fn subscribe(&mut self, listener: Listener) -> ListenerId;

    /// Remove a listener. Returns `false` if the id was not subscribed.
    fn unsubscribe(&mut self, id: ListenerId) -> bool;

    /// Deliver a raw event to every listener. No-op while hidden.
    fn dispatch(&mut self, event: &SurfaceEvent);

    /// Draw whatever the surface paints behind its content.
    fn draw_backdrop(&self, _frame: &mut Frame, _area: Rect, _palette: &Palette) {}
}

/// Ordered listener storage shared by surface implementations.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn notify(&mut self, event: &SurfaceEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("next_id", &self.next_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn counting_listener(counter: &Arc<Mutex<usize>>) -> Listener {
        let counter = Arc::clone(counter);
        Box::new(move |_: &SurfaceEvent| *counter.lock() += 1)
    }

    #[test]
    fn ids_are_never_reused() {
        let mut registry = ListenerRegistry::new();
        let counter = Arc::new(Mutex::new(0));
        let first = registry.insert(counting_listener(&counter));
        assert!(registry.remove(first));
        let second = registry.insert(counting_listener(&counter));
        assert_ne!(first, second);
    }

    #[test]
    fn remove_unknown_id_reports_false() {
        let mut registry = ListenerRegistry::new();
        let counter = Arc::new(Mutex::new(0));
        let id = registry.insert(counting_listener(&counter));
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn notify_reaches_every_listener() {
        let mut registry = ListenerRegistry::new();
        let counter = Arc::new(Mutex::new(0));
        registry.insert(counting_listener(&counter));
        registry.insert(counting_listener(&counter));
        registry.notify(&SurfaceEvent::key(KeyInput::Escape));
        assert_eq!(*counter.lock(), 2);
        assert_eq!(registry.len(), 2);
    }
}
