//! Raw input events delivered by a modal surface to its listeners.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Position;

/// Key identity of a key-press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
    Enter,
    Space,
    Tab,
    BackTab,
    Char(char),
    Other,
}

/// Primary-button activation at a terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub column: u16,
    pub row: u16,
}

impl PointerEvent {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    pub fn position(&self) -> Position {
        Position::new(self.column, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    Pointer(PointerEvent),
    Key(KeyInput),
}

impl SurfaceEvent {
    pub fn key(key: KeyInput) -> Self {
        Self::Key(key)
    }

    pub fn click(column: u16, row: u16) -> Self {
        Self::Pointer(PointerEvent::new(column, row))
    }

    /// Translate a terminal event into a surface event.
    ///
    /// Only key presses and left-button presses are activations; releases,
    /// drags, scrolls and repeats return `None`.
    pub fn from_terminal(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let input = match key.code {
                    KeyCode::Esc => KeyInput::Escape,
                    KeyCode::Enter => KeyInput::Enter,
                    KeyCode::Char(' ') => KeyInput::Space,
                    KeyCode::Tab => KeyInput::Tab,
                    KeyCode::BackTab => KeyInput::BackTab,
                    KeyCode::Char(ch) => KeyInput::Char(ch),
                    _ => KeyInput::Other,
                };
                Some(Self::Key(input))
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(Self::click(mouse.column, mouse.row))
            }
            _ => None,
        }
    }
}
