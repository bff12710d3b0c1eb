//! Dismissal policy: which raw surface events become a close request.
//!
//! Pure function of the event and a snapshot of the dialog; the controller
//! acts on the returned [`Decision`].

use crate::surface::{KeyInput, SurfaceEvent};

use super::layout::DialogRegions;

/// Which control inside the dialog has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogFocus {
    #[default]
    Body,
    CloseControl,
}

impl DialogFocus {
    /// Next focus stop. Without a close control the body is the only stop.
    pub fn cycle(self, has_close_control: bool) -> Self {
        match self {
            Self::Body if has_close_control => Self::CloseControl,
            _ => Self::Body,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    OutsideClick,
    Escape,
    CloseControl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    RequestClose(DismissTrigger),
    MoveFocus(DialogFocus),
    Ignore,
}

/// Dialog state the policy reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyContext {
    pub close_on_click_outside: bool,
    pub show_close_control: bool,
    pub focus: DialogFocus,
    /// Regions from the last draw; `None` before the first draw.
    pub regions: Option<DialogRegions>,
}

impl PolicyContext {
    /// The close control is enabled and was laid out on the last draw.
    /// A header too narrow for it leaves nothing to focus or activate.
    pub fn close_control_drawn(&self) -> bool {
        self.show_close_control
            && self
                .regions
                .is_some_and(|regions| regions.close_control.is_some())
    }
}

pub fn evaluate(event: &SurfaceEvent, ctx: &PolicyContext) -> Decision {
    match event {
        SurfaceEvent::Key(key) => evaluate_key(*key, ctx),
        SurfaceEvent::Pointer(pointer) => {
            let Some(regions) = ctx.regions else {
                return Decision::Ignore;
            };
            let position = pointer.position();
            if ctx.show_close_control && regions.hits_close_control(position) {
                Decision::RequestClose(DismissTrigger::CloseControl)
            } else if regions.contains(position) {
                Decision::Ignore
            } else if ctx.close_on_click_outside {
                Decision::RequestClose(DismissTrigger::OutsideClick)
            } else {
                Decision::Ignore
            }
        }
    }
}

fn evaluate_key(key: KeyInput, ctx: &PolicyContext) -> Decision {
    match key {
        KeyInput::Escape => Decision::RequestClose(DismissTrigger::Escape),
        KeyInput::Tab | KeyInput::BackTab => {
            let next = ctx.focus.cycle(ctx.close_control_drawn());
            if next == ctx.focus {
                Decision::Ignore
            } else {
                Decision::MoveFocus(next)
            }
        }
        KeyInput::Enter | KeyInput::Space
            if ctx.close_control_drawn() && ctx.focus == DialogFocus::CloseControl =>
        {
            Decision::RequestClose(DismissTrigger::CloseControl)
        }
        _ => Decision::Ignore,
    }
}
