use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostIntent {
    /// User asked for the dialog from the home screen.
    OpenDialog,
    /// Open intent reported through the dialog's `set_is_open` callback.
    SetDialogOpen(bool),
}

impl Intent for HostIntent {}
