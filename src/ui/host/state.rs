use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostState {
    pub dialog_open: bool,
    /// Number of times an open dialog was closed.
    pub dismissals: u32,
}

impl UiState for HostState {}
