use crate::ui::mvi::Reducer;

use super::intent::HostIntent;
use super::state::HostState;

pub struct HostReducer;

impl Reducer for HostReducer {
    type State = HostState;
    type Intent = HostIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HostIntent::OpenDialog | HostIntent::SetDialogOpen(true) => HostState {
                dialog_open: true,
                ..state
            },
            HostIntent::SetDialogOpen(false) if state.dialog_open => HostState {
                dialog_open: false,
                dismissals: state.dismissals.saturating_add(1),
            },
            HostIntent::SetDialogOpen(false) => state,
        }
    }
}
