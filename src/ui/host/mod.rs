//! Host screen state: the single writer of the dialog's open intent.

mod intent;
mod reducer;
mod state;

pub use intent::HostIntent;
pub use reducer::HostReducer;
pub use state::HostState;
