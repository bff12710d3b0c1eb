//! Model-View-Intent primitives.
//!
//! Host-side state (open intent, auth) changes only by feeding an intent
//! through a reducer; views read the resulting state.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
