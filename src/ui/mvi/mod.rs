//! Model-View-Intent primitives for the counter screen.
//!
//! ```text
//! key / click ──→ Intent ──→ Reducer ──→ State ──→ draw
//!      ↑                                           │
//!      └───────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything `draw` needs, nothing more
//! - **Intent**: a user action expressed as data
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
