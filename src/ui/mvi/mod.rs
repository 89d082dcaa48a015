//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── key press / fetch ───┘
//! ```
//!
//! Stores in this crate (universes, fighters) are plain state values plus a
//! reducer. Side effects such as sending a request to the fetch worker live
//! next to the dispatch call, never inside `reduce`.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
