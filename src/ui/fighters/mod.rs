//! Fighter store feature module.
//!
//! Holds the fighter list for the current universe selection and the
//! request/success/failure contract used to load it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Fighter list, loading flag, error, request generation
//! - `intent.rs` - Request, Success, Failure
//! - `reducer.rs` - State transitions (pure, drops superseded responses)
//! - `store.rs` - The injectable [`FighterStore`] seam used by the home screen

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::FightersIntent;
pub use reducer::FightersReducer;
pub use state::{visible_fighters, FightersState};
pub use store::{FighterStore, FightersStore};
