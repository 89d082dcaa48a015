//! Universe source feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Universe list, loading flag, error
//! - `intent.rs` - Request, Success, Failure
//! - `reducer.rs` - State transitions (pure)

mod intent;
mod reducer;
mod state;

pub use intent::UniversesIntent;
pub use reducer::UniversesReducer;
pub use state::UniversesState;
