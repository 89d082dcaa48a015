//! Home screen: universe chips on top, fighters of the selected universe
//! below.
//!
//! [`HomeScreen`] is the view-model. It owns the universe selection, asks its
//! [`FighterStore`](crate::ui::fighters::FighterStore) for a refetch whenever
//! the selection changes, and derives the views the renderer draws.

mod screen;
mod view;

pub use screen::{HomeFocus, HomeScreen};
pub use view::{universe_chips, FighterRow, FightersView, UniverseChip, UniversesView};
