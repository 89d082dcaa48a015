//! State for the fighter store.

use crate::model::{Fighter, UniverseFilter};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FightersState {
    /// Last successfully fetched list.
    pub fighters: Vec<Fighter>,
    /// True from a request until its own response arrives.
    pub is_loading: bool,
    /// Message of the last failed request, cleared by the next request.
    pub error: Option<String>,
    /// Generation of the newest request; 0 before the first one.
    pub generation: u64,
    /// Filter of the newest request.
    pub filter: UniverseFilter,
}

impl UiState for FightersState {}

impl FightersState {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Fighters to show for `selection`.
///
/// The server already filters by universe; this projection keeps the view
/// correct if it does not.
pub fn visible_fighters<'a>(
    fighters: &'a [Fighter],
    selection: &UniverseFilter,
) -> Vec<&'a Fighter> {
    fighters
        .iter()
        .filter(|fighter| selection.matches(fighter))
        .collect()
}
