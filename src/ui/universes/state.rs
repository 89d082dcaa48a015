use crate::model::Universe;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniversesState {
    pub universes: Vec<Universe>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for UniversesState {
    /// The list is fetched as soon as the screen mounts, so start loading.
    fn default() -> Self {
        Self {
            universes: Vec::new(),
            is_loading: true,
            error: None,
        }
    }
}

impl UiState for UniversesState {}
