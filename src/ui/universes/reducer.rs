use crate::ui::mvi::Reducer;

use super::intent::UniversesIntent;
use super::state::UniversesState;

pub struct UniversesReducer;

impl Reducer for UniversesReducer {
    type State = UniversesState;
    type Intent = UniversesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            UniversesIntent::Request => UniversesState {
                is_loading: true,
                error: None,
                ..state
            },
            UniversesIntent::Success { universes } => UniversesState {
                universes,
                is_loading: false,
                error: None,
            },
            // Keep the previous list so the chips stay usable.
            UniversesIntent::Failure { message } => UniversesState {
                is_loading: false,
                error: Some(message),
                ..state
            },
        }
    }
}
