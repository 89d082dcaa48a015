//! Reducer for the fighter store.

use crate::ui::mvi::Reducer;

use super::intent::FightersIntent;
use super::state::FightersState;

/// Reducer for fighter store transitions.
///
/// Only the response to the newest request is applied. A response for an
/// older generation leaves the state untouched, including the loading flag.
pub struct FightersReducer;

impl Reducer for FightersReducer {
    type State = FightersState;
    type Intent = FightersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FightersIntent::Request { generation, filter } => {
                if generation < state.generation {
                    return state;
                }
                FightersState {
                    is_loading: true,
                    error: None,
                    generation,
                    filter,
                    ..state
                }
            }

            FightersIntent::Success {
                generation,
                fighters,
            } => {
                if generation != state.generation {
                    return state;
                }
                FightersState {
                    fighters,
                    is_loading: false,
                    error: None,
                    ..state
                }
            }

            FightersIntent::Failure {
                generation,
                message,
            } => {
                if generation != state.generation {
                    return state;
                }
                FightersState {
                    is_loading: false,
                    error: Some(message),
                    ..state
                }
            }
        }
    }
}
