use crate::api::{FetchCommand, FetchCommandSender};
use crate::model::UniverseFilter;
use crate::ui::mvi::Reducer;

use super::intent::FightersIntent;
use super::reducer::FightersReducer;
use super::state::FightersState;

/// Fighter store as seen by the home screen.
pub trait FighterStore {
    /// Fetch fighters for `filter`. Supersedes any request still in flight:
    /// once this returns, only the response to this call can change the
    /// list or clear the loading flag.
    fn fetch(&mut self, filter: UniverseFilter);

    fn state(&self) -> &FightersState;
}

/// Production store: reduces intents locally and hands requests to the
/// fetch worker.
#[derive(Default)]
pub struct FightersStore {
    state: FightersState,
    next_generation: u64,
    commands: Option<FetchCommandSender>,
}

impl FightersStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commands(commands: FetchCommandSender) -> Self {
        Self {
            commands: Some(commands),
            ..Self::default()
        }
    }

    pub fn set_commands(&mut self, commands: FetchCommandSender) {
        self.commands = Some(commands);
    }

    /// Dispatch an intent to the fighters reducer.
    pub fn dispatch(&mut self, intent: FightersIntent) {
        self.state = FightersReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

impl FighterStore for FightersStore {
    fn fetch(&mut self, filter: UniverseFilter) {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.dispatch(FightersIntent::Request {
            generation,
            filter: filter.clone(),
        });
        tracing::debug!(generation, universe = %filter, "Requesting fighters");

        let Some(sender) = &self.commands else {
            self.dispatch(FightersIntent::Failure {
                generation,
                message: "Fetch worker is not running".to_string(),
            });
            return;
        };

        if let Err(err) = sender.try_send(FetchCommand::FetchFighters { generation, filter }) {
            tracing::error!(generation, error = %err, "Failed to queue fighters request");
            self.dispatch(FightersIntent::Failure {
                generation,
                message: format!("Failed to queue request: {}", err),
            });
        }
    }

    fn state(&self) -> &FightersState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn fetch_sends_command_with_new_generation() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut store = FightersStore::with_commands(tx);

        store.fetch(UniverseFilter::All);
        store.fetch(UniverseFilter::named("Marvel"));

        assert_eq!(
            rx.try_recv().unwrap(),
            FetchCommand::FetchFighters {
                generation: 1,
                filter: UniverseFilter::All
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            FetchCommand::FetchFighters {
                generation: 2,
                filter: UniverseFilter::named("Marvel")
            }
        );
        assert!(store.state().is_loading);
        assert_eq!(store.state().generation, 2);
    }

    #[test]
    fn fetch_without_worker_fails_instead_of_spinning() {
        let mut store = FightersStore::new();
        store.fetch(UniverseFilter::All);
        assert!(!store.state().is_loading);
        assert!(store.state().has_error());
    }

    #[test]
    fn full_channel_reports_failure() {
        let (tx, _rx) = mpsc::channel(1);
        let mut store = FightersStore::with_commands(tx);
        store.fetch(UniverseFilter::All);
        store.fetch(UniverseFilter::named("DC"));

        let state = store.state();
        assert_eq!(state.generation, 2);
        assert!(!state.is_loading);
        assert!(state
            .error
            .as_deref()
            .is_some_and(|message| message.starts_with("Failed to queue request")));
    }
}
