//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use fighterdex::model::{Fighter, Universe, UniverseFilter};
use fighterdex::ui::fighters::{
    FighterStore, FightersIntent, FightersReducer, FightersState,
};
use fighterdex::ui::mvi::Reducer;

pub fn universe(id: &str, name: &str) -> Universe {
    Universe {
        id: id.to_string(),
        name: name.to_string(),
    }
}

/// Marvel and DC, in that order.
pub fn marvel_and_dc() -> Vec<Universe> {
    vec![universe("1", "Marvel"), universe("2", "DC")]
}

pub fn roster() -> Vec<Fighter> {
    vec![
        Fighter::new("10", "Hulk", "Marvel"),
        Fighter::new("20", "Batman", "DC"),
        Fighter::new("11", "Thor", "Marvel"),
    ]
}

/// Fighter store that records every fetch and lets the test resolve
/// requests by generation, in any order.
#[derive(Default)]
pub struct RecordingStore {
    state: FightersState,
    pub fetches: Vec<UniverseFilter>,
}

impl RecordingStore {
    /// Generation assigned to the most recent fetch.
    pub fn latest_generation(&self) -> u64 {
        self.fetches.len() as u64
    }

    pub fn resolve(&mut self, generation: u64, fighters: Vec<Fighter>) {
        self.dispatch(FightersIntent::Success {
            generation,
            fighters,
        });
    }

    pub fn fail(&mut self, generation: u64, message: &str) {
        self.dispatch(FightersIntent::Failure {
            generation,
            message: message.to_string(),
        });
    }

    fn dispatch(&mut self, intent: FightersIntent) {
        self.state = FightersReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

impl FighterStore for RecordingStore {
    fn fetch(&mut self, filter: UniverseFilter) {
        self.fetches.push(filter.clone());
        let generation = self.latest_generation();
        self.dispatch(FightersIntent::Request { generation, filter });
    }

    fn state(&self) -> &FightersState {
        &self.state
    }
}
