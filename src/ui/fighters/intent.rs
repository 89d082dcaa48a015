//! Intents for the fighter store.

use crate::model::{Fighter, UniverseFilter};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FightersIntent {
    /// A fetch for `filter` was issued as request number `generation`.
    Request {
        generation: u64,
        filter: UniverseFilter,
    },

    /// The request `generation` resolved with a fighter list.
    Success {
        generation: u64,
        fighters: Vec<Fighter>,
    },

    /// The request `generation` failed.
    Failure { generation: u64, message: String },
}

impl Intent for FightersIntent {}
