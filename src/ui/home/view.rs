use std::collections::HashSet;

use crate::model::{Fighter, Universe, UniverseFilter, ALL_UNIVERSES_LABEL};

/// One selectable entry of the universe bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniverseChip {
    pub label: String,
    pub filter: UniverseFilter,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UniversesView {
    Loading,
    Ready(Vec<UniverseChip>),
    /// The list could not be loaded; `chips` still offers the last known
    /// universes (at least "All").
    Failed {
        chips: Vec<UniverseChip>,
        message: String,
    },
}

impl UniversesView {
    pub fn chips(&self) -> &[UniverseChip] {
        match self {
            UniversesView::Loading => &[],
            UniversesView::Ready(chips) | UniversesView::Failed { chips, .. } => chips,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FighterRow<'a> {
    /// Zero-based position in the visible list.
    pub position: usize,
    pub fighter: &'a Fighter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FightersView<'a> {
    Loading,
    Failed { message: &'a str },
    /// Possibly empty.
    Ready(Vec<FighterRow<'a>>),
}

/// Chips for `universes`: "All" first, then each distinct universe name in
/// fetch order. Exactly one chip is active as long as `selection` is "All"
/// or one of the names.
pub fn universe_chips(universes: &[Universe], selection: &UniverseFilter) -> Vec<UniverseChip> {
    let mut chips = Vec::with_capacity(universes.len() + 1);
    chips.push(UniverseChip {
        label: ALL_UNIVERSES_LABEL.to_string(),
        filter: UniverseFilter::All,
        active: *selection == UniverseFilter::All,
    });

    let mut seen = HashSet::new();
    for universe in universes {
        if !seen.insert(universe.name.as_str()) {
            continue;
        }
        let filter = UniverseFilter::named(universe.name.clone());
        chips.push(UniverseChip {
            label: universe.name.clone(),
            active: filter == *selection,
            filter,
        });
    }
    chips
}
