use crate::model::{Universe, UniverseFilter};
use crate::ui::fighters::{visible_fighters, FighterStore};
use crate::ui::navigation::Route;
use crate::ui::universes::UniversesState;

use super::view::{universe_chips, FighterRow, FightersView, UniversesView};

/// Which list receives cursor keys.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HomeFocus {
    #[default]
    Universes,
    Fighters,
}

/// View-model of the home screen.
///
/// States: idle with a selection, or a refetch in flight. Every selection
/// change issues exactly one fetch through the store; the store decides which
/// response wins.
pub struct HomeScreen<S: FighterStore> {
    store: S,
    selection: UniverseFilter,
    mounted: bool,
    focus: HomeFocus,
    chip_cursor: usize,
    fighter_cursor: usize,
}

impl<S: FighterStore> HomeScreen<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            selection: UniverseFilter::All,
            mounted: false,
            focus: HomeFocus::default(),
            chip_cursor: 0,
            fighter_cursor: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn selection(&self) -> &UniverseFilter {
        &self.selection
    }

    /// Issue the initial fetch for the current selection. Idempotent.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.store.fetch(self.selection.clone());
    }

    /// Change the selection and refetch.
    ///
    /// Any string is accepted. Re-selecting the current value does nothing
    /// and returns false.
    pub fn select_universe(&mut self, choice: UniverseFilter) -> bool {
        if choice == self.selection {
            return false;
        }
        tracing::info!(from = %self.selection, to = %choice, "Universe selected");
        self.selection = choice;
        self.fighter_cursor = 0;
        self.store.fetch(self.selection.clone());
        true
    }

    /// Refetch the current selection, e.g. after a failure.
    pub fn retry(&mut self) {
        self.store.fetch(self.selection.clone());
    }

    /// Keep the selection pointing at a known universe after the list
    /// changes; falls back to "All" (which refetches).
    pub fn on_universes_loaded(&mut self, universes: &[Universe]) {
        if let UniverseFilter::Named(name) = &self.selection {
            if !universes.iter().any(|universe| universe.name == *name) {
                tracing::warn!(universe = %name, "Selected universe no longer listed");
                self.select_universe(UniverseFilter::All);
            }
        }
        let chip_count = universe_chips(universes, &self.selection).len();
        self.chip_cursor = self.chip_cursor.min(chip_count.saturating_sub(1));
    }

    pub fn render_universes(&self, universes: &UniversesState) -> UniversesView {
        if universes.is_loading {
            return UniversesView::Loading;
        }
        let chips = universe_chips(&universes.universes, &self.selection);
        match &universes.error {
            Some(message) => UniversesView::Failed {
                chips,
                message: message.clone(),
            },
            None => UniversesView::Ready(chips),
        }
    }

    pub fn render_fighters(&self) -> FightersView<'_> {
        let state = self.store.state();
        if state.is_loading {
            return FightersView::Loading;
        }
        if let Some(message) = &state.error {
            return FightersView::Failed { message };
        }
        FightersView::Ready(
            visible_fighters(&state.fighters, &self.selection)
                .into_iter()
                .enumerate()
                .map(|(position, fighter)| FighterRow { position, fighter })
                .collect(),
        )
    }

    /// Route to the detail screen for the fighter at `position` in the
    /// visible list.
    pub fn open_fighter(&self, position: usize) -> Option<Route> {
        match self.render_fighters() {
            FightersView::Ready(rows) => rows.get(position).map(|row| Route::FighterScreen {
                fighter: Box::new(row.fighter.clone()),
            }),
            _ => None,
        }
    }

    pub fn open_focused_fighter(&self) -> Option<Route> {
        self.open_fighter(self.fighter_cursor())
    }

    pub fn focus(&self) -> HomeFocus {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            HomeFocus::Universes => HomeFocus::Fighters,
            HomeFocus::Fighters => HomeFocus::Universes,
        };
    }

    pub fn chip_cursor(&self) -> usize {
        self.chip_cursor
    }

    /// Move the chip cursor, wrapping at both ends.
    pub fn move_chip_cursor(&mut self, direction: i32, universes: &UniversesState) {
        let len = self.render_universes(universes).chips().len();
        if len == 0 {
            self.chip_cursor = 0;
            return;
        }
        let current = self.chip_cursor.min(len - 1);
        self.chip_cursor = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    /// Select the chip under the cursor.
    pub fn activate_chip(&mut self, universes: &UniversesState) -> bool {
        let chip = self
            .render_universes(universes)
            .chips()
            .get(self.chip_cursor)
            .map(|chip| chip.filter.clone());
        match chip {
            Some(filter) => self.select_universe(filter),
            None => false,
        }
    }

    /// Fighter cursor, clamped to the visible list.
    ///
    /// A refetch may shrink the list under the stored position, so every
    /// reader goes through here.
    pub fn fighter_cursor(&self) -> usize {
        self.fighter_cursor.min(self.visible_len().saturating_sub(1))
    }

    /// Move the fighter cursor, clamped to the visible list.
    pub fn move_fighter_cursor(&mut self, delta: i32) {
        let len = self.visible_len();
        if len == 0 {
            self.fighter_cursor = 0;
            return;
        }
        let current = self.fighter_cursor();
        self.fighter_cursor = if delta.is_negative() {
            current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (current + delta as usize).min(len - 1)
        };
    }

    fn visible_len(&self) -> usize {
        match self.render_fighters() {
            FightersView::Ready(rows) => rows.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Fighter;
    use crate::ui::fighters::{FightersIntent, FightersReducer, FightersState};
    use crate::ui::mvi::Reducer;

    /// Store that records fetches and resolves them on demand.
    #[derive(Default)]
    struct ManualStore {
        state: FightersState,
        fetches: Vec<UniverseFilter>,
    }

    impl ManualStore {
        fn resolve(&mut self, fighters: Vec<Fighter>) {
            let generation = self.state.generation;
            self.state = FightersReducer::reduce(
                std::mem::take(&mut self.state),
                FightersIntent::Success {
                    generation,
                    fighters,
                },
            );
        }
    }

    impl FighterStore for ManualStore {
        fn fetch(&mut self, filter: UniverseFilter) {
            self.fetches.push(filter.clone());
            let generation = self.fetches.len() as u64;
            self.state = FightersReducer::reduce(
                std::mem::take(&mut self.state),
                FightersIntent::Request { generation, filter },
            );
        }

        fn state(&self) -> &FightersState {
            &self.state
        }
    }

    fn loaded_universes() -> UniversesState {
        UniversesState {
            universes: vec![
                Universe {
                    id: "1".to_string(),
                    name: "Marvel".to_string(),
                },
                Universe {
                    id: "2".to_string(),
                    name: "DC".to_string(),
                },
            ],
            is_loading: false,
            error: None,
        }
    }

    #[test]
    fn mount_fetches_all_once() {
        let mut screen = HomeScreen::new(ManualStore::default());
        screen.mount();
        screen.mount();
        assert_eq!(screen.store().fetches, vec![UniverseFilter::All]);
    }

    #[test]
    fn reselecting_is_a_noop() {
        let mut screen = HomeScreen::new(ManualStore::default());
        screen.mount();
        assert!(!screen.select_universe(UniverseFilter::All));
        assert_eq!(screen.store().fetches.len(), 1);
    }

    #[test]
    fn chip_cursor_wraps() {
        let universes = loaded_universes();
        let mut screen = HomeScreen::new(ManualStore::default());
        screen.move_chip_cursor(-1, &universes);
        assert_eq!(screen.chip_cursor(), 2);
        screen.move_chip_cursor(1, &universes);
        assert_eq!(screen.chip_cursor(), 0);
    }

    #[test]
    fn activate_chip_selects_universe_under_cursor() {
        let universes = loaded_universes();
        let mut screen = HomeScreen::new(ManualStore::default());
        screen.mount();
        screen.move_chip_cursor(1, &universes);
        assert!(screen.activate_chip(&universes));
        assert_eq!(screen.selection(), &UniverseFilter::named("Marvel"));
        assert_eq!(
            screen.store().fetches,
            vec![UniverseFilter::All, UniverseFilter::named("Marvel")]
        );
    }

    #[test]
    fn fighter_cursor_is_clamped() {
        let mut screen = HomeScreen::new(ManualStore::default());
        screen.mount();
        screen.store_mut().resolve(vec![
            Fighter::new("1", "Hulk", "Marvel"),
            Fighter::new("2", "Batman", "DC"),
        ]);
        screen.move_fighter_cursor(5);
        assert_eq!(screen.fighter_cursor(), 1);
        screen.move_fighter_cursor(-3);
        assert_eq!(screen.fighter_cursor(), 0);
    }

    #[test]
    fn fighter_cursor_follows_a_shorter_refetch() {
        let mut screen = HomeScreen::new(ManualStore::default());
        screen.mount();
        screen.store_mut().resolve(vec![
            Fighter::new("1", "Hulk", "Marvel"),
            Fighter::new("2", "Batman", "DC"),
            Fighter::new("3", "Thor", "Marvel"),
        ]);
        screen.move_fighter_cursor(2);
        assert_eq!(screen.fighter_cursor(), 2);

        screen.retry();
        let hulk = Fighter::new("1", "Hulk", "Marvel");
        screen.store_mut().resolve(vec![hulk.clone()]);

        assert_eq!(screen.fighter_cursor(), 0);
        assert_eq!(
            screen.open_focused_fighter(),
            Some(Route::FighterScreen {
                fighter: Box::new(hulk)
            })
        );
    }

    #[test]
    fn vanished_selection_falls_back_to_all() {
        let universes = loaded_universes();
        let mut screen = HomeScreen::new(ManualStore::default());
        screen.mount();
        screen.select_universe(UniverseFilter::named("DC"));
        screen.on_universes_loaded(&universes.universes[..1]);
        assert_eq!(screen.selection(), &UniverseFilter::All);
        assert_eq!(screen.store().fetches.len(), 3);
    }
}
