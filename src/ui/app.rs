use crate::api::{ApiError, FetchCommand, FetchCommandSender};
use crate::config::ConfigStore;
use crate::model::{Fighter, Universe};
use crate::ui::events::AppEvent;
use crate::ui::fighters::{FighterStore, FightersIntent, FightersStore};
use crate::ui::home::HomeScreen;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{Navigator, Route};
use crate::ui::universes::{UniversesIntent, UniversesReducer, UniversesState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    config: ConfigStore,
    /// Universe list (MVI pattern).
    universes: UniversesState,
    /// Home view-model; owns the fighter store.
    home: HomeScreen<FightersStore>,
    navigator: Navigator,
    commands: Option<FetchCommandSender>,
    ticks: u64,
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        Self {
            should_quit: false,
            config,
            universes: UniversesState::default(),
            home: HomeScreen::new(FightersStore::new()),
            navigator: Navigator::new(),
            commands: None,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Connect the app to a running fetch worker.
    pub fn attach_worker(&mut self, commands: FetchCommandSender) {
        self.home.store_mut().set_commands(commands.clone());
        self.commands = Some(commands);
    }

    /// Mount the home screen: load universes and the unfiltered fighter list.
    pub fn start(&mut self) {
        self.request_universes();
        self.home.mount();
    }

    pub fn universes(&self) -> &UniversesState {
        &self.universes
    }

    pub fn home(&self) -> &HomeScreen<FightersStore> {
        &self.home
    }

    pub fn home_mut(&mut self) -> &mut HomeScreen<FightersStore> {
        &mut self.home
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    /// Monotonic tick counter, drives the loading spinner.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Apply a fetch result. Input, tick and resize events are handled by
    /// the runtime loop.
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::UniversesLoaded(result) => self.on_universes_loaded(result),
            AppEvent::FightersLoaded { generation, result } => {
                self.on_fighters_loaded(generation, result)
            }
            AppEvent::Tick => self.on_tick(),
            AppEvent::Key(_) | AppEvent::Resize(..) => {}
        }
    }

    pub fn on_universes_loaded(&mut self, result: Result<Vec<Universe>, ApiError>) {
        match result {
            Ok(universes) => {
                tracing::info!(count = universes.len(), "Universes loaded");
                self.home.on_universes_loaded(&universes);
                self.dispatch_universes(UniversesIntent::Success { universes });
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load universes");
                self.dispatch_universes(UniversesIntent::Failure {
                    message: format!("{}: {}", err.user_message(), err),
                });
            }
        }
    }

    pub fn on_fighters_loaded(&mut self, generation: u64, result: Result<Vec<Fighter>, ApiError>) {
        let latest = self.home.store().state().generation;
        if generation != latest {
            tracing::debug!(generation, latest, "Dropping superseded fighters response");
        }
        let intent = match result {
            Ok(fighters) => FightersIntent::Success {
                generation,
                fighters,
            },
            Err(err) => {
                if generation == latest {
                    tracing::error!(generation, error = %err, "Failed to load fighters");
                }
                FightersIntent::Failure {
                    generation,
                    message: format!("{}: {}", err.user_message(), err),
                }
            }
        };
        self.home.store_mut().dispatch(intent);
    }

    /// Refetch whichever lists failed last time. Lists that loaded, or are
    /// still loading, are left alone.
    pub fn retry(&mut self) {
        if self.universes.error.is_some() {
            self.request_universes();
        }
        if self.home.store().state().has_error() {
            self.home.retry();
        }
    }

    /// Open the detail screen for the fighter under the cursor.
    pub fn open_focused_fighter(&mut self) -> bool {
        match self.home.open_focused_fighter() {
            Some(route) => {
                self.navigator.navigate(route);
                true
            }
            None => false,
        }
    }

    pub fn navigate_back(&mut self) -> bool {
        self.navigator.back()
    }

    pub fn move_chip_cursor(&mut self, direction: i32) {
        self.home.move_chip_cursor(direction, &self.universes);
    }

    pub fn activate_chip(&mut self) -> bool {
        self.home.activate_chip(&self.universes)
    }

    fn request_universes(&mut self) {
        self.dispatch_universes(UniversesIntent::Request);
        let Some(sender) = &self.commands else {
            self.dispatch_universes(UniversesIntent::Failure {
                message: "Fetch worker is not running".to_string(),
            });
            return;
        };
        if let Err(err) = sender.try_send(FetchCommand::FetchUniverses) {
            tracing::error!(error = %err, "Failed to queue universes request");
            self.dispatch_universes(UniversesIntent::Failure {
                message: format!("Failed to queue request: {}", err),
            });
        }
    }

    /// Dispatch an intent to the universes reducer.
    fn dispatch_universes(&mut self, intent: UniversesIntent) {
        dispatch_mvi!(self, universes, UniversesReducer, intent);
    }
}
