mod common;

use std::path::PathBuf;

use common::{marvel_and_dc, roster};
use fighterdex::api::{ApiError, FetchCommand};
use fighterdex::config::{Config, ConfigStore};
use fighterdex::ui::app::App;
use fighterdex::ui::fighters::FighterStore;
use fighterdex::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn started_app() -> (App, mpsc::Receiver<FetchCommand>) {
    let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/fighterdex-test.toml"));
    let mut app = App::new(config);
    let (tx, rx) = mpsc::channel(16);
    app.attach_worker(tx);
    app.start();
    (app, rx)
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn home_shows_chips_and_fighters() {
    let (mut app, _rx) = started_app();
    app.on_universes_loaded(Ok(marvel_and_dc()));
    let generation = app.home().store().state().generation;
    app.on_fighters_loaded(generation, Ok(roster()));

    let screen = render(&app);
    for label in ["All", "Marvel", "DC", "Hulk", "Batman", "Thor"] {
        assert!(screen.contains(label), "missing {label}:\n{screen}");
    }
}

#[test]
fn fighter_failure_is_visible() {
    let (mut app, _rx) = started_app();
    app.on_universes_loaded(Ok(marvel_and_dc()));
    let generation = app.home().store().state().generation;
    app.on_fighters_loaded(
        generation,
        Err(ApiError::Status {
            url: "http://127.0.0.1:3000/fighters".to_string(),
            status: 500,
        }),
    );

    let screen = render(&app);
    assert!(
        screen.contains("rejected"),
        "error message not rendered:\n{screen}"
    );
    assert!(screen.contains("unavailable"), "header still says loading:\n{screen}");
}

#[test]
fn detail_screen_shows_selected_fighter() {
    let (mut app, _rx) = started_app();
    app.on_universes_loaded(Ok(marvel_and_dc()));
    let generation = app.home().store().state().generation;
    app.on_fighters_loaded(generation, Ok(roster()));
    assert!(app.open_focused_fighter());

    let screen = render(&app);
    assert!(screen.contains("Hulk"), "{screen}");
    assert!(screen.contains("Marvel"), "{screen}");
}

#[test]
fn tiny_terminal_does_not_panic() {
    let (app, _rx) = started_app();
    let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
    terminal.draw(|frame| draw(frame, &app)).unwrap();
}
