use crate::api::{CatalogApi, FetchWorker};
use crate::config::ConfigStore;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits.
///
/// Network calls run on `runtime`; drawing and input handling stay on the
/// calling thread.
pub fn run(config: ConfigStore, api: Arc<dyn CatalogApi>, runtime: &Handle) -> io::Result<()> {
    let shutdown = ShutdownHandle::new();
    let events = EventHandler::new();
    let mut app = App::new(config);
    let tick_rate = app.config().get().ui.tick_rate();

    let commands = FetchWorker::new(api, events.sender(), shutdown.clone()).spawn(runtime);
    app.attach_worker(commands);
    app.start();

    let (mut terminal, guard) = setup_terminal()?;
    events.spawn_input(tick_rate, shutdown.clone());
    tracing::info!("UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }
        if shutdown.is_shutting_down() {
            tracing::warn!("Input stopped, leaving the UI");
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            // Terminal::draw picks up the new size on its own.
            Ok(AppEvent::Resize(..)) => {}
            Ok(event) => app.on_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
