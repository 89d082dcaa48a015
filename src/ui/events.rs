use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::api::ApiError;
use crate::model::{Fighter, Universe};
use crate::shutdown::ShutdownHandle;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Result of a universe list request.
    UniversesLoaded(Result<Vec<Universe>, ApiError>),
    /// Result of a fighters request, tagged with the store generation that
    /// issued it so superseded responses can be dropped.
    FightersLoaded {
        generation: u64,
        result: Result<Vec<Fighter>, ApiError>,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Create the event channel without an input thread.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { rx, tx }
    }

    /// Spawn the terminal input thread that also produces ticks.
    pub fn spawn_input(&self, tick_rate: Duration, shutdown: ShutdownHandle) {
        let event_tx = self.tx.clone();
        thread::spawn(move || input_loop(poll_terminal, &event_tx, tick_rate, &shutdown));
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

fn poll_terminal(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forward input and ticks until shutdown or until the receiver is gone.
///
/// A failing event source signals shutdown: without input the user could
/// not quit otherwise.
fn input_loop<F>(
    mut next_event: F,
    event_tx: &mpsc::Sender<AppEvent>,
    tick_rate: Duration,
    shutdown: &ShutdownHandle,
) where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let mut last_tick = Instant::now();
    while !shutdown.is_shutting_down() {
        // Use short poll timeout to check shutdown flag frequently
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        match next_event(timeout) {
            Ok(Some(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                if event_tx.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
            Ok(Some(Event::Resize(cols, rows))) => {
                let _ = event_tx.send(AppEvent::Resize(cols, rows));
            }
            Ok(_) => {}
            Err(err) => {
                tracing::error!(error = %err, "Terminal input failed");
                shutdown.signal();
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if event_tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
    tracing::debug!("Input thread stopped");
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
