//! Background worker that runs catalog requests on the tokio runtime.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::client::CatalogApi;
use crate::model::UniverseFilter;
use crate::shutdown::ShutdownHandle;
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 16;

/// Requests the UI sends to the worker.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchCommand {
    FetchUniverses,
    /// Fetch fighters; `generation` is echoed back with the result.
    FetchFighters {
        generation: u64,
        filter: UniverseFilter,
    },
}

pub type FetchCommandSender = mpsc::Sender<FetchCommand>;

pub struct FetchWorker {
    api: Arc<dyn CatalogApi>,
    events: std_mpsc::Sender<AppEvent>,
    shutdown: ShutdownHandle,
}

impl FetchWorker {
    pub fn new(
        api: Arc<dyn CatalogApi>,
        events: std_mpsc::Sender<AppEvent>,
        shutdown: ShutdownHandle,
    ) -> Self {
        Self {
            api,
            events,
            shutdown,
        }
    }

    /// Start the worker on `runtime` and return the command channel.
    pub fn spawn(self, runtime: &Handle) -> FetchCommandSender {
        let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
        runtime.spawn(self.run(receiver));
        sender
    }

    async fn run(self, mut commands: mpsc::Receiver<FetchCommand>) {
        // Only the newest fighters request is worth finishing.
        let mut fighters_task: Option<JoinHandle<()>> = None;

        loop {
            let command = tokio::select! {
                _ = self.shutdown.wait() => break,
                command = commands.recv() => match command {
                    Some(command) => command,
                    None => break,
                },
            };

            match command {
                FetchCommand::FetchUniverses => {
                    let request = self.api.fetch_universes();
                    let events = self.events.clone();
                    tokio::spawn(async move {
                        let result = request.await;
                        if let Err(err) = &result {
                            tracing::warn!(error = %err, "Universe fetch failed");
                        }
                        let _ = events.send(AppEvent::UniversesLoaded(result));
                    });
                }
                FetchCommand::FetchFighters { generation, filter } => {
                    if let Some(previous) = fighters_task.take() {
                        if !previous.is_finished() {
                            tracing::debug!(generation, "Aborting superseded fighters request");
                            previous.abort();
                        }
                    }

                    let request = self.api.fetch_fighters(&filter);
                    let events = self.events.clone();
                    fighters_task = Some(tokio::spawn(async move {
                        let result = request.await;
                        match &result {
                            Ok(fighters) => tracing::debug!(
                                generation,
                                universe = %filter,
                                count = fighters.len(),
                                "Fighters fetched"
                            ),
                            Err(err) => tracing::warn!(
                                generation,
                                universe = %filter,
                                error = %err,
                                "Fighters fetch failed"
                            ),
                        }
                        let _ = events.send(AppEvent::FightersLoaded { generation, result });
                    }));
                }
            }
        }

        if let Some(task) = fighters_task {
            task.abort();
        }
        tracing::debug!("Fetch worker stopped");
    }
}
