use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use gallery_logging::gallery_error;

use crate::config::{EngineConfig, ManifestLocation};
use crate::fetch::{DefaultLoader, ManifestLoader};
use crate::{EngineEvent, FailureKind, LoadError};

enum EngineCommand {
    Load { location: ManifestLocation },
}

/// Runs manifest loads on a background tokio runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_loader(Arc::new(DefaultLoader::new(config.fetch)))
    }

    pub fn with_loader(loader: Arc<dyn ManifestLoader>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    gallery_error!("failed to start loader runtime: {err}");
                    while let Ok(EngineCommand::Load { location }) = cmd_rx.recv() {
                        let result = Err(LoadError::new(
                            FailureKind::Io,
                            format!("loader runtime unavailable: {err}"),
                        ));
                        let _ = event_tx.send(EngineEvent::ManifestLoaded { location, result });
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let loader = loader.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(loader.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn load(&self, location: ManifestLocation) {
        let _ = self.cmd_tx.send(EngineCommand::Load { location });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Block until the next event, or `None` after `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    loader: &dyn ManifestLoader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Load { location } => {
            let result = loader.load(&location).await;
            let _ = event_tx.send(EngineEvent::ManifestLoaded { location, result });
        }
    }
}
