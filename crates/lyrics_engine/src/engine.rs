use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::client::{LookupSettings, LyricsLookup, OvhLyricsClient};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Lookup {
        request_id: RequestId,
        artist: String,
        title: String,
    },
}

/// Handle to the lookup thread. Cheap to clone; every clone feeds the same
/// command queue and drains the same event queue.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: LookupSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(OvhLyricsClient::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                // Commands run concurrently; overlapping lookups each still
                // produce their own completion.
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    /// Queues one lookup. The engine answers with exactly one
    /// `LookupCompleted` event carrying the same id.
    pub fn lookup(
        &self,
        request_id: RequestId,
        artist: impl Into<String>,
        title: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Lookup {
            request_id,
            artist: artist.into(),
            title: title.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    client: &dyn LyricsLookup,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Lookup {
            request_id,
            artist,
            title,
        } => {
            log::debug!("lookup {request_id}: {artist:?} / {title:?}");
            let result = client.fetch_lyrics(&artist, &title).await;
            if let Err(err) = &result {
                log::debug!("lookup {request_id} failed: {err}");
            }
            let _ = event_tx.send(EngineEvent::LookupCompleted { request_id, result });
        }
    }
}
