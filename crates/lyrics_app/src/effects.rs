use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use lyrics_core::{Effect, Msg, SearchFailure, SearchOutcome};
use lyrics_engine::{EngineEvent, EngineHandle, LookupError, LookupSettings, LyricsBody, RequestId};
use panel_logging::{panel_info, panel_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: LookupSettings, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(settings);
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchLyrics {
                    request_id,
                    artist,
                    title,
                } => {
                    panel_info!(
                        "FetchLyrics request_id={request_id} artist={artist:?} title={title:?}"
                    );
                    self.engine.lookup(request_id, artist, title);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let EngineEvent::LookupCompleted { request_id, result } = event;
                let msg = Msg::SearchCompleted {
                    request_id,
                    outcome: map_result(request_id, result),
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_result(request_id: RequestId, result: Result<LyricsBody, LookupError>) -> SearchOutcome {
    match result {
        Ok(body) => SearchOutcome::Success { lyrics: body.lyrics },
        Err(LookupError::NotFound) => SearchOutcome::Failure(SearchFailure::NotFound),
        Err(err) => {
            panel_warn!("Lookup {request_id} failed: {err}");
            SearchOutcome::Failure(SearchFailure::FetchFailed)
        }
    }
}
