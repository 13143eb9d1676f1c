//! Lyrics lookup engine: the HTTP client and the command/event bridge
//! hosts drive it through.
mod client;
mod engine;
mod types;

pub use client::{lookup_url, LookupSettings, LyricsLookup, OvhLyricsClient};
pub use engine::EngineHandle;
pub use types::{EngineEvent, LookupError, LyricsBody, RequestId};
