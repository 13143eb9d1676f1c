use serde::Deserialize;

/// Identifier echoed between a lookup command and its completion event.
pub type RequestId = u64;

/// Parsed body of a lookup response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LyricsBody {
    /// Lyrics text, whitespace preserved. `None` when the service answered
    /// without a usable lyrics field, which the panel shows as "no lyrics
    /// found" rather than as an error.
    #[serde(default)]
    pub lyrics: Option<String>,
}

/// Events the engine reports back to its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Exactly one of these is emitted per accepted lookup command.
    LookupCompleted {
        request_id: RequestId,
        result: Result<LyricsBody, LookupError>,
    },
}

/// Failure taxonomy of one lyrics lookup. `NotFound` is the only variant
/// with dedicated user copy; everything else surfaces as a generic fetch
/// failure and exists for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The service has no lyrics for this artist/title pair (HTTP 404).
    #[error("lyrics not found")]
    NotFound,
    /// The configured base URL cannot carry lookup path segments.
    #[error("invalid lookup url: {0}")]
    InvalidUrl(String),
    /// Any other non-success status.
    #[error("http status {0}")]
    HttpStatus(u16),
    /// The connect or request phase timed out.
    #[error("request timed out")]
    Timeout,
    /// A success status whose body was not the expected JSON shape.
    #[error("malformed response body: {0}")]
    MalformedBody(String),
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),
}
