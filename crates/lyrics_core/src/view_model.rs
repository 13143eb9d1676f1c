use crate::SessionState;

/// Inline error shown when a field is empty at submit time.
pub const VALIDATION_ERROR_TEXT: &str = "Please enter both artist and song title";
/// Error copy for a lookup the service answered with "not found".
pub const NOT_FOUND_TEXT: &str = "Lyrics not found for this song";
/// Error copy for every other lookup failure.
pub const FETCH_FAILED_TEXT: &str = "Failed to fetch lyrics";
/// Result-region copy for a lookup that succeeded without usable lyrics.
pub const NO_LYRICS_PLACEHOLDER: &str = "No lyrics found";

/// Content of the result region. This is the panel-to-surface half of the
/// message protocol, expressed as a tagged union instead of a pair of
/// optional fields so exactly one display state holds at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultView {
    /// Nothing to show: fresh panel, or cleared while a lookup runs.
    #[default]
    Empty,
    /// Lyrics text, rendered verbatim with whitespace preserved.
    Lyrics(String),
    /// The search finished but produced no usable lyrics.
    NoLyricsFound,
    /// Error copy, rendered in the error style.
    Error(String),
}

/// Snapshot handed to the rendering surface after each dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelViewModel {
    pub session: SessionState,
    /// Whether the search control accepts a submit.
    pub search_enabled: bool,
    /// Whether the loading indicator is visible.
    pub loading: bool,
    pub result: ResultView,
    pub dirty: bool,
}
