use crate::RequestId;

/// Side effects the host must execute on behalf of the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Look up lyrics for a trimmed, non-empty artist/title pair. The
    /// engine must answer with exactly one `SearchCompleted` message
    /// echoing `request_id`.
    FetchLyrics {
        request_id: RequestId,
        artist: String,
        title: String,
    },
}
