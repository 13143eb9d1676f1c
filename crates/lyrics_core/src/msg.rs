use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host attached a rendering surface; the panel renders its empty form.
    SurfaceAttached,
    /// Host disposed the rendering surface.
    SurfaceDetached,
    /// User submitted the search form (button click or Enter in a field).
    /// Fields arrive untrimmed, exactly as typed.
    SearchSubmitted { artist: String, title: String },
    /// The lookup engine answered the request with this id.
    SearchCompleted {
        request_id: RequestId,
        outcome: SearchOutcome,
    },
    /// Fallback for wiring that carries no behavior.
    NoOp,
}

/// Terminal outcome of one lyrics lookup, as delivered to the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The service answered the request. `lyrics` is `None` when the body
    /// carried no usable lyrics field.
    Success { lyrics: Option<String> },
    /// The lookup failed.
    Failure(SearchFailure),
}

/// User-facing failure classes. Every engine-side failure collapses into
/// one of these before it reaches the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFailure {
    /// The service has no entry for this artist/title pair.
    NotFound,
    /// Any other network, HTTP, or response-body failure.
    FetchFailed,
}
