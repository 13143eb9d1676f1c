use crate::msg::{SearchFailure, SearchOutcome};
use crate::view_model::{PanelViewModel, ResultView, FETCH_FAILED_TEXT, NOT_FOUND_TEXT};

/// Identifier of one accepted search, echoed by its completion.
pub type RequestId = u64;

/// Lifecycle of the rendering surface this panel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No rendering surface attached.
    #[default]
    Unattached,
    /// Form rendered, no request in flight.
    Ready,
    /// One lookup dispatched and not yet answered.
    Searching,
}

/// State of one panel session. Mutated only through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelState {
    session: SessionState,
    result: ResultView,
    current_request: Option<RequestId>,
    last_request_id: RequestId,
    dirty: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot handed to the rendering surface.
    pub fn view(&self) -> PanelViewModel {
        PanelViewModel {
            session: self.session,
            search_enabled: self.session == SessionState::Ready,
            loading: self.session == SessionState::Searching,
            result: self.result.clone(),
            dirty: self.dirty,
        }
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    /// Returns the dirty flag and clears it. Hosts call this after a
    /// dispatch to decide whether a render is due.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    /// A surface attach always yields a fresh `Ready` session with an
    /// empty result region, even if an earlier surface never detached.
    pub(crate) fn attach_surface(&mut self) {
        self.session = SessionState::Ready;
        self.result = ResultView::Empty;
        self.current_request = None;
        self.dirty = true;
    }

    /// Drops the surface. An in-flight lookup keeps running; its
    /// completion no longer matches any current request and is discarded.
    pub(crate) fn detach_surface(&mut self) {
        self.session = SessionState::Unattached;
        self.result = ResultView::Empty;
        self.current_request = None;
        self.dirty = true;
    }

    pub(crate) fn show_validation_error(&mut self, message: &str) {
        self.result = ResultView::Error(message.to_string());
        self.dirty = true;
    }

    /// Allocates the next request id and moves the session to `Searching`.
    /// A submit that lands while a lookup is already in flight supersedes
    /// it: the old id stops matching and its completion is dropped.
    pub(crate) fn begin_search(&mut self) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.current_request = Some(request_id);
        self.session = SessionState::Searching;
        self.result = ResultView::Empty;
        self.dirty = true;
        request_id
    }

    /// Applies a completion if it answers the current request; stale ids
    /// leave the panel untouched. Returns whether the panel changed.
    pub(crate) fn apply_completion(&mut self, request_id: RequestId, outcome: SearchOutcome) -> bool {
        if self.current_request != Some(request_id) {
            return false;
        }
        self.current_request = None;
        self.session = SessionState::Ready;
        self.result = match outcome {
            SearchOutcome::Success { lyrics: Some(text) } if !text.is_empty() => {
                ResultView::Lyrics(text)
            }
            SearchOutcome::Success { .. } => ResultView::NoLyricsFound,
            SearchOutcome::Failure(SearchFailure::NotFound) => {
                ResultView::Error(NOT_FOUND_TEXT.to_string())
            }
            SearchOutcome::Failure(SearchFailure::FetchFailed) => {
                ResultView::Error(FETCH_FAILED_TEXT.to_string())
            }
        };
        self.dirty = true;
        true
    }
}
