//! Lyrics panel core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, SearchFailure, SearchOutcome};
pub use state::{PanelState, RequestId, SessionState};
pub use update::update;
pub use view_model::{
    PanelViewModel, ResultView, FETCH_FAILED_TEXT, NOT_FOUND_TEXT, NO_LYRICS_PLACEHOLDER,
    VALIDATION_ERROR_TEXT,
};
