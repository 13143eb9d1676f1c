use crate::view_model::VALIDATION_ERROR_TEXT;
use crate::{Effect, Msg, PanelState, SessionState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Hosts run the effects and eventually feed a `SearchCompleted` back in;
/// nothing here performs IO.
pub fn update(mut state: PanelState, msg: Msg) -> (PanelState, Vec<Effect>) {
    let effects = match msg {
        Msg::SurfaceAttached => {
            state.attach_surface();
            Vec::new()
        }
        Msg::SurfaceDetached => {
            state.detach_surface();
            Vec::new()
        }
        Msg::SearchSubmitted { artist, title } => {
            // Without a surface there is no form; nothing to submit.
            if state.session() == SessionState::Unattached {
                return (state, Vec::new());
            }
            let artist = artist.trim();
            let title = title.trim();
            if artist.is_empty() || title.is_empty() {
                // Rejected before any request exists; the engine never
                // hears about it.
                state.show_validation_error(VALIDATION_ERROR_TEXT);
                return (state, Vec::new());
            }
            let request_id = state.begin_search();
            vec![Effect::FetchLyrics {
                request_id,
                artist: artist.to_string(),
                title: title.to_string(),
            }]
        }
        Msg::SearchCompleted {
            request_id,
            outcome,
        } => {
            state.apply_completion(request_id, outcome);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
