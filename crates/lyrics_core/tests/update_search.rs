use std::sync::Once;

use lyrics_core::{
    update, Effect, Msg, PanelState, RequestId, ResultView, SearchFailure, SearchOutcome,
    SessionState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(panel_logging::initialize_for_tests);
}

/// Attaches a surface and submits one valid search, returning the state
/// and the request id carried by the emitted fetch effect.
fn searching(artist: &str, title: &str) -> (PanelState, RequestId) {
    let (state, _) = update(PanelState::new(), Msg::SurfaceAttached);
    let (state, effects) = update(
        state,
        Msg::SearchSubmitted {
            artist: artist.to_string(),
            title: title.to_string(),
        },
    );
    let request_id = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchLyrics { request_id, .. } => Some(*request_id),
        })
        .expect("fetch effect");
    (state, request_id)
}

fn complete(
    state: PanelState,
    request_id: RequestId,
    outcome: SearchOutcome,
) -> (PanelState, Vec<Effect>) {
    update(state, Msg::SearchCompleted { request_id, outcome })
}

#[test]
fn successful_search_shows_lyrics_and_reenables_the_control() {
    init_logging();
    let (state, request_id) = searching("Adele", "Hello");
    let (mut state, effects) = complete(
        state,
        request_id,
        SearchOutcome::Success {
            lyrics: Some("Hello, it's me".to_string()),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.session, SessionState::Ready);
    assert!(view.search_enabled);
    assert!(!view.loading);
    assert_eq!(view.result, ResultView::Lyrics("Hello, it's me".to_string()));
    assert!(state.consume_dirty());
}

#[test]
fn lyrics_line_breaks_survive_display() {
    init_logging();
    let (state, request_id) = searching("a", "b");
    let (state, _) = complete(
        state,
        request_id,
        SearchOutcome::Success {
            lyrics: Some("line1\nline2".to_string()),
        },
    );

    assert_eq!(
        state.view().result,
        ResultView::Lyrics("line1\nline2".to_string())
    );
}

#[test]
fn missing_lyrics_shows_the_placeholder() {
    init_logging();
    let (state, request_id) = searching("Unknown Artist", "Unknown Song");
    let (state, _) = complete(state, request_id, SearchOutcome::Success { lyrics: None });

    assert_eq!(state.view().result, ResultView::NoLyricsFound);
    assert_eq!(state.view().session, SessionState::Ready);
}

#[test]
fn empty_lyrics_shows_the_placeholder() {
    init_logging();
    let (state, request_id) = searching("a", "b");
    let (state, _) = complete(
        state,
        request_id,
        SearchOutcome::Success {
            lyrics: Some(String::new()),
        },
    );

    assert_eq!(state.view().result, ResultView::NoLyricsFound);
}

#[test]
fn not_found_shows_its_exact_copy() {
    init_logging();
    let (state, request_id) = searching("Unknown Artist", "Unknown Song");
    let (state, _) = complete(
        state,
        request_id,
        SearchOutcome::Failure(SearchFailure::NotFound),
    );

    assert_eq!(
        state.view().result,
        ResultView::Error("Lyrics not found for this song".to_string())
    );
    assert!(state.view().search_enabled);
}

#[test]
fn other_failures_show_the_generic_copy() {
    init_logging();
    let (state, request_id) = searching("Adele", "Hello");
    let (state, _) = complete(
        state,
        request_id,
        SearchOutcome::Failure(SearchFailure::FetchFailed),
    );

    assert_eq!(
        state.view().result,
        ResultView::Error("Failed to fetch lyrics".to_string())
    );
}

#[test]
fn a_completion_is_consumed_exactly_once() {
    init_logging();
    let (state, request_id) = searching("Adele", "Hello");
    let (mut state, _) = complete(
        state,
        request_id,
        SearchOutcome::Success {
            lyrics: Some("Hello, it's me".to_string()),
        },
    );
    assert!(state.consume_dirty());

    // A duplicate answer no longer matches the consumed request id.
    let (mut state, effects) = complete(
        state,
        request_id,
        SearchOutcome::Failure(SearchFailure::FetchFailed),
    );
    assert!(effects.is_empty());
    assert_eq!(state.view().result, ResultView::Lyrics("Hello, it's me".to_string()));
    assert!(!state.consume_dirty());
}

#[test]
fn superseding_submit_discards_the_first_response() {
    init_logging();
    let (state, first_id) = searching("Adele", "Hello");

    // A second submit while searching supersedes the first request.
    let (state, effects) = update(
        state,
        Msg::SearchSubmitted {
            artist: "Oasis".to_string(),
            title: "Wonderwall".to_string(),
        },
    );
    let second_id = match effects.as_slice() {
        [Effect::FetchLyrics { request_id, .. }] => *request_id,
        other => panic!("expected one fetch effect, got {other:?}"),
    };
    assert_eq!(second_id, first_id + 1);
    let mut state = state;
    assert!(state.consume_dirty());

    // The superseded response arrives first and is dropped without a render.
    let (mut state, _) = complete(
        state,
        first_id,
        SearchOutcome::Success {
            lyrics: Some("Hello, it's me".to_string()),
        },
    );
    assert!(!state.consume_dirty());
    assert_eq!(state.view().session, SessionState::Searching);
    assert_eq!(state.view().result, ResultView::Empty);

    // The current response lands normally.
    let (state, _) = complete(
        state,
        second_id,
        SearchOutcome::Success {
            lyrics: Some("Today is gonna be the day".to_string()),
        },
    );
    assert_eq!(
        state.view().result,
        ResultView::Lyrics("Today is gonna be the day".to_string())
    );
    assert_eq!(state.view().session, SessionState::Ready);
}

#[test]
fn request_ids_increase_across_searches() {
    init_logging();
    let (state, first_id) = searching("Adele", "Hello");
    let (state, _) = complete(state, first_id, SearchOutcome::Success { lyrics: None });

    let (_, effects) = update(
        state,
        Msg::SearchSubmitted {
            artist: "Adele".to_string(),
            title: "Skyfall".to_string(),
        },
    );
    match effects.as_slice() {
        [Effect::FetchLyrics { request_id, .. }] => assert_eq!(*request_id, first_id + 1),
        other => panic!("expected one fetch effect, got {other:?}"),
    }
}
