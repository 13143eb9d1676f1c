use lyrics_core::{PanelState, PanelViewModel, ResultView, NO_LYRICS_PLACEHOLDER};

pub const ARTIST_PROMPT: &str = "Artist name";
pub const TITLE_PROMPT: &str = "Song title";
pub const SEARCHING_TEXT: &str = "Searching for lyrics...";

/// One terminal paint of the panel: the loading notice, the result region
/// and the error region. At most one region is populated per frame.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub loading: bool,
    pub result: Option<String>,
    pub error: Option<String>,
}

pub fn render_if_dirty(state: &mut PanelState) {
    if !state.consume_dirty() {
        return;
    }
    print_frame(&frame(&state.view()));
}

pub fn frame(view: &PanelViewModel) -> Frame {
    let (result, error) = match &view.result {
        ResultView::Empty => (None, None),
        ResultView::Lyrics(text) => (Some(text.clone()), None),
        ResultView::NoLyricsFound => (Some(NO_LYRICS_PLACEHOLDER.to_owned()), None),
        ResultView::Error(message) => (None, Some(message.clone())),
    };
    Frame {
        loading: view.loading,
        result,
        error,
    }
}

fn print_frame(frame: &Frame) {
    if frame.loading {
        println!("{SEARCHING_TEXT}");
        return;
    }
    if let Some(error) = &frame.error {
        eprintln!("{error}");
    }
    if let Some(result) = &frame.result {
        println!("{result}");
    }
}
