use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use anyhow::Context;
use lyrics_core::{update, Msg, PanelState, SessionState};
use lyrics_engine::LookupSettings;
use panel_logging::panel_info;

use crate::effects::EffectRunner;
use crate::logging::{self, LogDestination};
use crate::render;

/// Slot name the panel surface is registered under.
const PANEL_SLOT: &str = "lyricsSearchView";

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env());

    let settings = lookup_settings_from_env();
    panel_info!(
        "Registering lyrics panel in slot {PANEL_SLOT}, service {}",
        settings.base_url
    );

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings, msg_tx);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = PanelState::new();

    state = dispatch(state, Msg::SurfaceAttached, &runner);
    render::render_if_dirty(&mut state);

    loop {
        let Some(artist) = prompt(render::ARTIST_PROMPT, &mut lines)? else {
            break;
        };
        if artist.trim() == "quit" {
            break;
        }
        let Some(title) = prompt(render::TITLE_PROMPT, &mut lines)? else {
            break;
        };

        state = dispatch(state, Msg::SearchSubmitted { artist, title }, &runner);
        render::render_if_dirty(&mut state);

        // The surface's search control stays disabled until the completion
        // lands, so the next prompt waits here.
        while state.session() == SessionState::Searching {
            let msg = msg_rx.recv().context("engine event channel closed")?;
            state = dispatch(state, msg, &runner);
            render::render_if_dirty(&mut state);
        }
    }

    dispatch(state, Msg::SurfaceDetached, &runner);
    panel_info!("Lyrics panel in slot {PANEL_SLOT} disposed");
    Ok(())
}

fn dispatch(state: PanelState, msg: Msg, runner: &EffectRunner) -> PanelState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

fn prompt(
    label: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("flush prompt")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("read prompt input")?)),
        None => Ok(None),
    }
}

fn lookup_settings_from_env() -> LookupSettings {
    let mut settings = LookupSettings::default();
    if let Ok(base) = std::env::var("LYRICS_API_BASE") {
        if !base.trim().is_empty() {
            settings.base_url = base;
        }
    }
    settings
}
