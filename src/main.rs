//! Terminal Forge 2048 runner (default binary).
//!
//! Uses crossterm for input (keys and mouse drags) and the framebuffer-based
//! renderer from `forge_2048::term`. The game is turn-based, so the loop
//! simply blocks on the next terminal event.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use forge_2048::core::{random_seed, AudioSink, GameState, Session};
use forge_2048::input::{handle_key_event, should_quit, SwipeTracker};
use forge_2048::term::{audio_sink, GameView, TerminalRenderer, TerminalScreen};
use forge_2048::{logging, AppConfig, JsonScoreStore};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;

    let seed = config.seed.unwrap_or_else(random_seed);
    tracing::info!(seed, best_score_path = %config.best_score_path.display(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let screen = TerminalScreen::new(term, GameView::default());
    let mut session = Session::start(
        GameState::new(seed),
        screen,
        audio_sink(config.audio_enabled),
        JsonScoreStore::new(&config.best_score_path),
    );
    let mut swipe = SwipeTracker::with_threshold(config.swipe_threshold);

    let result = run(&mut session, &mut swipe);

    // Always try to restore terminal state.
    let _ = session.renderer_mut().renderer_mut().exit();
    tracing::info!(
        score = session.game().score(),
        best_score = session.best_score(),
        "exiting"
    );
    result
}

type TermSession = Session<TerminalScreen, Box<dyn AudioSink>, JsonScoreStore>;

fn run(session: &mut TermSession, swipe: &mut SwipeTracker) -> Result<()> {
    loop {
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => swipe.handle_mouse_event(mouse),
            Event::Resize(_, _) => {
                session.renderer_mut().invalidate();
                session.redraw();
                None
            }
            _ => None,
        };

        if let Some(action) = action {
            session.handle(action);
        }
    }
}
