//! Session - the controller wired to its collaborators
//!
//! The rules engine never performs I/O itself. A [`Session`] owns one
//! [`GameState`] together with three collaborators and calls into them at
//! the points the game defines:
//!
//! - [`Renderer`]: once at start, after every accepted move, after a restart
//! - [`AudioSink`]: `merge_occurred` once per accepted move with at least one
//!   merge; `game_ended` on the move that reaches `Won` or `Lost`
//! - [`ScoreStore`]: read once at start, written whenever the current score
//!   exceeds the stored best
//!
//! All collaborator calls are fire-and-forget. Implementations swallow (and
//! log) their own failures.

use crate::game_state::{GameState, MoveReport};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameEvent, GameStatus};

/// Draws the current game
pub trait Renderer {
    fn render(&mut self, snap: &GameSnapshot);
}

/// Plays feedback sounds
pub trait AudioSink {
    fn merge_occurred(&mut self);
    /// `status` is `Won` or `Lost`
    fn game_ended(&mut self, status: GameStatus);
}

/// Persists the best score across games and processes
pub trait ScoreStore {
    /// Stored best score; 0 when nothing is stored or the store is unreadable
    fn load(&mut self) -> u32;
    fn save(&mut self, best: u32);
}

/// Audio sink that plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn merge_occurred(&mut self) {}
    fn game_ended(&mut self, _status: GameStatus) {}
}

impl<A: AudioSink + ?Sized> AudioSink for Box<A> {
    fn merge_occurred(&mut self) {
        (**self).merge_occurred();
    }

    fn game_ended(&mut self, status: GameStatus) {
        (**self).game_ended(status);
    }
}

/// Score store that lives only as long as the process
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryScoreStore {
    best: u32,
}

impl MemoryScoreStore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> u32 {
        self.best
    }

    fn save(&mut self, best: u32) {
        self.best = best;
    }
}

/// One running game plus the collaborators it reports to
pub struct Session<R, A, S> {
    game: GameState,
    snap: GameSnapshot,
    best_score: u32,
    renderer: R,
    audio: A,
    store: S,
}

impl<R: Renderer, A: AudioSink, S: ScoreStore> Session<R, A, S> {
    /// Read the best score and draw the opening position
    pub fn start(game: GameState, renderer: R, audio: A, mut store: S) -> Self {
        let best_score = store.load();
        let mut session = Self {
            game,
            snap: GameSnapshot::default(),
            best_score,
            renderer,
            audio,
            store,
        };
        session.render();
        session
    }

    /// Apply one input action and notify collaborators.
    pub fn handle(&mut self, action: GameAction) -> GameEvent {
        match action {
            GameAction::Slide(direction) => {
                let report = self.game.apply_move(direction);
                self.after_move(report);
                report.event
            }
            GameAction::Restart => {
                self.game.reset();
                self.render();
                GameEvent::None
            }
        }
    }

    fn after_move(&mut self, report: MoveReport) {
        if !report.accepted {
            return;
        }

        if self.game.score() > self.best_score {
            self.best_score = self.game.score();
            self.store.save(self.best_score);
        }
        if report.merged() {
            self.audio.merge_occurred();
        }
        self.render();
        if let Some(status) = report.event.status() {
            tracing::debug!(status = status.as_str(), score = self.game.score(), "game ended");
            self.audio.game_ended(status);
        }
    }

    /// Draw again without changing state (e.g. after a terminal resize)
    pub fn redraw(&mut self) {
        self.render();
    }

    fn render(&mut self) {
        self.game.snapshot_into(&mut self.snap);
        self.snap.best_score = self.best_score;
        self.renderer.render(&self.snap);
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// The snapshot most recently handed to the renderer
    pub fn last_snapshot(&self) -> &GameSnapshot {
        &self.snap
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}
