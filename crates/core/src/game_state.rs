//! Game state module - the controller state machine
//!
//! Ties together the board, merge engine, spawner and evaluator. Owns the
//! single mutable board, the score and the spawn RNG.
//!
//! ```text
//!            move (changed)             win / loss
//!  Playing ──────────────────▶ Playing ────────────▶ Won | Lost
//!     ▲                                                   │
//!     └──────────────────────── reset ────────────────────┘
//! ```

use crate::board::Board;
use crate::merge::apply_move;
use crate::rng::{seeded, GameRng};
use crate::rules::evaluate;
use crate::snapshot::GameSnapshot;
use crate::spawn::spawn_tile;
use crate::types::{Direction, GameEvent, GameStatus, Pos, INITIAL_TILES};

/// What a single `apply_move` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveReport {
    /// Terminal transition caused by this move, if any
    pub event: GameEvent,
    /// The move changed the board and was committed
    pub accepted: bool,
    /// Number of tile merges
    pub merges: u32,
    pub score_delta: u32,
    /// Cell filled by the post-move spawn
    pub spawned: Option<Pos>,
}

impl MoveReport {
    pub fn merged(&self) -> bool {
        self.merges > 0
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: GameRng,
    seed: u64,
    score: u32,
    status: GameStatus,
    /// Accepted moves since the last reset.
    moves: u32,
    /// Monotonic episode id (increments on reset).
    episode: u32,
}

impl GameState {
    /// Start a fresh game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            board: Board::new(),
            rng: seeded(seed),
            seed,
            score: 0,
            status: GameStatus::Playing,
            moves: 0,
            episode: 0,
        };
        state.spawn_initial();
        state
    }

    /// Resume from an existing position with a zero score.
    ///
    /// The position is evaluated immediately, so a board that is already
    /// won or lost starts in that terminal state.
    pub fn with_board(board: Board, seed: u64) -> Self {
        Self {
            board,
            rng: seeded(seed),
            seed,
            score: 0,
            status: evaluate(&board),
            moves: 0,
            episode: 0,
        }
    }

    fn spawn_initial(&mut self) {
        for _ in 0..INITIAL_TILES {
            spawn_tile(&mut self.board, &mut self.rng);
        }
        debug_assert_eq!(self.board.tile_count(), INITIAL_TILES);
    }

    /// Discard the current game and start over.
    ///
    /// The RNG stream continues, so consecutive games differ.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.score = 0;
        self.status = GameStatus::Playing;
        self.moves = 0;
        self.episode = self.episode.wrapping_add(1);
        self.spawn_initial();
        tracing::debug!(episode = self.episode, "game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Slide, merge, spawn and evaluate.
    ///
    /// Moves that do not change the board, and any move after the game has
    /// ended, are ignored and return a default report.
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        if self.status.is_terminal() {
            return MoveReport::default();
        }

        let outcome = apply_move(&self.board, direction);
        if !outcome.changed {
            return MoveReport::default();
        }

        debug_assert!(outcome.board.tile_count() <= self.board.tile_count());

        self.board = outcome.board;
        self.score = self.score.saturating_add(outcome.score_delta);
        self.moves += 1;
        let spawned = spawn_tile(&mut self.board, &mut self.rng);

        self.status = evaluate(&self.board);
        let event = match self.status {
            GameStatus::Playing => GameEvent::None,
            GameStatus::Won => GameEvent::Won,
            GameStatus::Lost => GameEvent::Lost,
        };

        tracing::debug!(
            direction = direction.as_str(),
            merges = outcome.merges,
            score_delta = outcome.score_delta,
            score = self.score,
            status = self.status.as_str(),
            "move applied"
        );

        MoveReport {
            event,
            accepted: true,
            merges: outcome.merges,
            score_delta: outcome.score_delta,
            spawned,
        }
    }

    /// Copy the current state into an existing snapshot.
    ///
    /// `best_score` is left untouched; it belongs to the score store.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.rows();
        out.score = self.score;
        out.status = self.status;
        out.moves = self.moves;
        out.episode = self.episode;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
