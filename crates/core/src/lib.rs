//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and tile
//! spawning. It has **no dependencies** on terminal I/O, audio or storage:
//!
//! - **Deterministic**: Same seed and same moves produce identical games
//! - **Testable**: Every rule is a pure function over [`Board`]
//! - **Portable**: Rendering, audio and persistence are plugged in through
//!   the traits in [`session`]
//! - **Allocation-free**: Boards are fixed-size arrays and copy cheaply
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid of tiles with read-only public access
//! - [`merge`]: slide-and-merge of lines and whole boards
//! - [`spawn`]: random tile placement with fixed weights
//! - [`rules`]: win and loss evaluation
//! - [`game_state`]: controller state machine (Playing / Won / Lost)
//! - [`session`]: controller wired to renderer, audio and score store
//! - [`rng`]: seedable RNG construction
//!
//! # Game Rules
//!
//! - Tiles slide toward the chosen edge; each line is processed alone
//! - Equal `Normal` tiles advance one step along 1, 2, 3, 5, 8, ... 144
//! - A `Forge` merging with a `Normal(v)` becomes `Forged(2v)`
//! - Equal `Forged` tiles double
//! - A tile produced by a merge does not merge again in the same move
//! - Every merge adds its result's value to the score
//! - One tile spawns after every move that changed the board
//! - Any 144 wins; a full board with no mergeable neighbours loses
//!
//! # Example
//!
//! ```
//! use forge_2048_core::GameState;
//! use forge_2048_types::{Direction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.board().tile_count(), 2);
//!
//! let report = game.apply_move(Direction::Left);
//! if report.accepted {
//!     assert!(game.moves() == 1);
//! }
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

pub mod board;
pub mod game_state;
pub mod merge;
pub mod rng;
pub mod rules;
pub mod session;
pub mod snapshot;
pub mod spawn;

pub use forge_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameState, MoveReport};
pub use merge::{apply_move, can_merge, merge_tiles, slide_and_merge, LineMerge, MoveOutcome};
pub use rng::{random_seed, seeded, GameRng};
pub use rules::{check_loss, check_win, evaluate};
pub use session::{AudioSink, MemoryScoreStore, Renderer, ScoreStore, Session, SilentAudio};
pub use snapshot::GameSnapshot;
pub use spawn::{random_tile, spawn_tile};
