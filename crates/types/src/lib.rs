//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no logic beyond lookups, making them usable
//! in any context (rules engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 4x4 square addressed as `(row, col)`, both
//! indexed 0-3, row 0 at the top and column 0 at the left.
//!
//! # Tile Progression
//!
//! | Kind | Values | Merge partner | Result |
//! |------|--------|---------------|--------|
//! | `Normal` | `FIB_SEQUENCE` | equal `Normal` | next value in the sequence |
//! | `Normal` | `FIB_SEQUENCE` | `Forge` | `Forged(value * 2)` |
//! | `Forged` | any positive | equal `Forged` | `Forged(value * 2)` |
//! | `Forge` | none | `Normal` | see above |
//!
//! # Spawn Weights
//!
//! | Tile | Probability |
//! |------|-------------|
//! | `Forge` | 5% |
//! | `Normal(1)` | 85.5% (90% of the non-Forge draws) |
//! | `Normal(2)` | 9.5% |
//!
//! # Examples
//!
//! ```
//! use forge_2048_types::{next_fib, Direction, Tile, WIN_VALUE};
//!
//! assert_eq!(next_fib(1), 2);
//! assert_eq!(next_fib(89), WIN_VALUE);
//! assert_eq!(next_fib(WIN_VALUE), WIN_VALUE);
//!
//! assert_eq!(Tile::Normal(5).value(), Some(5));
//! assert_eq!(Tile::Forge.value(), None);
//!
//! assert_eq!(Direction::from_str("up"), Some(Direction::Up));
//! ```

use serde::{Deserialize, Serialize};

/// Side length of the square board (4 cells)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of tiles placed on a fresh board
pub const INITIAL_TILES: usize = 2;

/// Value progression for `Normal` tiles.
///
/// Fibonacci with a single leading 1, so that merging two 1s yields 2.
pub const FIB_SEQUENCE: [u32; 11] = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];

/// Reaching this value on a `Normal` or `Forged` tile wins the game
pub const WIN_VALUE: u32 = 144;

/// Probability that a spawned tile is a `Forge`
pub const FORGE_SPAWN_PROBABILITY: f64 = 0.05;

/// Probability that a non-Forge spawn is `Normal(1)` (otherwise `Normal(2)`)
pub const ONE_SPAWN_PROBABILITY: f64 = 0.9;

/// Minimum swipe displacement, in input units, along the dominant axis
pub const SWIPE_THRESHOLD: i32 = 20;

/// Next value in the `Normal` progression.
///
/// Values outside the sequence and the final value (144) are returned
/// unchanged.
pub fn next_fib(value: u32) -> u32 {
    match FIB_SEQUENCE.iter().position(|&v| v == value) {
        Some(idx) if idx + 1 < FIB_SEQUENCE.len() => FIB_SEQUENCE[idx + 1],
        _ => value,
    }
}

/// A single board cell.
///
/// `Empty` is the default, unoccupied state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Tile {
    #[default]
    Empty,
    /// Fibonacci-progression tile
    Normal(u32),
    /// Special tile without a value; forges a `Normal` it merges with
    Forge,
    /// Result of forging; doubles on each further merge
    Forged(u32),
}

impl Tile {
    pub fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    /// Numeric value carried by the tile, if any
    pub fn value(&self) -> Option<u32> {
        match *self {
            Tile::Normal(v) | Tile::Forged(v) => Some(v),
            Tile::Empty | Tile::Forge => None,
        }
    }

    /// Text shown on the tile face
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_2048_types::Tile;
    ///
    /// assert_eq!(Tile::Normal(13).label(), "13");
    /// assert_eq!(Tile::Forge.label(), "Forge");
    /// assert_eq!(Tile::Empty.label(), "");
    /// ```
    pub fn label(&self) -> String {
        match self {
            Tile::Empty => String::new(),
            Tile::Forge => "Forge".to_string(),
            Tile::Normal(v) | Tile::Forged(v) => v.to_string(),
        }
    }

    /// True for tiles that reached the winning value
    pub fn is_winning(&self) -> bool {
        self.value() == Some(WIN_VALUE)
    }
}

/// Slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use forge_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Rows are slid by Left/Right, columns by Up/Down
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Right/Down slide toward the high index end of a line
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Game lifecycle states
///
/// `Won` and `Lost` are terminal until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Terminal transition reported by a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameEvent {
    #[default]
    None,
    Won,
    Lost,
}

impl GameEvent {
    /// The status a terminal event moved the game into
    pub fn status(&self) -> Option<GameStatus> {
        match self {
            GameEvent::None => None,
            GameEvent::Won => Some(GameStatus::Won),
            GameEvent::Lost => Some(GameStatus::Lost),
        }
    }
}

/// Actions that can be applied to a running game
///
/// Produced by the input layer, consumed by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile toward one edge
    Slide(Direction),
    /// Discard the current game and start a fresh one
    Restart,
}

/// Board coordinate as `(row, col)`
pub type Pos = (usize, usize);
