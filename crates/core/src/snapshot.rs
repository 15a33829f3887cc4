use crate::types::{GameStatus, Tile, BOARD_SIZE};

/// Copyable view of a game, handed to renderers and observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Tile; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub best_score: u32,
    pub status: GameStatus,
    pub moves: u32,
    pub episode: u32,
    pub seed: u64,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Tile::Empty; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            best_score: 0,
            status: GameStatus::Playing,
            moves: 0,
            episode: 0,
            seed: 0,
        }
    }
}
