//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell holds exactly one [`Tile`].
//! Uses a flat array for zero-allocation copies and comparisons.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom) and
//! col ranges 0..3 (left to right).
//!
//! External code can read the board freely but cannot mutate it; only the
//! merge engine and the spawner write cells.

use arrayvec::ArrayVec;

use crate::types::{Direction, Pos, Tile, BOARD_SIZE, CELL_COUNT};

/// One row or column, ordered toward the edge tiles slide into
pub(crate) type Line = [Tile; BOARD_SIZE];

/// The game board - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Tile; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Tile::Empty; CELL_COUNT],
        }
    }

    /// Build a board from explicit rows (top row first)
    pub fn from_rows(rows: [[Tile; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut cells = [Tile::Empty; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            cells[r * BOARD_SIZE..(r + 1) * BOARD_SIZE].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if (row, col) is on the board and holds no tile
    pub fn is_empty(&self, (row, col): Pos) -> bool {
        matches!(self.get(row, col), Some(Tile::Empty))
    }

    /// All unoccupied cells in row-major order
    pub fn empty_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_empty())
            .map(|(idx, _)| (idx / BOARD_SIZE, idx % BOARD_SIZE))
            .collect()
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|t| !t.is_empty()).count()
    }

    /// Largest value carried by any tile (0 when no tile carries one)
    pub fn max_value(&self) -> u32 {
        self.cells.iter().filter_map(Tile::value).max().unwrap_or(0)
    }

    /// Copy out the grid as rows (top row first)
    pub fn rows(&self) -> [[Tile; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[Tile::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[r * BOARD_SIZE..(r + 1) * BOARD_SIZE]);
        }
        rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Write a single cell. Out-of-bounds writes are a logic defect.
    pub(crate) fn set(&mut self, (row, col): Pos, tile: Tile) {
        match Self::index(row, col) {
            Some(idx) => self.cells[idx] = tile,
            None => debug_assert!(false, "cell ({row}, {col}) is off the board"),
        }
    }

    /// Flat indices of line `index`, ordered so the slide moves toward
    /// position 0 of the returned array.
    fn line_indices(direction: Direction, index: usize) -> [usize; BOARD_SIZE] {
        let mut out = [0usize; BOARD_SIZE];
        for (k, slot) in out.iter_mut().enumerate() {
            let along = if direction.is_reversed() {
                BOARD_SIZE - 1 - k
            } else {
                k
            };
            *slot = if direction.is_horizontal() {
                index * BOARD_SIZE + along
            } else {
                along * BOARD_SIZE + index
            };
        }
        out
    }

    /// Extract a row (Left/Right) or column (Up/Down) in slide order
    pub(crate) fn line(&self, direction: Direction, index: usize) -> Line {
        Self::line_indices(direction, index).map(|idx| self.cells[idx])
    }

    /// Write back a line previously extracted with [`Board::line`]
    pub(crate) fn set_line(&mut self, direction: Direction, index: usize, line: Line) {
        for (idx, tile) in Self::line_indices(direction, index).into_iter().zip(line) {
            self.cells[idx] = tile;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
