//! Merge engine - slide and merge tiles in one direction
//!
//! Every move is decomposed into four independent lines. Each line is
//! extracted so that tiles slide toward index 0, run through the canonical
//! left-merge, and written back.
//!
//! # Canonical left-merge
//!
//! 1. Compact: drop `Empty` cells, keeping relative order.
//! 2. Scan left to right. A mergeable pair collapses into one tile and the
//!    scan skips past both, so a freshly merged tile never merges again in
//!    the same move.
//! 3. Pad with `Empty` back to full length.
//!
//! The score delta is the sum of every merge result's value.

use arrayvec::ArrayVec;

use crate::board::{Board, Line};
use crate::types::{next_fib, Direction, Tile, BOARD_SIZE};

/// Result of sliding a board in one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub score_delta: u32,
    /// Any cell differs from the input board
    pub changed: bool,
    /// Number of merges performed across all lines
    pub merges: u32,
}

/// Result of merging one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMerge {
    pub line: Line,
    pub score_delta: u32,
    pub merges: u32,
}

/// Combine two adjacent tiles, if the pair is compatible.
///
/// Order-independent. Returns `None` for Forge+Forge, unequal values,
/// mixed Normal/Forged lineages, and anything involving `Empty`.
pub fn merge_tiles(a: Tile, b: Tile) -> Option<Tile> {
    match (a, b) {
        (Tile::Normal(v), Tile::Forge) | (Tile::Forge, Tile::Normal(v)) => {
            Some(Tile::Forged(v.saturating_mul(2)))
        }
        (Tile::Normal(v1), Tile::Normal(v2)) if v1 == v2 => Some(Tile::Normal(next_fib(v1))),
        (Tile::Forged(v1), Tile::Forged(v2)) if v1 == v2 => {
            Some(Tile::Forged(v1.saturating_mul(2)))
        }
        _ => None,
    }
}

/// Check whether two tiles would merge if they became adjacent in a line
pub fn can_merge(a: Tile, b: Tile) -> bool {
    merge_tiles(a, b).is_some()
}

/// Slide and merge one line toward index 0
pub fn slide_and_merge(line: Line) -> LineMerge {
    let compacted: ArrayVec<Tile, BOARD_SIZE> =
        line.iter().copied().filter(|t| !t.is_empty()).collect();

    let mut out = [Tile::Empty; BOARD_SIZE];
    let mut write = 0usize;
    let mut score_delta = 0u32;
    let mut merges = 0u32;

    let mut i = 0usize;
    while i < compacted.len() {
        let merged = compacted
            .get(i + 1)
            .and_then(|&next| merge_tiles(compacted[i], next));

        match merged {
            Some(tile) => {
                score_delta = score_delta.saturating_add(tile.value().unwrap_or(0));
                merges += 1;
                out[write] = tile;
                i += 2;
            }
            None => {
                out[write] = compacted[i];
                i += 1;
            }
        }
        write += 1;
    }

    debug_assert!(write <= BOARD_SIZE);
    debug_assert!(
        out.iter().filter(|t| !t.is_empty()).count() <= compacted.len(),
        "merge must never create tiles"
    );

    LineMerge {
        line: out,
        score_delta,
        merges,
    }
}

/// Slide the whole board in `direction`.
///
/// Pure: the input board is left untouched.
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    let mut next = *board;
    let mut score_delta = 0u32;
    let mut merges = 0u32;

    for index in 0..BOARD_SIZE {
        let result = slide_and_merge(board.line(direction, index));
        next.set_line(direction, index, result.line);
        score_delta = score_delta.saturating_add(result.score_delta);
        merges += result.merges;
    }

    MoveOutcome {
        board: next,
        score_delta,
        changed: next != *board,
        merges,
    }
}
