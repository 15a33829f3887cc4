//! Tile spawner - drops one new tile into a random empty cell
//!
//! Cell choice is uniform over the empty cells. Tile kind uses fixed
//! weights: 5% Forge, otherwise Normal(1) at 90% or Normal(2) at 10%.

use rand::Rng;

use crate::board::Board;
use crate::types::{Pos, Tile, FORGE_SPAWN_PROBABILITY, ONE_SPAWN_PROBABILITY};

/// Draw the kind of the next spawned tile
pub fn random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_bool(FORGE_SPAWN_PROBABILITY) {
        Tile::Forge
    } else if rng.gen_bool(ONE_SPAWN_PROBABILITY) {
        Tile::Normal(1)
    } else {
        Tile::Normal(2)
    }
}

/// Place one random tile on a random empty cell.
///
/// Returns the cell that was filled, or `None` (board untouched) when the
/// board is full.
pub fn spawn_tile<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> Option<Pos> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let pos = empty[rng.gen_range(0..empty.len())];
    let tile = random_tile(rng);
    board.set(pos, tile);
    tracing::trace!(row = pos.0, col = pos.1, ?tile, "spawned tile");
    Some(pos)
}
