//! Merge engine tests - slide-and-merge behaviour across whole boards

use forge_2048::core::{apply_move, merge_tiles, slide_and_merge, Board};
use forge_2048::types::{Direction, Tile, BOARD_SIZE};

const E: Tile = Tile::Empty;

fn n(v: u32) -> Tile {
    Tile::Normal(v)
}

fn f(v: u32) -> Tile {
    Tile::Forged(v)
}

fn single_row(row: [Tile; BOARD_SIZE]) -> Board {
    let mut rows = [[E; BOARD_SIZE]; BOARD_SIZE];
    rows[0] = row;
    Board::from_rows(rows)
}

#[test]
fn test_published_merge_examples() {
    assert_eq!(merge_tiles(n(1), n(1)), Some(n(2)));
    assert_eq!(merge_tiles(n(2), Tile::Forge), Some(f(4)));
    assert_eq!(merge_tiles(Tile::Forge, n(2)), Some(f(4)));
    assert_eq!(merge_tiles(f(8), f(8)), Some(f(16)));
}

#[test]
fn test_row_example_moved_left() {
    let board = single_row([n(1), n(1), n(2), E]);
    let out = apply_move(&board, Direction::Left);

    assert!(out.changed);
    assert_eq!(out.board.rows()[0], [n(2), n(2), E, E]);
    assert_eq!(out.score_delta, 2);
    assert_eq!(out.merges, 1);
}

#[test]
fn test_row_example_moved_right() {
    let board = single_row([n(1), n(1), n(2), E]);
    let out = apply_move(&board, Direction::Right);

    // Sliding right pairs from the right edge: 2 has no partner, then 1+1.
    assert_eq!(out.board.rows()[0], [E, E, n(2), n(2)]);
    assert_eq!(out.score_delta, 2);
}

#[test]
fn test_columns_move_independently() {
    let board = Board::from_rows([
        [n(5), Tile::Forge, E, f(4)],
        [n(5), E, E, f(4)],
        [E, n(8), E, f(4)],
        [E, E, n(1), f(4)],
    ]);

    let up = apply_move(&board, Direction::Up);
    let rows = up.board.rows();
    assert_eq!(rows[0], [n(8), f(16), n(1), f(8)]);
    assert_eq!(rows[1], [E, E, E, f(8)]);
    assert_eq!(rows[2], [E, E, E, E]);
    assert_eq!(up.score_delta, 8 + 16 + 8 + 8);
    assert_eq!(up.merges, 4);
}

#[test]
fn test_forged_and_normal_never_mix() {
    let line = slide_and_merge([n(4), f(4), n(4), f(4)]);
    assert_eq!(line.line, [n(4), f(4), n(4), f(4)]);
    assert_eq!(line.merges, 0);
}

#[test]
fn test_maxed_normal_merges_without_growing() {
    let line = slide_and_merge([n(144), n(144), E, E]);
    assert_eq!(line.line, [n(144), E, E, E]);
    assert_eq!(line.score_delta, 144);
}

#[test]
fn test_full_stuck_board_does_not_change() {
    let board = Board::from_rows([
        [n(1), n(2), n(1), n(2)],
        [n(2), n(1), n(2), n(1)],
        [n(1), n(2), n(1), n(2)],
        [n(2), n(1), n(2), n(1)],
    ]);
    for dir in Direction::ALL {
        let out = apply_move(&board, dir);
        assert!(!out.changed, "{:?} should be a no-op", dir);
        assert_eq!(out.score_delta, 0);
    }
}
