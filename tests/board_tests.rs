//! Board tests - read-only board contract

use forge_2048::core::Board;
use forge_2048::types::{Tile, BOARD_SIZE, CELL_COUNT};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.size(), BOARD_SIZE);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            assert!(board.is_empty((row, col)), "Cell ({}, {}) should be empty", row, col);
            assert_eq!(board.get(row, col), Some(Tile::Empty));
        }
    }
    assert_eq!(board.empty_cells().len(), CELL_COUNT);
    assert_eq!(board.tile_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(BOARD_SIZE, 0), None);
    assert_eq!(board.get(0, BOARD_SIZE), None);
    assert!(!board.is_empty((BOARD_SIZE, 0)));
}

#[test]
fn test_board_from_rows_layout() {
    let board = Board::from_rows([
        [Tile::Normal(1), Tile::Empty, Tile::Empty, Tile::Empty],
        [Tile::Empty, Tile::Forge, Tile::Empty, Tile::Empty],
        [Tile::Empty, Tile::Empty, Tile::Forged(8), Tile::Empty],
        [Tile::Empty, Tile::Empty, Tile::Empty, Tile::Normal(21)],
    ]);

    assert_eq!(board.get(0, 0), Some(Tile::Normal(1)));
    assert_eq!(board.get(1, 1), Some(Tile::Forge));
    assert_eq!(board.get(2, 2), Some(Tile::Forged(8)));
    assert_eq!(board.get(3, 3), Some(Tile::Normal(21)));
    assert_eq!(board.tile_count(), 4);
    assert_eq!(board.max_value(), 21);
    assert_eq!(board.rows()[1][1], Tile::Forge);
}

#[test]
fn test_empty_cells_excludes_occupied() {
    let mut rows = [[Tile::Normal(2); BOARD_SIZE]; BOARD_SIZE];
    rows[1][2] = Tile::Empty;
    rows[3][0] = Tile::Empty;
    let board = Board::from_rows(rows);

    let empty = board.empty_cells();
    assert_eq!(empty.as_slice(), &[(1, 2), (3, 0)]);
    assert!(board.is_empty((1, 2)));
    assert!(!board.is_empty((0, 0)));
}
