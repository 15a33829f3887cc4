//! Game state evaluator - win and loss detection
//!
//! Both checks are pure reads of a [`Board`]. The controller evaluates win
//! before loss, so a move that creates a 144 and fills the board at the same
//! time reports a win.

use crate::board::Board;
use crate::merge::can_merge;
use crate::types::{GameStatus, Tile, BOARD_SIZE};

/// True iff any tile carries the winning value
pub fn check_win(board: &Board) -> bool {
    board.cells().iter().any(Tile::is_winning)
}

/// True iff the board is full and no orthogonal neighbours can merge
pub fn check_loss(board: &Board) -> bool {
    if !board.empty_cells().is_empty() {
        return false;
    }

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let Some(tile) = board.get(row, col) else {
                continue;
            };
            // Checking right and down neighbours covers every adjacent pair.
            for (nr, nc) in [(row, col + 1), (row + 1, col)] {
                match board.get(nr, nc) {
                    Some(neighbor) if neighbor.is_empty() || can_merge(tile, neighbor) => {
                        return false;
                    }
                    _ => {}
                }
            }
        }
    }

    true
}

/// Status of a board after a move; win takes precedence over loss
pub fn evaluate(board: &Board) -> GameStatus {
    if check_win(board) {
        GameStatus::Won
    } else if check_loss(board) {
        GameStatus::Lost
    } else {
        GameStatus::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Tile = Tile::Empty;

    fn n(v: u32) -> Tile {
        Tile::Normal(v)
    }

    /// Full board with no equal neighbours and no Forge.
    fn stuck_board() -> Board {
        Board::from_rows([
            [n(1), n(2), n(1), n(2)],
            [n(2), n(1), n(2), n(1)],
            [n(1), n(2), n(1), n(2)],
            [n(2), n(1), n(2), n(1)],
        ])
    }

    #[test]
    fn test_win_on_normal_or_forged_144() {
        assert!(!check_win(&Board::new()));

        let mut rows = [[E; BOARD_SIZE]; BOARD_SIZE];
        rows[2][1] = n(144);
        assert!(check_win(&Board::from_rows(rows)));

        rows[2][1] = Tile::Forged(144);
        assert!(check_win(&Board::from_rows(rows)));

        rows[2][1] = Tile::Forged(288);
        assert!(!check_win(&Board::from_rows(rows)));
    }

    #[test]
    fn test_forge_with_144s_is_already_won() {
        let mut rows = [[n(144); BOARD_SIZE]; BOARD_SIZE];
        rows[0][0] = Tile::Forge;
        assert!(check_win(&Board::from_rows(rows)));
    }

    #[test]
    fn test_loss_requires_full_board() {
        let mut rows = stuck_board().rows();
        assert!(check_loss(&Board::from_rows(rows)));

        rows[3][3] = E;
        assert!(!check_loss(&Board::from_rows(rows)));
    }

    #[test]
    fn test_no_loss_when_neighbours_merge() {
        let mut rows = stuck_board().rows();
        rows[0][0] = n(2); // equal to right neighbour
        assert!(!check_loss(&Board::from_rows(rows)));

        let mut rows = stuck_board().rows();
        rows[3][3] = Tile::Forge; // Forge merges with any Normal
        assert!(!check_loss(&Board::from_rows(rows)));
    }

    #[test]
    fn test_forge_next_to_forge_or_forged_is_stuck() {
        let board = Board::from_rows([
            [Tile::Forge, Tile::Forge, Tile::Forged(4), Tile::Forged(8)],
            [Tile::Forged(8), Tile::Forged(4), Tile::Forged(8), Tile::Forged(4)],
            [Tile::Forged(4), Tile::Forged(8), Tile::Forged(4), Tile::Forged(8)],
            [Tile::Forged(8), Tile::Forged(4), Tile::Forged(8), Tile::Forged(4)],
        ]);
        assert!(check_loss(&board));
    }

    #[test]
    fn test_evaluate_prefers_win() {
        let mut rows = stuck_board().rows();
        rows[1][1] = n(144);
        let board = Board::from_rows(rows);
        assert!(check_loss(&board));
        assert_eq!(evaluate(&board), GameStatus::Won);

        assert_eq!(evaluate(&stuck_board()), GameStatus::Lost);
        assert_eq!(evaluate(&Board::new()), GameStatus::Playing);
    }
}
