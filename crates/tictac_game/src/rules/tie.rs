//! Tie detection logic for tic-tac-toe.

use super::win::winner;
use crate::board::Board;
use tracing::instrument;

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Player};
    use crate::position::Position;

    fn fill(pattern: &str) -> Board {
        let mut board = Board::new();
        for (pos, ch) in Position::ALL.into_iter().zip(pattern.chars()) {
            let cell = match ch {
                'U' => Cell::Occupied(Player::User),
                'C' => Cell::Occupied(Player::Computer),
                _ => Cell::Empty,
            };
            board.set(pos, cell);
        }
        board
    }

    #[test]
    fn test_partial_board_is_not_tie() {
        assert!(!is_tie(&fill("UC.......")));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        // U C U / U C C / C U U
        assert!(is_tie(&fill("UCUUCCCUU")));
    }

    #[test]
    fn test_full_board_with_line_is_not_tie() {
        // U U U / C C U / U C C
        assert!(!is_tie(&fill("UUUCCUUCC")));
    }
}
