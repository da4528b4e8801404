//! Win detection logic for tic-tac-toe.

use crate::board::{Board, Cell, Player};
use crate::position::Position;
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `player` holds all three cells of any line.
#[instrument(skip(board))]
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Returns the player holding a complete line, if any.
///
/// The user is checked first; a legal game never has both.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::User, Player::Computer]
        .into_iter()
        .find(|player| has_line(board, *player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_either_player() {
        for player in [Player::User, Player::Computer] {
            for line in LINES {
                let mut board = Board::new();
                for pos in line {
                    board.set(pos, Cell::Occupied(player));
                }
                assert!(has_line(&board, player), "{line:?} should win");
                assert!(!has_line(&board, player.opponent()));
                assert_eq!(winner(&board), Some(player));
            }
        }
    }

    #[test]
    fn test_incomplete_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Player::User));
        board.set(Position::TopCenter, Cell::Occupied(Player::User));
        board.set(Position::TopRight, Cell::Occupied(Player::Computer));
        assert_eq!(winner(&board), None);
    }
}
