//! Board positions for tic-tac-toe.

use crate::error::{BoardError, BoardErrorKind};
use tracing::instrument;

/// A square on the 3x3 board.
///
/// Squares are numbered 1-9 in row-major order, the way the player sees
/// them: 1 is the top-left corner and 9 the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum Position {
    /// Top-left (square 1)
    TopLeft,
    /// Top-center (square 2)
    TopCenter,
    /// Top-right (square 3)
    TopRight,
    /// Middle-left (square 4)
    MiddleLeft,
    /// Center (square 5)
    Center,
    /// Middle-right (square 6)
    MiddleRight,
    /// Bottom-left (square 7)
    BottomLeft,
    /// Bottom-center (square 8)
    BottomCenter,
    /// Bottom-right (square 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Zero-based board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Square number as shown to the player (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Row on the board, 0 at the top.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column on the board, 0 at the left.
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Creates a position from a zero-based board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from its row and column.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// Creates a position from the player-facing square number (1-9).
    ///
    /// # Errors
    ///
    /// Returns [`BoardErrorKind::InvalidPosition`] for numbers outside 1-9.
    #[track_caller]
    #[instrument]
    pub fn from_number(number: u8) -> Result<Self, BoardError> {
        match (number as usize).checked_sub(1).and_then(Self::from_index) {
            Some(pos) => Ok(pos),
            None => Err(BoardError::new(BoardErrorKind::InvalidPosition(number))),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_one_based_row_major() {
        assert_eq!(Position::TopLeft.number(), 1);
        assert_eq!(Position::Center.number(), 5);
        assert_eq!(Position::BottomRight.number(), 9);
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.column(), 2);
    }

    #[test]
    fn test_from_number_accepts_one_through_nine() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(Position::from_number(i as u8 + 1).ok(), Some(*pos));
        }
    }

    #[test]
    fn test_from_number_rejects_out_of_range() {
        for bad in [0, 10, 255] {
            let err = Position::from_number(bad).unwrap_err();
            assert_eq!(err.kind, BoardErrorKind::InvalidPosition(bad));
        }
    }

    #[test]
    fn test_from_row_column() {
        assert_eq!(Position::from_row_column(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::from_row_column(3, 0), None);
        assert_eq!(Position::from_row_column(0, 3), None);
    }

    #[test]
    fn test_enum_iter_matches_all() {
        use strum::IntoEnumIterator;
        let iterated: Vec<_> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL.to_vec());
    }
}
