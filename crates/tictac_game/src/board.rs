//! Board state: nine cells and who occupies them.

use crate::error::BoardError;
use crate::position::Position;
use tracing::instrument;

/// One of the two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Player {
    /// The human at the keyboard and mouse.
    User,
    /// The random-move computer opponent.
    Computer,
}

impl Player {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::User => Player::Computer,
            Player::Computer => Player::User,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Sets the cell at a position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Looks up a cell by its square number (1-9).
    ///
    /// # Errors
    ///
    /// Returns an `InvalidPosition` error for numbers outside 1-9.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn cell_at(&self, number: u8) -> Result<Cell, BoardError> {
        Position::from_number(number).map(|pos| self.get(pos))
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Positions nobody has played yet, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

/// Renders the board as three text rows for logs: `U` user, `C` computer,
/// the square number when empty.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, pos) in Position::ALL.iter().enumerate() {
            match self.get(*pos) {
                Cell::Empty => write!(f, "{}", pos.number())?,
                Cell::Occupied(Player::User) => write!(f, "U")?,
                Cell::Occupied(Player::Computer) => write!(f, "C")?,
            }
            if pos.column() < 2 {
                write!(f, "|")?;
            } else if i < 8 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardErrorKind;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions().len(), 9);
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_cell_at_reads_numbered_squares() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Player::User));
        board.set(Position::BottomRight, Cell::Occupied(Player::Computer));

        assert_eq!(board.cell_at(5).unwrap(), Cell::Occupied(Player::User));
        assert_eq!(board.cell_at(9).unwrap(), Cell::Occupied(Player::Computer));
        assert_eq!(board.cell_at(1).unwrap(), Cell::Empty);
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::new();
        let err = board.cell_at(0).unwrap_err();
        assert_eq!(err.kind, BoardErrorKind::InvalidPosition(0));
        assert!(board.cell_at(10).is_err());
    }

    #[test]
    fn test_reset_clears_cells() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Cell::Occupied(Player::Computer));
        }
        assert!(board.is_full());

        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_positions_skips_occupied() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Player::User));
        board.set(Position::Center, Cell::Occupied(Player::Computer));

        let empty = board.empty_positions();
        assert_eq!(empty.len(), 7);
        assert!(!empty.contains(&Position::TopLeft));
        assert!(!empty.contains(&Position::Center));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Player::User));
        board.set(Position::BottomRight, Cell::Occupied(Player::Computer));
        assert_eq!(board.to_string(), "U|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|C");
    }
}
