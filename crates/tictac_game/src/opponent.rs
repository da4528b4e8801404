//! Computer opponents.

use crate::board::Board;
use crate::position::Position;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Something that picks the computer's square.
pub trait Opponent {
    /// Chooses an empty square on `board`.
    ///
    /// Returns `None` only when the board is full.
    fn choose(&mut self, board: &Board) -> Option<Position>;
}

/// Opponent that plays a uniformly random empty square.
///
/// Squares are drawn from all nine positions and redrawn until an empty one
/// comes up, which is uniform over the empty squares.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R = StdRng> {
    rng: R,
}

impl RandomOpponent<StdRng> {
    /// Creates an opponent seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an opponent whose moves are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomOpponent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomOpponent<R> {
    /// Creates an opponent drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    #[instrument(skip_all)]
    fn choose(&mut self, board: &Board) -> Option<Position> {
        if board.is_full() {
            return None;
        }

        let mut draws = 1;
        loop {
            let pos = Position::ALL[self.rng.random_range(0..Position::ALL.len())];
            if board.is_empty(pos) {
                debug!(position = %pos, draws, "Computer picked square");
                return Some(pos);
            }
            draws += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Player};

    #[test]
    fn test_full_board_yields_none() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Cell::Occupied(Player::User));
        }
        assert_eq!(RandomOpponent::seeded(1).choose(&board), None);
    }

    #[test]
    fn test_only_empty_square_is_chosen() {
        let mut board = Board::new();
        for pos in Position::ALL {
            if pos != Position::BottomCenter {
                board.set(pos, Cell::Occupied(Player::Computer));
            }
        }
        let mut opponent = RandomOpponent::seeded(7);
        for _ in 0..20 {
            assert_eq!(opponent.choose(&board), Some(Position::BottomCenter));
        }
    }

    #[test]
    fn test_never_picks_occupied() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Player::User));
        board.set(Position::Center, Cell::Occupied(Player::Computer));
        board.set(Position::BottomRight, Cell::Occupied(Player::User));

        let mut opponent = RandomOpponent::seeded(99);
        for _ in 0..500 {
            let pos = opponent.choose(&board).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_distribution_is_uniform_over_empty_squares() {
        let mut board = Board::new();
        for pos in Position::ALL.into_iter().take(6) {
            board.set(pos, Cell::Occupied(Player::User));
        }

        let mut opponent = RandomOpponent::seeded(2024);
        let mut counts = [0usize; 9];
        for _ in 0..3000 {
            counts[opponent.choose(&board).unwrap().index()] += 1;
        }

        assert_eq!(counts[..6].iter().sum::<usize>(), 0);
        for count in &counts[6..] {
            assert!((800..1200).contains(count), "skewed counts: {counts:?}");
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomOpponent::seeded(5);
        let mut b = RandomOpponent::seeded(5);
        for _ in 0..10 {
            assert_eq!(a.choose(&board), b.choose(&board));
        }
    }
}
