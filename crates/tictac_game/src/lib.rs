//! Tic-tac-toe game logic: a human user against a random computer.
//!
//! # Architecture
//!
//! - **Board**: nine [`Cell`]s addressed by [`Position`]
//! - **Rules**: win and tie detection over the eight lines
//! - **Opponent**: the computer's move selection ([`RandomOpponent`])
//! - **Controller**: [`GameController`] owns board and status and runs a turn
//!
//! # Example
//!
//! ```
//! use tictac_game::{GameController, GameStatus, Position, TurnOutcome};
//!
//! let mut game = GameController::seeded(42);
//! let outcome = game.apply_user_move(Position::Center);
//! assert!(matches!(outcome, TurnOutcome::Continued { .. }));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod error;
mod opponent;
mod position;
pub mod rules;

pub use board::{Board, Cell, Player};
pub use controller::{GameController, GameStatus, IgnoredMove, TurnOutcome};
pub use error::{BoardError, BoardErrorKind};
pub use opponent::{Opponent, RandomOpponent};
pub use position::Position;
