//! Turn handling: user move, win check, computer reply, win check.

use crate::board::{Board, Cell, Player};
use crate::error::BoardError;
use crate::opponent::{Opponent, RandomOpponent};
use crate::position::Position;
use crate::rules;
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum GameStatus {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// The user completed a line.
    UserWon,
    /// The computer completed a line.
    ComputerWon,
    /// The board filled with no line after the user's move.
    Tied,
}

impl GameStatus {
    /// True for every status that blocks further moves.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Text for the status line under the board.
    pub fn message(self) -> &'static str {
        match self {
            GameStatus::InProgress => "",
            GameStatus::UserWon => "You win!",
            GameStatus::ComputerWon => "You lose!",
            GameStatus::Tied => "It's a tie!",
        }
    }

    /// The status reached when `player` completes a line.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::User => GameStatus::UserWon,
            Player::Computer => GameStatus::ComputerWon,
        }
    }
}

/// Why a user move left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredMove {
    /// The clicked cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
    /// The game has already ended.
    #[display("game is over")]
    GameOver,
}

/// What a call to [`GameController::apply_user_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing changed.
    Ignored(IgnoredMove),
    /// Both sides moved and the game goes on.
    Continued {
        /// Square the computer took.
        computer: Position,
    },
    /// The user's move completed a line.
    UserWon,
    /// The computer's reply completed a line.
    ComputerWon {
        /// Square the computer took.
        computer: Position,
    },
    /// The user's move filled the board without a line.
    Tied,
}

/// Owns the board and status and drives each turn.
///
/// All mutation happens through [`apply_user_move`](Self::apply_user_move)
/// and [`reset`](Self::reset); renderers only borrow the board.
#[derive(Debug, Clone)]
pub struct GameController<O = RandomOpponent> {
    board: Board,
    status: GameStatus,
    opponent: O,
}

impl GameController<RandomOpponent> {
    /// Creates a game against a randomly seeded computer.
    pub fn new() -> Self {
        Self::with_opponent(RandomOpponent::new())
    }

    /// Creates a game whose computer moves are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_opponent(RandomOpponent::seeded(seed))
    }
}

impl Default for GameController<RandomOpponent> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Opponent> GameController<O> {
    /// Creates a game against the given opponent.
    pub fn with_opponent(opponent: O) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            opponent,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Text for the status line.
    pub fn status_message(&self) -> &'static str {
        self.status.message()
    }

    /// Looks up a cell by square number (1-9).
    ///
    /// # Errors
    ///
    /// Returns an `InvalidPosition` error for numbers outside 1-9.
    #[track_caller]
    pub fn cell_at(&self, number: u8) -> Result<Cell, BoardError> {
        self.board.cell_at(number)
    }

    /// Starts a new game: empty board, status cleared.
    #[instrument(skip(self), fields(previous = %self.status))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.status = GameStatus::InProgress;
        info!("Game reset");
    }

    /// Plays the user's mark at `pos` and, if the game is still open, the
    /// computer's reply.
    ///
    /// Order of evaluation: user win, then tie if the board is full, then
    /// computer move and computer win. Moves on an occupied cell or after the
    /// game ended change nothing.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn apply_user_move(&mut self, pos: Position) -> TurnOutcome {
        if self.status.is_terminal() {
            debug!(status = %self.status, "Move ignored, game over");
            return TurnOutcome::Ignored(IgnoredMove::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!("Move ignored, cell occupied");
            return TurnOutcome::Ignored(IgnoredMove::Occupied(pos));
        }

        self.board.set(pos, Cell::Occupied(Player::User));
        debug!(board = %self.board, "User moved");

        if self.evaluate_win(Player::User) {
            return TurnOutcome::UserWon;
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!("Game tied");
            return TurnOutcome::Tied;
        }

        let computer = self.computer_move();
        if self.evaluate_win(Player::Computer) {
            TurnOutcome::ComputerWon { computer }
        } else {
            TurnOutcome::Continued { computer }
        }
    }

    /// Checks whether `player` holds a full line; if so the game ends with
    /// that player's win.
    #[instrument(skip(self))]
    pub fn evaluate_win(&mut self, player: Player) -> bool {
        if rules::has_line(&self.board, player) {
            self.status = GameStatus::won_by(player);
            info!(status = %self.status, "Game won");
            true
        } else {
            false
        }
    }

    /// Places the computer's mark. Callers guarantee an empty cell exists.
    fn computer_move(&mut self) -> Position {
        let chosen = self
            .opponent
            .choose(&self.board)
            .filter(|pos| self.board.is_empty(*pos));

        let pos = match chosen {
            Some(pos) => pos,
            None => {
                warn!("Opponent returned no empty square, taking the first one");
                self.board.empty_positions()[0]
            }
        };

        self.board.set(pos, Cell::Occupied(Player::Computer));
        debug!(position = %pos, board = %self.board, "Computer moved");
        pos
    }
}
