//! Game rules for tic-tac-toe.
//!
//! Win and tie detection are pure functions of the [`Board`](crate::Board).

mod tie;
mod win;

pub use tie::is_tie;
pub use win::{LINES, has_line, winner};
