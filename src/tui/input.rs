//! Keyboard mapping and cursor movement.

use super::layout::Hit;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictac_game::Position;

/// Cursor direction from the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Row above.
    Up,
    /// Row below.
    Down,
    /// Column to the left.
    Left,
    /// Column to the right.
    Right,
}

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the given square.
    Play(Position),
    /// Play the square under the cursor.
    PlayCursor,
    /// Move the cursor.
    MoveCursor(Direction),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

impl From<Hit> for Action {
    fn from(hit: Hit) -> Self {
        match hit {
            Hit::Restart => Action::Restart,
            Hit::Tile(pos) => Action::Play(pos),
        }
    }
}

/// Maps a key press to an action.
pub fn key_action(key: &KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_number(d as u8).ok())
            .map(Action::Play),
        KeyCode::Char('r' | 'R') => Some(Action::Restart),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        _ => None,
    }
}

/// Moves the cursor one square, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match direction {
        Direction::Up => (row.saturating_sub(1), column),
        Direction::Down => ((row + 1).min(2), column),
        Direction::Left => (row, column.saturating_sub(1)),
        Direction::Right => (row, (column + 1).min(2)),
    };
    Position::from_row_column(row, column).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_play_squares() {
        assert_eq!(
            key_action(&press(KeyCode::Char('1'))),
            Some(Action::Play(Position::TopLeft))
        );
        assert_eq!(
            key_action(&press(KeyCode::Char('9'))),
            Some(Action::Play(Position::BottomRight))
        );
        assert_eq!(key_action(&press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(key_action(&press(KeyCode::Char('r'))), Some(Action::Restart));
        assert_eq!(key_action(&press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(key_action(&press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(key_action(&press(KeyCode::Enter)), Some(Action::PlayCursor));
        assert_eq!(
            key_action(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            key_action(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }
}
