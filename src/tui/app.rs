//! Application state and event dispatch.

use super::input::{self, Action};
use super::layout::BoardLayout;
use super::ui::{self, View};
use crate::config::{Palette, TileSize};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::Frame;
use tictac_game::{GameController, Opponent, Position, RandomOpponent, TurnOutcome};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the [`GameController`]; every event is handled to completion before
/// the next one is read.
#[derive(Debug)]
pub struct App<O = RandomOpponent> {
    game: GameController<O>,
    palette: Palette,
    tile: TileSize,
    cursor: Position,
    layout: Option<BoardLayout>,
    quit: bool,
}

impl<O: Opponent> App<O> {
    /// Creates the application around a fresh game.
    pub fn new(game: GameController<O>, palette: Palette, tile: TileSize) -> Self {
        Self {
            game,
            palette,
            tile,
            cursor: Position::Center,
            layout: None,
            quit: false,
        }
    }

    /// Gets the game.
    pub fn game(&self) -> &GameController<O> {
        &self.game
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Layout of the last drawn frame.
    pub fn layout(&self) -> Option<&BoardLayout> {
        self.layout.as_ref()
    }

    /// True once the player asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Lays out and draws one frame.
    pub fn draw(&mut self, frame: &mut Frame) {
        self.layout = BoardLayout::compute(frame.area(), self.tile);
        let view = View {
            board: self.game.board(),
            status: self.game.status_message(),
            palette: &self.palette,
            cursor: self.cursor,
        };
        ui::draw(frame, self.layout.as_ref(), view);
    }

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: &Event) {
        if let Some(action) = self.action_for(event) {
            self.apply(action);
        }
    }

    fn action_for(&self, event: &Event) -> Option<Action> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => input::key_action(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => self
                .layout
                .as_ref()?
                .hit_test(mouse.column, mouse.row)
                .map(Action::from),
            _ => None,
        }
    }

    /// Applies a player action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play(pos) => self.play(pos),
            Action::PlayCursor => self.play(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::Restart => {
                self.game.reset();
            }
            Action::Quit => {
                info!("User quit");
                self.quit = true;
            }
        }
    }

    fn play(&mut self, pos: Position) {
        self.cursor = pos;
        match self.game.apply_user_move(pos) {
            TurnOutcome::Ignored(reason) => debug!(%reason, "Click ignored"),
            outcome => info!(?outcome, status = %self.game.status(), "Turn played"),
        }
    }
}
