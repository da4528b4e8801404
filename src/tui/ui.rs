//! Stateless rendering of the game window.

use super::layout::BoardLayout;
use crate::config::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Paragraph, Wrap},
};
use tictac_game::{Board, Cell, Player, Position};

/// Window title.
pub const TITLE: &str = " Tic Tac Toe ";
/// Label of the restart control.
pub const RESTART_LABEL: &str = "RESTART";
const HELP: &str = "click or 1-9 / arrows+Enter: play   r: restart   q: quit";

/// What the renderer needs from the game for one frame.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    /// Board to draw.
    pub board: &'a Board,
    /// Status line text.
    pub status: &'a str,
    /// Tile colors.
    pub palette: &'a Palette,
    /// Keyboard cursor.
    pub cursor: Position,
}

/// Draws the window; `layout` is `None` when the terminal is too small.
pub fn draw(frame: &mut Frame, layout: Option<&BoardLayout>, view: View<'_>) {
    let window = Block::bordered()
        .title(TITLE)
        .title_alignment(Alignment::Center);

    let Some(layout) = layout else {
        let area = frame.area();
        let message = Paragraph::new("Enlarge the terminal to play")
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(window);
        frame.render_widget(message, area);
        return;
    };

    frame.render_widget(window, layout.window);

    let restart = Paragraph::new(RESTART_LABEL)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::bordered());
    frame.render_widget(restart, layout.restart);

    for pos in Position::ALL {
        draw_tile(frame, layout.tile(pos), &view, pos);
    }

    let status = Paragraph::new(view.status)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(status, layout.status);

    let help = Paragraph::new(HELP)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, layout.help);
}

fn draw_tile(frame: &mut Frame, area: Rect, view: &View<'_>, pos: Position) {
    let (fill, label) = match view.board.get(pos) {
        Cell::Empty => (view.palette.empty, pos.number().to_string()),
        Cell::Occupied(Player::User) => (view.palette.user, String::new()),
        Cell::Occupied(Player::Computer) => (view.palette.computer, String::new()),
    };

    let block = if pos == view.cursor {
        Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    } else {
        Block::bordered().border_style(Style::default().fg(Color::Black))
    };

    // Put the label on the middle row of the tile.
    let padding = area.height.saturating_sub(3) / 2;
    let text = format!("{}{}", "\n".repeat(padding as usize), label);

    let tile = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().bg(fill).fg(Color::DarkGray))
        .block(block);
    frame.render_widget(tile, area);
}
