//! Terminal window for the game.

mod app;
mod input;
mod layout;
mod ui;

pub use app::App;
pub use input::{Action, Direction, key_action, move_cursor};
pub use layout::{BoardLayout, Hit};
pub use ui::{RESTART_LABEL, TITLE, View, draw};

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictac_game::{GameController, Opponent};
use tracing::{error, info, instrument};

/// Runs the game until the player quits.
///
/// Takes over the terminal (raw mode, alternate screen, mouse capture) and
/// restores it on the way out, also when the loop fails.
#[instrument(skip_all, fields(seed = ?config.seed()))]
pub fn run(config: &AppConfig) -> Result<()> {
    let palette = config.palette()?;
    let tile = config.tile_size()?;
    let game = match config.seed() {
        Some(seed) => GameController::seeded(*seed),
        None => GameController::new(),
    };
    let mut app = App::new(game, palette, tile);

    info!("Starting Tic Tac Toe");

    let mut terminal = setup_terminal()?;
    let res = event_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(status = %app.game().status(), "Tic Tac Toe finished");
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            Err(e).context("Failed to create terminal")
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Draws, blocks for the next event, handles it; repeats until quit.
fn event_loop<B: Backend, O: Opponent>(terminal: &mut Terminal<B>, app: &mut App<O>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        terminal.draw(|f| app.draw(f))?;
        let event = event::read()?;
        app.handle_event(&event);
    }
    Ok(())
}
