//! Tic Tac Toe against a random computer opponent, played in the terminal.
//!
//! # Architecture
//!
//! - **Game**: board, rules and turn handling live in [`tictac_game`]
//! - **Config**: TOML file plus command-line overrides ([`AppConfig`], [`Cli`])
//! - **TUI**: a bordered window with a restart control, a clickable 3x3 grid
//!   and a status line, drawn with ratatui ([`App`], [`BoardLayout`])
//!
//! # Example
//!
//! ```no_run
//! use tictac::{AppConfig, init_tracing};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load("tictac.toml")?;
//! init_tracing(config.log_file(), config.log_filter())?;
//! tictac::run(&config)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod tui;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{AppConfig, BoardConfig, ColorConfig, ConfigError, MIN_TILE_EDGE, Palette, TileSize};

// Crate-level exports - Logging
pub use logging::init_tracing;

// Crate-level exports - Terminal UI
pub use tui::{
    Action, App, BoardLayout, Direction, Hit, RESTART_LABEL, TITLE, View, draw, key_action,
    move_cursor, run,
};
