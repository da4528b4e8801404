//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Smallest tile edge that still fits a border and a label.
pub const MIN_TILE_EDGE: u16 = 3;

/// Top-level configuration.
///
/// Every field has a default, so an empty file or no file at all is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// File the log is written to (the terminal belongs to the game).
    log_file: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// Seed for reproducible computer moves.
    seed: Option<u64>,

    /// Board geometry.
    board: BoardConfig,

    /// Tile colors.
    colors: ColorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("tictac.log"),
            log_filter: "info,tictac=debug,tictac_game=debug".to_string(),
            seed: None,
            board: BoardConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

/// Size of one board tile, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Terminal columns per tile.
    tile_width: u16,
    /// Terminal rows per tile.
    tile_height: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tile_width: 10,
            tile_height: 5,
        }
    }
}

/// Tile colors as `#rrggbb` strings or color names.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Color of the user's tiles.
    user: String,
    /// Color of the computer's tiles.
    computer: String,
    /// Color of empty tiles.
    empty: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            user: "#5f9ea0".to_string(),
            computer: "#f9ab8a".to_string(),
            empty: "#ffffff".to_string(),
        }
    }
}

/// Resolved tile colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// User tile background.
    pub user: Color,
    /// Computer tile background.
    pub computer: Color,
    /// Empty tile background.
    pub empty: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            user: Color::Rgb(0x5f, 0x9e, 0xa0),
            computer: Color::Rgb(0xf9, 0xab, 0x8a),
            empty: Color::Rgb(0xff, 0xff, 0xff),
        }
    }
}

/// Validated tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    /// Terminal columns per tile.
    pub width: u16,
    /// Terminal rows per tile.
    pub height: u16,
}

impl Default for TileSize {
    fn default() -> Self {
        let board = BoardConfig::default();
        Self {
            width: board.tile_width,
            height: board.tile_height,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file, or defaults if it doesn't exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading config from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::parse(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, seed: Option<u64>, log_file: Option<PathBuf>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }

    /// Checks colors and tile size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.palette()?;
        self.tile_size()?;
        Ok(())
    }

    /// Resolves the configured colors.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            user: parse_color("user", &self.colors.user)?,
            computer: parse_color("computer", &self.colors.computer)?,
            empty: parse_color("empty", &self.colors.empty)?,
        })
    }

    /// Returns the tile size, rejecting tiles too small to draw.
    pub fn tile_size(&self) -> Result<TileSize, ConfigError> {
        let BoardConfig {
            tile_width,
            tile_height,
        } = self.board;
        if tile_width < MIN_TILE_EDGE || tile_height < MIN_TILE_EDGE {
            return Err(ConfigError::new(format!(
                "Tile size {}x{} is too small (minimum {}x{})",
                tile_width, tile_height, MIN_TILE_EDGE, MIN_TILE_EDGE
            )));
        }
        Ok(TileSize {
            width: tile_width,
            height: tile_height,
        })
    }
}

#[track_caller]
fn parse_color(name: &str, value: &str) -> Result<Color, ConfigError> {
    match Color::from_str(value) {
        Ok(color) => Ok(color),
        Err(e) => Err(ConfigError::new(format!(
            "Invalid {} color {:?}: {}",
            name, value, e
        ))),
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
