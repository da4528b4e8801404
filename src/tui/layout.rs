//! Screen geometry: where each tile sits and what a click lands on.

use crate::config::TileSize;
use ratatui::layout::Rect;
use tictac_game::Position;
use tracing::instrument;

/// Width of the restart control: label, padding, borders.
const RESTART_WIDTH: u16 = 11;
const RESTART_HEIGHT: u16 = 3;
/// Room for the longest status message.
const STATUS_WIDTH: u16 = 20;

/// What a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The restart control.
    Restart,
    /// A board tile.
    Tile(Position),
}

/// Screen rectangles for one frame.
///
/// Computed from the frame size each draw; hit-testing uses the layout of
/// the most recent frame so clicks match what is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// The whole bordered window.
    pub window: Rect,
    /// Restart control above the grid.
    pub restart: Rect,
    /// Bounding box of the nine tiles.
    pub grid: Rect,
    /// Tiles indexed by [`Position::index`].
    pub tiles: [Rect; 9],
    /// Status line under the grid.
    pub status: Rect,
    /// Key help line.
    pub help: Rect,
}

impl BoardLayout {
    /// Smallest window (width, height) that fits the board.
    pub fn min_size(tile: TileSize) -> (u16, u16) {
        let width = tile
            .width
            .saturating_mul(3)
            .max(RESTART_WIDTH)
            .max(STATUS_WIDTH)
            .saturating_add(2);
        // borders, restart, gap, grid, gap, status, help
        let height = tile
            .height
            .saturating_mul(3)
            .saturating_add(2 + RESTART_HEIGHT + 1 + 1 + 1 + 1);
        (width, height)
    }

    /// Lays out the window inside `area`, or `None` if it doesn't fit.
    #[instrument]
    pub fn compute(area: Rect, tile: TileSize) -> Option<Self> {
        let (min_width, min_height) = Self::min_size(tile);
        if area.width < min_width || area.height < min_height {
            return None;
        }

        let inner = Rect::new(area.x + 1, area.y + 1, area.width - 2, area.height - 2);
        let centered =
            |width: u16, y: u16, height: u16| Rect::new(inner.x + (inner.width - width) / 2, y, width, height);

        let restart = centered(RESTART_WIDTH, inner.y, RESTART_HEIGHT);
        let grid = centered(tile.width * 3, restart.bottom() + 1, tile.height * 3);
        let tiles = std::array::from_fn(|i| {
            let pos = Position::ALL[i];
            Rect::new(
                grid.x + pos.column() as u16 * tile.width,
                grid.y + pos.row() as u16 * tile.height,
                tile.width,
                tile.height,
            )
        });
        let status = Rect::new(inner.x, grid.bottom() + 1, inner.width, 1);
        let help = Rect::new(inner.x, status.bottom(), inner.width, 1);

        Some(Self {
            window: area,
            restart,
            grid,
            tiles,
            status,
            help,
        })
    }

    /// Rectangle of the tile at `pos`.
    pub fn tile(&self, pos: Position) -> Rect {
        self.tiles[pos.index()]
    }

    /// Maps a press at (`column`, `row`) to the control under it.
    ///
    /// Presses inside the grid go to the tile with the nearest centre;
    /// presses anywhere else are ignored.
    #[instrument(skip(self))]
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        if contains(self.restart, column, row) {
            return Some(Hit::Restart);
        }
        if !contains(self.grid, column, row) {
            return None;
        }

        // Doubled coordinates keep centres integral.
        let (px, py) = (2 * i32::from(column) + 1, 2 * i32::from(row) + 1);
        Position::ALL
            .into_iter()
            .min_by_key(|pos| {
                let t = self.tile(*pos);
                let dx = px - (2 * i32::from(t.x) + i32::from(t.width));
                let dy = py - (2 * i32::from(t.y) + i32::from(t.height));
                dx * dx + dy * dy
            })
            .map(Hit::Tile)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
