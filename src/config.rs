use std::fs;
use std::path::Path;
use std::time::Duration;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::grid::{Cell, Grid};

/// Drawing surface width in logical units.
pub const SURFACE_WIDTH: i32 = 500;

/// Drawing surface height in logical units.
pub const SURFACE_HEIGHT: i32 = 500;

/// Logical units per grid cell.
pub const CELL_SIZE: i32 = 20;

/// Fixed tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Body position used for a fresh start.
pub const DEFAULT_START_CELL: Cell = Cell::new(100, 100);

/// Food position used for a fresh start.
pub const DEFAULT_FOOD_CELL: Cell = Cell::new(200, 200);

/// Upper bound on how long the event loop blocks waiting for input.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Terminal columns used to draw one grid cell, keeping cells roughly square.
pub const COLUMNS_PER_CELL: u16 = 2;

/// Glyph drawn for body segments and food.
pub const GLYPH_CELL: &str = "██";

/// Colors applied to the play area and HUD.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub surface_bg: Color,
    pub snake: Color,
    pub food: Color,
    pub game_over: Color,
    pub border: Color,
    pub hud_text: Color,
    pub hud_muted: Color,
}

/// Light surface with black body and orange food.
pub const PALETTE: Palette = Palette {
    surface_bg: Color::Rgb(245, 245, 245),
    snake: Color::Black,
    food: Color::Rgb(255, 165, 0),
    game_over: Color::Red,
    border: Color::Gray,
    hud_text: Color::White,
    hud_muted: Color::DarkGray,
};

/// Runtime-tunable game parameters.
///
/// Missing fields in a config file fall back to the compile-time defaults.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub surface_width: i32,
    pub surface_height: i32,
    pub cell_size: i32,
    pub tick_interval_ms: u64,
    pub start_cell: CellConfig,
    pub default_food: CellConfig,
}

/// Serialized form of a [`Cell`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
pub struct CellConfig {
    pub x: i32,
    pub y: i32,
}

impl From<CellConfig> for Cell {
    fn from(value: CellConfig) -> Self {
        Cell::new(value.x, value.y)
    }
}

impl From<Cell> for CellConfig {
    fn from(value: Cell) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            cell_size: CELL_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            start_cell: DEFAULT_START_CELL.into(),
            default_food: DEFAULT_FOOD_CELL.into(),
        }
    }
}

impl GameConfig {
    /// Loads and validates a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = serde_json::from_str::<Self>(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks that the surface, cadence and default cells are coherent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::NonPositiveCellSize(self.cell_size));
        }

        if self.surface_width <= 0
            || self.surface_height <= 0
            || self.surface_width % self.cell_size != 0
            || self.surface_height % self.cell_size != 0
        {
            return Err(ConfigError::MisalignedSurface {
                width: self.surface_width,
                height: self.surface_height,
                cell_size: self.cell_size,
            });
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        let grid = self.grid();
        for (name, cell) in [
            ("start cell", Cell::from(self.start_cell)),
            ("default food", Cell::from(self.default_food)),
        ] {
            if !grid.contains(cell) || !grid.is_aligned(cell) {
                return Err(ConfigError::InvalidCell {
                    name,
                    x: cell.x,
                    y: cell.y,
                });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> Grid {
        Grid::new(self.surface_width, self.surface_height, self.cell_size)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
