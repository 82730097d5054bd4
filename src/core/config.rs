//! Board and game configuration.
//!
//! Games are configured at startup:
//! - `RowBounds`: the column range of one row
//! - `BoardConfig`: the rows of the playing surface, bottom row first
//! - `GameConfig`: board plus opening rules
//!
//! Two board layouts ship with the crate. `standard()` is the 47-cell board
//! with rows of 10, 10, 10, 9 and 8 cells, every row starting at column A.
//! `hexagon()` trims the two bottom rows from the left (8, 9, 10, 9, 8 cells)
//! so the surface forms a hexagon under the skewed adjacency rule.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::ConfigError;

/// Column names are single letters.
pub const MAX_COLUMNS: i32 = 26;

/// Cell ids are `u16`.
pub const MAX_CELLS: usize = u16::MAX as usize;

/// Half-open column range `start..end` of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowBounds {
    pub start: i32,
    pub end: i32,
}

impl RowBounds {
    /// Create bounds for columns `start..end`.
    #[must_use]
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Number of cells in the row.
    #[must_use]
    pub const fn width(self) -> usize {
        if self.end > self.start {
            (self.end - self.start) as usize
        } else {
            0
        }
    }

    /// True if `column` lies inside the row.
    #[must_use]
    pub const fn contains(self, column: i32) -> bool {
        column >= self.start && column < self.end
    }
}

impl std::fmt::Display for RowBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Shape of the playing surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Row bounds, row 0 (bottom) first.
    pub rows: Vec<RowBounds>,
}

impl BoardConfig {
    /// Build a layout from explicit row bounds.
    pub fn new(rows: impl Into<Vec<RowBounds>>) -> Self {
        Self { rows: rows.into() }
    }

    /// The 47-cell board: rows of 10, 10, 10, 9 and 8 cells.
    #[must_use]
    pub fn standard() -> Self {
        Self::new([
            RowBounds::new(0, 10),
            RowBounds::new(0, 10),
            RowBounds::new(0, 10),
            RowBounds::new(0, 9),
            RowBounds::new(0, 8),
        ])
    }

    /// The 44-cell hexagonal board: rows of 8, 9, 10, 9 and 8 cells.
    #[must_use]
    pub fn hexagon() -> Self {
        Self::new([
            RowBounds::new(2, 10),
            RowBounds::new(1, 10),
            RowBounds::new(0, 10),
            RowBounds::new(0, 9),
            RowBounds::new(0, 8),
        ])
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|r| r.width()).sum()
    }

    /// Check that every row is non-empty and nameable, and that every cell
    /// gets its own id.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows.is_empty() {
            return Err(ConfigError::NoRows);
        }
        for (row, &bounds) in self.rows.iter().enumerate() {
            if bounds.start < 0 || bounds.width() == 0 {
                return Err(ConfigError::EmptyRow { row, bounds });
            }
            if bounds.end > MAX_COLUMNS {
                return Err(ConfigError::TooWide {
                    row,
                    column: bounds.end - 1,
                });
            }
        }
        let cells = self.cell_count();
        if cells > MAX_CELLS {
            return Err(ConfigError::TooManyCells { cells });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board layout.
    pub board: BoardConfig,

    /// Color that places first.
    pub first_color: Color,

    /// Number of anchor stacks seeded by the opening placements.
    pub anchor_stacks: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::standard(),
            first_color: Color::White,
            anchor_stacks: 3,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different board layout.
    #[must_use]
    pub fn with_board(mut self, board: BoardConfig) -> Self {
        self.board = board;
        self
    }

    /// Set the color that places first.
    #[must_use]
    pub fn with_first_color(mut self, color: Color) -> Self {
        self.first_color = color;
        self
    }

    /// Set the number of anchor stacks.
    #[must_use]
    pub fn with_anchor_stacks(mut self, count: usize) -> Self {
        self.anchor_stacks = count;
        self
    }

    /// Check the whole configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        if self.first_color.is_anchor() {
            return Err(ConfigError::AnchorFirst(self.first_color));
        }
        let cells = self.board.cell_count();
        if self.anchor_stacks == 0 || self.anchor_stacks > cells {
            return Err(ConfigError::AnchorCount {
                requested: self.anchor_stacks,
                cells,
            });
        }
        Ok(())
    }
}
