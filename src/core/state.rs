//! Session phase and portable snapshots.
//!
//! ## Phase
//!
//! `Placement` → `Play` → `Finished`, never reversed.
//!
//! ## GameSnapshot
//!
//! A position written in terms that survive outside the process: cell
//! display names, token colors and the phase. Restoring goes through
//! [`Game::restore`](crate::rules::Game::restore), which resolves every name
//! against the live board.
//!
//! ```
//! use rust_stacks::core::{Color, GameConfig, GameSnapshot, Phase};
//! use rust_stacks::rules::Game;
//!
//! let snapshot = GameSnapshot::new(Phase::Play, Color::White)
//!     .with_stack("A1", [Color::Red])
//!     .with_stack("B1", [Color::Black, Color::White]);
//!
//! let game = Game::restore(GameConfig::default(), &snapshot).unwrap();
//! let b1 = game.board().find("B1").unwrap();
//! assert_eq!(game.stack(b1).map(|s| s.height()), Some(2));
//! assert_eq!(game.snapshot(), snapshot);
//! ```

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::SnapshotError;

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Placement,
    Play,
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Placement => "PLACEMENT",
            Phase::Play => "PLAY",
            Phase::Finished => "FINISHED",
        };
        f.write_str(name)
    }
}

/// One occupied cell of a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotStack {
    /// Display name of the cell, e.g. `"C3"`.
    pub cell: String,
    /// Token colors, bottom first.
    pub colors: Vec<Color>,
}

/// Serializable session position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    /// Color to act.
    pub current: Color,
    /// Occupied cells in board order.
    pub stacks: Vec<SnapshotStack>,
}

impl GameSnapshot {
    /// Create a snapshot with no stacks.
    #[must_use]
    pub fn new(phase: Phase, current: Color) -> Self {
        Self {
            phase,
            current,
            stacks: Vec::new(),
        }
    }

    /// Add a stack on the named cell.
    #[must_use]
    pub fn with_stack(mut self, cell: impl Into<String>, colors: impl Into<Vec<Color>>) -> Self {
        self.stacks.push(SnapshotStack {
            cell: cell.into(),
            colors: colors.into(),
        });
        self
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes written by [`GameSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
