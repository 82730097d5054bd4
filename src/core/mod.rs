//! Core types: cells, colors, actions, configuration, errors, RNG, snapshots.
//!
//! Nothing in here knows the rules of the game. The board lives in
//! `board`, the rules in `rules`.

pub mod cell;
pub mod color;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use cell::CellId;
pub use color::{Color, ColorMap};
pub use rng::{GameRng, GameRngState};
pub use config::{BoardConfig, GameConfig, RowBounds, MAX_CELLS, MAX_COLUMNS};
pub use action::{Action, Move, ValidatedMove, ValidatedPlacement};
pub use error::{ConfigError, MoveError, PlacementError, SelfPlayError, SnapshotError};
pub use state::{GameSnapshot, Phase, SnapshotStack};
