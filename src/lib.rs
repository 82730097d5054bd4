//! # rust-stacks
//!
//! Rules engine for a Dvonn-style stacking game on a trimmed hexagonal board.
//!
//! Two players, White and Black, first fill the board with single tokens.
//! The opening placements are red anchor tokens whoever makes them. Then
//! players move stacks they own onto other stacks, travelling exactly as
//! many cells as the stack is tall. After every move, any stack no longer
//! linked to an anchor through a chain of neighboring stacks is removed.
//! When neither player can move, the taller total of owned stacks wins.
//!
//! ## Design Principles
//!
//! 1. **Single owner**: `Game` holds all mutable state. Everything else
//!    reads it through `&Game`.
//!
//! 2. **Validate, then submit**: mutators only accept tokens produced by
//!    the session's own validators, and each token is good for one
//!    submission at the position it was validated against.
//!
//! 3. **Index arena**: cells are `CellId` indices into an immutable,
//!    shared `Board`; stacks live in a persistent map keyed by `CellId`.
//!
//! ## Modules
//!
//! - `core`: cell ids, colors, actions, configuration, errors, RNG, snapshots
//! - `board`: board geometry, adjacency and stack values
//! - `rules`: the `Game` session, elimination and scoring
//! - `players`: strategies and the self-play driver
//!
//! ```
//! use rust_stacks::{Game, SelfPlay, SelfPlayConfig};
//!
//! let mut game = Game::standard();
//! let summary = SelfPlay::random(SelfPlayConfig::new().with_seed(3))
//!     .play_game(&mut game)
//!     .unwrap();
//!
//! assert_eq!(game.result(), Some(summary.result));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod players;

// Re-export commonly used types
pub use crate::core::{
    CellId, Color, ColorMap,
    GameRng, GameRngState,
    BoardConfig, GameConfig, RowBounds,
    Action, Move, ValidatedMove, ValidatedPlacement,
    ConfigError, MoveError, PlacementError, SelfPlayError, SnapshotError,
    GameSnapshot, Phase, SnapshotStack,
};

pub use crate::board::{Board, Cell, Row, Stack};

pub use crate::rules::{Game, GameResult, MoveOutcome};

pub use crate::players::{MatchSummary, Player, RandomPlayer, SelfPlay, SelfPlayConfig};
