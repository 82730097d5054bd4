//! Error types.
//!
//! Rejections are local to the action that caused them: the session is left
//! untouched and the caller decides what to try next.

use thiserror::Error;

use super::cell::CellId;
use super::color::Color;
use super::config::RowBounds;
use super::state::Phase;

/// Why a placement was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("placements are only allowed in the placement phase (current phase: {0})")]
    WrongPhase(Phase),

    #[error("{0} is not a cell of this board")]
    NotOnBoard(CellId),

    #[error("{0} already has a stack on it")]
    Occupied(String),

    #[error("placement was validated against an earlier position")]
    Stale,
}

/// Why a move was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("moves are only allowed in the play phase (current phase: {0})")]
    WrongPhase(Phase),

    #[error("{0} is not a cell of this board")]
    NotOnBoard(CellId),

    #[error("there is no stack on {0} to move")]
    EmptySource(String),

    #[error("the stack on {cell} belongs to {owner}, not {mover}")]
    NotOwner {
        cell: String,
        owner: Color,
        mover: Color,
    },

    #[error("cannot move onto the empty cell {0}")]
    EmptyDestination(String),

    #[error(
        "cannot move a stack of height {height} from {from} to {to} \
         (displacement: {row_delta} rows, {column_delta} columns)"
    )]
    Geometry {
        from: String,
        to: String,
        height: usize,
        row_delta: i32,
        column_delta: i32,
    },

    #[error("move was validated against an earlier position")]
    Stale,
}

/// Invalid board or game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a board needs at least one row")]
    NoRows,

    #[error("row {row} has an empty or negative column range {bounds}")]
    EmptyRow { row: usize, bounds: RowBounds },

    #[error("row {row} reaches column {column}, past the last nameable column (Z)")]
    TooWide { row: usize, column: i32 },

    #[error("board has {cells} cells, more than the {max} a board can index", max = super::config::MAX_CELLS)]
    TooManyCells { cells: usize },

    #[error("{0} cannot take turns")]
    AnchorFirst(Color),

    #[error("anchor stack count must be between 1 and {cells}, got {requested}")]
    AnchorCount { requested: usize, cells: usize },
}

/// A snapshot that does not describe a position on the configured board.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("no cell named {0:?} on this board")]
    UnknownCell(String),

    #[error("cell {0} appears more than once")]
    DuplicateCell(String),

    #[error("stack on {0} has no tokens")]
    EmptyStack(String),

    #[error("{0} cannot be the color to act")]
    AnchorToAct(Color),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("binary snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Why a self-played match stopped before the game finished.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SelfPlayError {
    #[error("{color} returned no action in the {phase} phase although one exists")]
    NoAction { color: Color, phase: Phase },

    #[error("game did not finish within {0} turns")]
    TurnLimit(usize),

    #[error("placement rejected: {0}")]
    Placement(#[from] PlacementError),

    #[error("move rejected: {0}")]
    Move(#[from] MoveError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
