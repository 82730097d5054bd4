//! Actions and validated action tokens.
//!
//! A driver never mutates a session directly. It asks the session to
//! validate an intent, and only the resulting token can be submitted:
//! - `ValidatedPlacement`: one empty cell, placement phase
//! - `ValidatedMove`: one legal stack move, play phase
//!
//! Tokens can only be created by [`Game`](crate::rules::Game). Each one
//! remembers the ply it was validated at, so a token that outlived another
//! submission is refused instead of being applied to a different position.

use serde::{Deserialize, Serialize};

use super::cell::CellId;

/// A requested stack move, not yet validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: CellId,
    pub to: CellId,
}

impl Move {
    /// Create a move from `from` onto `to`.
    #[must_use]
    pub const fn new(from: CellId, to: CellId) -> Self {
        Self { from, to }
    }
}

/// An empty cell accepted for placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValidatedPlacement {
    cell: CellId,
    ply: u32,
}

impl ValidatedPlacement {
    pub(crate) const fn new(cell: CellId, ply: u32) -> Self {
        Self { cell, ply }
    }

    /// The cell that will receive the new stack.
    #[must_use]
    pub const fn cell(&self) -> CellId {
        self.cell
    }

    pub(crate) const fn ply(&self) -> u32 {
        self.ply
    }
}

/// A move accepted by the move validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValidatedMove {
    mv: Move,
    ply: u32,
}

impl ValidatedMove {
    pub(crate) const fn new(mv: Move, ply: u32) -> Self {
        Self { mv, ply }
    }

    /// The underlying move.
    #[must_use]
    pub const fn as_move(&self) -> Move {
        self.mv
    }

    /// Source cell.
    #[must_use]
    pub const fn from(&self) -> CellId {
        self.mv.from
    }

    /// Destination cell.
    #[must_use]
    pub const fn to(&self) -> CellId {
        self.mv.to
    }

    pub(crate) const fn ply(&self) -> u32 {
        self.ply
    }
}

/// Either kind of validated action, as returned by a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Place(ValidatedPlacement),
    Move(ValidatedMove),
}

impl From<ValidatedPlacement> for Action {
    fn from(placement: ValidatedPlacement) -> Self {
        Action::Place(placement)
    }
}

impl From<ValidatedMove> for Action {
    fn from(mv: ValidatedMove) -> Self {
        Action::Move(mv)
    }
}
