//! Cell identification.
//!
//! Every cell of a [`Board`](crate::board::Board) gets a `CellId` when the
//! board is built. Ids are dense: a board with `n` cells uses `0..n`, in
//! row-major order starting from row 0.
//!
//! A `CellId` only means something together with the board that issued it.
//! To identify a cell outside the process, use its display name
//! (`Board::name`) and look it up again with `Board::find`.
//!
//! ```
//! use rust_stacks::board::Board;
//!
//! let board = Board::standard();
//! let first = board.cell_ids().next().unwrap();
//!
//! assert_eq!(first.index(), 0);
//! assert_eq!(board.name(first), "A1");
//! assert_eq!(board.find("A1"), Some(first));
//! ```

use serde::{Deserialize, Serialize};

/// Dense index of a cell on its board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId(pub u16);

impl CellId {
    /// Create a cell ID from a raw index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Index into per-cell tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every id of a board with `cell_count` cells.
    pub fn all(cell_count: usize) -> impl Iterator<Item = CellId> {
        (0..cell_count as u16).map(CellId)
    }
}

impl From<u16> for CellId {
    fn from(index: u16) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}
