//! Board geometry: rows, cells and adjacency.
//!
//! The surface is a hex lattice stored as skewed rows. Each row keeps its own
//! column range, and successive rows are shifted by one column, so a cell at
//! `(row r, column c)` touches:
//!
//! ```text
//!   row r+1:        (r+1, c-1)  (r+1, c)
//!   row r:    (r, c-1)    [r, c]    (r, c+1)
//!   row r-1:          (r-1, c)  (r-1, c+1)
//! ```
//!
//! Cells on the rim have fewer than six neighbors. The adjacency table is
//! computed once in [`Board::new`] and the board is never mutated afterwards.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{BoardConfig, CellId, ConfigError, RowBounds};

/// Up to six neighbors, stored inline.
pub type Neighbors = SmallVec<[CellId; 6]>;

/// One cell of the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    id: CellId,
    row: usize,
    column: i32,
}

impl Cell {
    /// Board-issued id.
    #[must_use]
    pub const fn id(&self) -> CellId {
        self.id
    }

    /// Row index, 0 at the bottom.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column index, 0 for column `A`.
    #[must_use]
    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Display name: column letter followed by the 1-based row number.
    #[must_use]
    pub fn name(&self) -> String {
        // Board construction caps columns at `Z`.
        let letter = char::from(b'A' + self.column as u8);
        format!("{}{}", letter, self.row + 1)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// A row of consecutive cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    number: usize,
    bounds: RowBounds,
    cells: Vec<CellId>,
}

impl Row {
    /// Row index, 0 at the bottom.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Column range covered by the row.
    #[must_use]
    pub const fn bounds(&self) -> RowBounds {
        self.bounds
    }

    /// Cells from the lowest column to the highest.
    #[must_use]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// The cell at `column`, or `None` outside the row.
    #[must_use]
    pub fn cell(&self, column: i32) -> Option<CellId> {
        if self.bounds.contains(column) {
            self.cells.get((column - self.bounds.start) as usize).copied()
        } else {
            None
        }
    }
}

/// Immutable playing surface.
#[derive(Clone, Debug)]
pub struct Board {
    rows: Vec<Row>,
    cells: Vec<Cell>,
    adjacency: Vec<Neighbors>,
    names: FxHashMap<String, CellId>,
}

impl Board {
    /// Build a board from a layout.
    pub fn new(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// The 47-cell standard board.
    #[must_use]
    pub fn standard() -> Self {
        Self::build(&BoardConfig::standard())
    }

    /// The 44-cell hexagonal board.
    #[must_use]
    pub fn hexagon() -> Self {
        Self::build(&BoardConfig::hexagon())
    }

    fn build(config: &BoardConfig) -> Self {
        let mut rows = Vec::with_capacity(config.rows.len());
        let mut cells = Vec::with_capacity(config.cell_count());

        for (number, &bounds) in config.rows.iter().enumerate() {
            let mut row_cells = Vec::with_capacity(bounds.width());
            for column in bounds.start..bounds.end {
                let id = CellId::new(cells.len() as u16);
                cells.push(Cell {
                    id,
                    row: number,
                    column,
                });
                row_cells.push(id);
            }
            rows.push(Row {
                number,
                bounds,
                cells: row_cells,
            });
        }

        let mut board = Self {
            rows,
            cells,
            adjacency: Vec::new(),
            names: FxHashMap::default(),
        };
        board.adjacency = board.cells.iter().map(|c| board.compute_adjacent(c)).collect();
        board.names = board.cells.iter().map(|c| (c.name(), c.id)).collect();
        board
    }

    fn compute_adjacent(&self, cell: &Cell) -> Neighbors {
        let r = cell.row as i32;
        let c = cell.column;
        [
            (r, c - 1),
            (r, c + 1),
            (r - 1, c),
            (r - 1, c + 1),
            (r + 1, c),
            (r + 1, c - 1),
        ]
        .into_iter()
        .filter_map(|(row, column)| self.cell_at(row, column))
        .collect()
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a validated layout.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows, bottom first.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Every cell in id order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Every cell id in order.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> {
        CellId::all(self.cells.len())
    }

    /// Look up a cell.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different, larger board.
    #[must_use]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.index()]
    }

    /// True if `id` belongs to this board.
    #[must_use]
    pub fn contains(&self, id: CellId) -> bool {
        id.index() < self.cells.len()
    }

    /// The cell at `(row, column)`, if the board has one there.
    #[must_use]
    pub fn cell_at(&self, row: i32, column: i32) -> Option<CellId> {
        if row < 0 {
            return None;
        }
        self.rows.get(row as usize).and_then(|r| r.cell(column))
    }

    /// Neighbors of `id`; at most six, fewer on the rim.
    #[must_use]
    pub fn adjacent(&self, id: CellId) -> &[CellId] {
        &self.adjacency[id.index()]
    }

    /// True if the cell has a full ring of six neighbors.
    #[must_use]
    pub fn is_interior(&self, id: CellId) -> bool {
        self.adjacent(id).len() == 6
    }

    /// Display name of a cell.
    #[must_use]
    pub fn name(&self, id: CellId) -> String {
        self.cell(id).name()
    }

    /// Resolve a display name such as `"C3"`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<CellId> {
        self.names.get(name).copied()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
