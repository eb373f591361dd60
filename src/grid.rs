//! Occupancy grid world for discrete planning.
//!
//! The planners operate on a binary occupancy grid: each cell is either
//! `Free` or `Blocked`. Raw caller input is a row-major list of rows of
//! `u8` (0 = free, nonzero = blocked). Rows may be jagged; construction
//! right-pads short rows with blocked cells, so the grid is rectangular
//! by the time any navigability query runs.

use serde::{Deserialize, Serialize};

/// Grid coordinate as `(row, col)`.
pub type Cell = (usize, usize);

/// Raw input marker used to pad short rows (blocked).
const PAD_VALUE: u8 = 1;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Navigable space.
    Free,
    /// Occupied/obstructed space.
    Blocked,
}

/// Rectangular occupancy grid with dense row-major storage.
///
/// Immutable from the planners' point of view: the mutating methods exist
/// for fixture construction only, before a grid is handed to a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridWorld {
    /// Cell states, row-major (`row * width + col`).
    cells: Vec<CellState>,
    /// Number of rows.
    height: usize,
    /// Number of columns.
    width: usize,
}

impl GridWorld {
    /// Create a grid with every cell free.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            cells: vec![CellState::Free; height * width],
            height,
            width,
        }
    }

    /// Build a grid from raw rows, padding jagged input to a rectangle.
    ///
    /// Accepts both already-rectangular and jagged row lists; short rows
    /// are extended on the right with blocked cells up to the longest
    /// row's length. Never fails: empty input yields a zero-size grid on
    /// which nothing is navigable.
    pub fn rectangularize(rows: Vec<Vec<u8>>) -> Self {
        let rows = pad_rows(rows);
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let cells = rows
            .iter()
            .flatten()
            .map(|&v| {
                if v == 0 {
                    CellState::Free
                } else {
                    CellState::Blocked
                }
            })
            .collect();
        Self {
            cells,
            height,
            width,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total cell count.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Dense index of a cell. Caller guarantees the cell is in bounds.
    #[inline]
    pub(crate) fn index(&self, cell: Cell) -> usize {
        cell.0 * self.width + cell.1
    }

    /// Set a cell's state. Fixture construction only.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of bounds.
    pub fn set(&mut self, cell: Cell, state: CellState) {
        assert!(
            cell.0 < self.height && cell.1 < self.width,
            "cell {:?} outside {}x{} grid",
            cell,
            self.height,
            self.width
        );
        let idx = self.index(cell);
        self.cells[idx] = state;
    }

    /// True iff `cell` is inside the grid and free.
    ///
    /// Bounds are checked before the cell value is read.
    #[inline]
    pub fn is_navigable(&self, cell: Cell) -> bool {
        let (row, col) = cell;
        row < self.height && col < self.width && self.cells[row * self.width + col] == CellState::Free
    }

    /// Navigable orthogonal neighbors of `cell`.
    ///
    /// Candidates are generated in the fixed order
    /// `(r+1,c), (r,c+1), (r-1,c), (r,c-1)` and filtered to navigable
    /// cells. Breadth-first search expands neighbors in this order, which
    /// pins its tie-breaking among equally short paths; the random walker
    /// picks uniformly among the survivors, so the order does not bias it.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let (r, c) = (cell.0 as i64, cell.1 as i64);
        let candidates = [(r + 1, c), (r, c + 1), (r - 1, c), (r, c - 1)];

        let mut result = Vec::with_capacity(4);
        for (nr, nc) in candidates {
            if nr < 0 || nc < 0 {
                continue;
            }
            let neighbor = (nr as usize, nc as usize);
            if self.is_navigable(neighbor) {
                result.push(neighbor);
            }
        }
        result
    }
}

/// Right-pad short rows with the blocked marker so every row has the
/// longest row's length.
fn pad_rows(mut rows: Vec<Vec<u8>>) -> Vec<Vec<u8>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, PAD_VALUE);
    }
    rows
}
