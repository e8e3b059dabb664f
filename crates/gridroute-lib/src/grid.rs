use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Largest traversal cost a passable cell may carry.
pub const MAX_CELL_WEIGHT: u8 = 9;

/// Weight value marking a cell as impassable.
pub const IMPASSABLE: u8 = 0;

/// Position within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular grid of cell weights stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    weights: Vec<u8>,
}

impl Grid {
    /// Build a grid from its dimensions and a flat row-major weight list.
    ///
    /// Weights must lie in `0..=9`; zero marks an impassable cell.
    pub fn new(rows: usize, cols: usize, weights: Vec<u8>) -> Result<Self> {
        let cells = weights.len();
        let expected = rows.checked_mul(cols);
        if rows == 0 || cols == 0 || expected != Some(cells) {
            return Err(Error::InvalidDimensions { rows, cols, cells });
        }

        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|&(_, &weight)| weight > MAX_CELL_WEIGHT)
        {
            return Err(Error::InvalidWeight {
                index,
                value: i64::from(value),
            });
        }

        Ok(Self {
            rows,
            cols,
            weights,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Raw row-major weights.
    pub fn weights(&self) -> &[u8] {
        &self.weights
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Linear index of `cell`, or `None` when it lies outside the grid.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell).then(|| cell.row * self.cols + cell.col)
    }

    /// Cell addressed by a linear index. The index must be below [`Grid::len`].
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.cols, index % self.cols)
    }

    /// Weight of `cell`, or `None` when it lies outside the grid.
    pub fn weight_at(&self, cell: Cell) -> Option<u8> {
        self.index_of(cell).map(|index| self.weights[index])
    }

    /// Weight stored at a linear index.
    pub fn weight_at_index(&self, index: usize) -> u8 {
        self.weights[index]
    }

    /// Whether `cell` is inside the grid and has a non-zero weight.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.weight_at(cell).is_some_and(|weight| weight != IMPASSABLE)
    }

    pub fn is_passable_index(&self, index: usize) -> bool {
        self.weights[index] != IMPASSABLE
    }

    /// Largest weight present in the grid (zero when every cell is impassable).
    pub fn max_weight(&self) -> u8 {
        self.weights.iter().copied().max().unwrap_or(IMPASSABLE)
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.weights
            .iter()
            .filter(|&&weight| weight != IMPASSABLE)
            .count()
    }
}
