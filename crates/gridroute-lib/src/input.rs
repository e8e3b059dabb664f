//! Parser for the whitespace-delimited problem format.
//!
//! ```text
//! rows cols
//! w(0,0) w(0,1) ... w(rows-1,cols-1)
//! start_row start_col end_row end_col
//! ```
//!
//! Tokens may be split across lines arbitrarily; only their order matters.

use std::io::Read;
use std::str::SplitWhitespace;

use crate::error::{Error, Result};
use crate::grid::{Cell, Grid, MAX_CELL_WEIGHT};
use crate::routing::RouteRequest;
use crate::search::SearchAlgorithm;

/// A parsed routing problem with validated endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub grid: Grid,
    pub start: Cell,
    pub end: Cell,
}

impl Problem {
    /// Build the routing request for this problem.
    pub fn request(&self, algorithm: SearchAlgorithm) -> RouteRequest {
        RouteRequest::dial(self.start, self.end).with_algorithm(algorithm)
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next_int(&mut self, expected: &'static str) -> Result<i64> {
        let token = self
            .inner
            .next()
            .ok_or(Error::UnexpectedEof { expected })?;
        token.parse().map_err(|_| Error::InvalidToken {
            token: token.to_string(),
            expected,
        })
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

fn dimension(value: i64) -> Option<usize> {
    usize::try_from(value).ok().filter(|&value| value > 0)
}

fn resolve_cell(row: i64, col: i64, grid: &Grid) -> Result<Cell> {
    let out_of_bounds = || Error::CellOutOfBounds {
        row,
        col,
        rows: grid.rows(),
        cols: grid.cols(),
    };
    let cell = Cell::new(
        usize::try_from(row).map_err(|_| out_of_bounds())?,
        usize::try_from(col).map_err(|_| out_of_bounds())?,
    );
    if grid.contains(cell) {
        Ok(cell)
    } else {
        Err(out_of_bounds())
    }
}

/// Parse a problem from its textual form.
///
/// All four endpoint coordinates are checked against the grid bounds.
pub fn parse_problem(text: &str) -> Result<Problem> {
    let mut tokens = Tokens::new(text);

    let raw_rows = tokens.next_int("grid rows")?;
    let raw_cols = tokens.next_int("grid columns")?;
    let (Some(rows), Some(cols)) = (dimension(raw_rows), dimension(raw_cols)) else {
        return Err(Error::InvalidDimensions {
            rows: usize::try_from(raw_rows).unwrap_or(0),
            cols: usize::try_from(raw_cols).unwrap_or(0),
            cells: 0,
        });
    };
    let cells = rows.checked_mul(cols).ok_or(Error::InvalidDimensions {
        rows,
        cols,
        cells: 0,
    })?;

    let mut weights = Vec::with_capacity(cells.min(1 << 20));
    for index in 0..cells {
        let value = tokens.next_int("cell weight")?;
        let weight = u8::try_from(value)
            .ok()
            .filter(|&weight| weight <= MAX_CELL_WEIGHT)
            .ok_or(Error::InvalidWeight { index, value })?;
        weights.push(weight);
    }
    let grid = Grid::new(rows, cols, weights)?;

    let start_row = tokens.next_int("start row")?;
    let start_col = tokens.next_int("start column")?;
    let end_row = tokens.next_int("end row")?;
    let end_col = tokens.next_int("end column")?;
    let start = resolve_cell(start_row, start_col, &grid)?;
    let end = resolve_cell(end_row, end_col, &grid)?;

    let trailing = tokens.remaining();
    if trailing > 0 {
        tracing::warn!(trailing, "ignoring tokens after the end coordinates");
    }

    Ok(Problem { grid, start, end })
}

/// Read and parse a problem from any reader.
///
/// Input that is not UTF-8 is rejected as malformed rather than as an IO
/// failure.
pub fn read_problem<R: Read>(mut reader: R) -> Result<Problem> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = std::str::from_utf8(&bytes).map_err(|error| Error::InvalidEncoding {
        offset: error.valid_up_to(),
    })?;
    parse_problem(text)
}
