use thiserror::Error;

use crate::grid::Cell;

/// Convenient result alias for the gridroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Grid dimensions are zero, overflow, or disagree with the weight count.
    #[error("invalid grid dimensions {rows}x{cols} for {cells} weights")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        cells: usize,
    },

    /// A cell weight fell outside the supported `0..=9` range.
    #[error("invalid weight {value} at cell index {index}; expected 0..=9")]
    InvalidWeight { index: usize, value: i64 },

    /// A coordinate pair does not address a cell inside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    CellOutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// Raised when no sequence of passable cells connects start and end.
    #[error("no path found between {start} and {end}")]
    Unreachable { start: Cell, end: Cell },

    /// The input ended before all required values were read.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    /// A token could not be parsed as an integer.
    #[error("invalid token '{token}' while reading {expected}")]
    InvalidToken {
        token: String,
        expected: &'static str,
    },

    /// The input bytes are not valid UTF-8 text.
    #[error("input is not valid UTF-8 (first invalid byte at offset {offset})")]
    InvalidEncoding { offset: usize },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialisation errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the error stems from malformed or out-of-range input rather
    /// than from the search itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidDimensions { .. }
                | Error::InvalidWeight { .. }
                | Error::CellOutOfBounds { .. }
                | Error::UnexpectedEof { .. }
                | Error::InvalidToken { .. }
                | Error::InvalidEncoding { .. }
        )
    }
}
