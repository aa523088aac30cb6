//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `gc-grid`.
///
/// All of these are construction-time failures.  A search that cannot reach
/// its target is not an error; it yields an empty [`Path`][crate::Path].
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, got: usize },

    #[error("invalid cell marker {value} at ({x}, {y}): expected 0 (free) or 1 (wall)")]
    InvalidCell { x: usize, y: usize, value: u8 },

    #[error("maze parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
