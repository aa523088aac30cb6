//! Maze loaders.
//!
//! # CSV format
//!
//! Headerless, one record per grid row, one field per cell:
//!
//! ```csv
//! 0,0,0,0,0,0
//! 0,1,1,0,1,0
//! 0,0,0,0,0,0
//! ```
//!
//! `0` is a free cell and `1` a wall.  Fields are trimmed.  Records of
//! differing length are read as-is and rejected by [`Grid::from_rows`] with
//! [`GridError::Ragged`], so the error names the offending row.
//!
//! # Compact text format
//!
//! [`parse_grid_str`] accepts one line per row with one character per cell:
//! `0` or `.` for free, `1` or `#` for wall.  Blank lines are skipped.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::{Grid, GridError, GridResult};

/// Load a grid from a headerless CSV file.
pub fn load_grid_csv(path: &Path) -> GridResult<Grid> {
    let file = std::fs::File::open(path)?;
    let grid = load_grid_reader(file)?;
    debug!(path = %path.display(), width = grid.width(), height = grid.height(), "loaded maze");
    Ok(grid)
}

/// Like [`load_grid_csv`] but accepts any `Read` source.
pub fn load_grid_reader<R: Read>(reader: R) -> GridResult<Grid> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<u8>> = Vec::new();
    for (y, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| GridError::Parse(e.to_string()))?;
        let row = record
            .iter()
            .enumerate()
            .map(|(x, field)| {
                field.parse::<u8>().map_err(|_| {
                    GridError::Parse(format!(
                        "invalid cell {field:?} at ({x}, {y}): expected 0 or 1"
                    ))
                })
            })
            .collect::<GridResult<Vec<u8>>>()?;
        rows.push(row);
    }

    Grid::from_rows(&rows)
}

/// Parse the compact one-character-per-cell text form.
pub fn parse_grid_str(text: &str) -> GridResult<Grid> {
    let rows = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, ch)| match ch {
                    '0' | '.' => Ok(0u8),
                    '1' | '#' => Ok(1u8),
                    other => Err(GridError::Parse(format!(
                        "invalid cell {other:?} at ({x}, {y}): expected 0, 1, '.' or '#'"
                    ))),
                })
                .collect::<GridResult<Vec<u8>>>()
        })
        .collect::<GridResult<Vec<Vec<u8>>>>()?;

    Grid::from_rows(&rows)
}
