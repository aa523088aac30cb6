//! Maze grid representation.
//!
//! # Data layout
//!
//! Cells are stored in a single row-major `Vec<Cell>`.  The cell at
//! `Position { x, y }` lives at index `y * width + x`:
//!
//! ```text
//! cells[ y * width .. (y + 1) * width ]   // row y
//! ```
//!
//! The same flattened index is used by the path search for its visited and
//! parent arrays, so a search allocates two flat vectors and no hash sets.
//!
//! A `Grid` is immutable once built.  Games share it behind an `Arc`.

use std::fmt;

use gc_core::Position;

use crate::{GridError, GridResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// State of one maze cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Free,
    Wall,
}

impl Cell {
    /// Numeric marker used in maze files: `0` free, `1` wall.
    #[inline]
    pub fn marker(self) -> u8 {
        match self {
            Cell::Free => 0,
            Cell::Wall => 1,
        }
    }

    #[inline]
    pub fn is_free(self) -> bool {
        self == Cell::Free
    }
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    /// Fails with the unrecognised marker.
    fn try_from(marker: u8) -> Result<Self, u8> {
        match marker {
            0 => Ok(Cell::Free),
            1 => Ok(Cell::Wall),
            other => Err(other),
        }
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Rectangular occupancy grid.
///
/// Invariants (checked by every constructor): at least one row and one
/// column, and every row the same length.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:  usize,
    height: usize,
    cells:  Vec<Cell>,
}

impl Grid {
    /// Build from rows of numeric markers (`0` free, `1` wall).
    ///
    /// Row `y` of the input becomes row `y` of the grid; element `x` of that
    /// row is the cell at `Position { x, y }`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> GridResult<Self> {
        let width = check_shape(rows.iter().map(|r| r.as_ref().len()))?;

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.as_ref().iter().enumerate() {
                let cell = Cell::try_from(value)
                    .map_err(|value| GridError::InvalidCell { x, y, value })?;
                cells.push(cell);
            }
        }

        Ok(Self { width, height: rows.len(), cells })
    }

    /// Build from rows of already-typed cells.
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> GridResult<Self> {
        let width = check_shape(rows.iter().map(Vec::len))?;
        let height = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { width, height, cells })
    }

    /// A `width × height` grid with no walls.
    pub fn open(width: usize, height: usize) -> GridResult<Self> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self { width, height, cells: vec![Cell::Free; width * height] })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total cell count, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: an empty grid cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of free cells.
    pub fn free_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_free()).count()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if `pos` lies within `[0, width) × [0, height)`.
    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    /// Row-major index of `pos`, or `None` if it is off-grid.
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.y as usize * self.width + pos.x as usize)
        } else {
            None
        }
    }

    /// Inverse of [`index_of`][Self::index_of].
    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// The cell at `pos`, or `None` if it is off-grid.
    #[inline]
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// `true` iff `pos` is in bounds and its cell is free.
    ///
    /// Off-grid positions are never passable; the bounds check runs before
    /// any indexing.
    #[inline]
    pub fn is_passable(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Some(Cell::Free))
    }

    /// Iterator over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Iterator over the passable orthogonal neighbours of `pos`, in
    /// expansion order (up, right, down, left).
    pub fn passable_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors().into_iter().filter(|&n| self.is_passable(n))
    }
}

/// Renders the grid as rows of `0`/`1` markers, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.marker())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Validate row lengths and return the common width.
fn check_shape(mut lens: impl Iterator<Item = usize>) -> GridResult<usize> {
    let width = match lens.next() {
        None | Some(0) => return Err(GridError::Empty),
        Some(w) => w,
    };
    for (i, got) in lens.enumerate() {
        if got != width {
            return Err(GridError::Ragged { row: i + 1, expected: width, got });
        }
    }
    Ok(width)
}
