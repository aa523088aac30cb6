//! Grid coordinates and the four movement directions.
//!
//! `Position` is signed so that neighbour generation at the maze boundary can
//! produce off-grid candidates (`x = -1`) without wrapping; the grid model
//! rejects them as "not passable" instead of panicking on an index.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

// ── Position ──────────────────────────────────────────────────────────────────

/// A cell coordinate: `x` is the column, `y` the row.  `(0, 0)` is the
/// top-left corner and `y` grows downwards.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one cell away in `dir`.  May be off-grid.
    #[inline]
    pub fn step(self, dir: Direction) -> Position {
        let (dx, dy) = dir.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// The four neighbours in [`Direction::EXPANSION_ORDER`].
    #[inline]
    pub fn neighbors(self) -> [Position; 4] {
        Direction::EXPANSION_ORDER.map(|d| self.step(d))
    }

    /// Manhattan (4-directional) distance ignoring walls.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` if `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    /// The direction of a single orthogonal step from `self` to `other`, or
    /// `None` if the two are not adjacent.
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        Direction::EXPANSION_ORDER
            .into_iter()
            .find(|&d| self.step(d) == other)
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

impl From<[i32; 2]> for Position {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Position::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"x,y"` or `"(x, y)"`.
impl FromStr for Position {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| CoreError::Parse(format!("invalid position {s:?}: expected \"x,y\"")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<i32>()
                .map_err(|e| CoreError::Parse(format!("invalid coordinate {v:?} in {s:?}: {e}")))
        };
        Ok(Position::new(parse(x)?, parse(y)?))
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four orthogonal moves.  No diagonals.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Neighbour expansion order used by path search.  Fixes which of several
    /// equal-length paths is returned.
    pub const EXPANSION_ORDER: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// `(dx, dy)` offset of one step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up    => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down  => Direction::Up,
            Direction::Left  => Direction::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up    => "up",
            Direction::Right => "right",
            Direction::Down  => "down",
            Direction::Left  => "left",
        };
        f.write_str(s)
    }
}

/// Accepts `up/right/down/left` or the single letters `u/r/d/l`, any case.
impl FromStr for Direction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u"    => Ok(Direction::Up),
            "right" | "r" => Ok(Direction::Right),
            "down" | "d"  => Ok(Direction::Down),
            "left" | "l"  => Ok(Direction::Left),
            other => Err(CoreError::Parse(format!(
                "invalid direction {other:?}: expected up, right, down or left"
            ))),
        }
    }
}
