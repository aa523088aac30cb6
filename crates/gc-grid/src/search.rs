//! Path-search trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! `gc-sim` calls path search through the [`PathFinder`] trait, so
//! applications can swap in another strategy (A*, a scripted pursuer, …)
//! without touching the game loop.  The default [`BfsPathFinder`] is exact
//! for unit-cost 4-directional grids.
//!
//! # "No path" is not an error
//!
//! An unreachable target yields an empty [`Path`].  Callers check
//! [`Path::next_step`] before moving.

use std::collections::VecDeque;

use gc_core::Position;
use tracing::trace;

use crate::Grid;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a path query: positions from the searcher's start to the
/// target, both inclusive.
///
/// Consecutive positions are orthogonally adjacent and every position is
/// passable.  An empty `Path` means the target was not reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Position>);

impl Path {
    /// The empty "no path" value.
    pub const fn empty() -> Self {
        Path(Vec::new())
    }

    /// Number of positions, including both ends.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves the path takes (`len - 1`, or 0 for an empty path).
    #[inline]
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Position> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Position> {
        self.0.last().copied()
    }

    /// The position after the start: where a pursuer following this path
    /// moves next.  `None` for empty and single-position paths.
    #[inline]
    pub fn next_step(&self) -> Option<Position> {
        self.0.get(1).copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.0
    }

    /// `true` if every consecutive pair is adjacent and every position is
    /// passable on `grid`.  The empty path is trivially valid.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        self.0.iter().all(|&p| grid.is_passable(p))
            && self.0.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

impl From<Vec<Position>> for Path {
    fn from(v: Vec<Position>) -> Self {
        Path(v)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable path-search engine.
///
/// Implementations must be `Send + Sync` so a game holding one can move
/// between threads; the search itself always runs synchronously.
pub trait PathFinder: Send + Sync {
    /// Compute a path from `from` to `to` on `grid`.
    ///
    /// Returns `[from]` when `from == to` and an empty path when `to` cannot
    /// be reached.
    fn find_path(&self, grid: &Grid, from: Position, to: Position) -> Path;
}

// ── BfsPathFinder ─────────────────────────────────────────────────────────────

/// Breadth-first search over free cells with unit step cost.
///
/// Neighbours are expanded up, right, down, left, and a cell is marked
/// visited when it is enqueued.  Among several shortest paths the one found
/// first under that order is returned, so results are fully deterministic.
///
/// O(W·H) time and memory: each passable cell is enqueued at most once.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPathFinder;

impl PathFinder for BfsPathFinder {
    fn find_path(&self, grid: &Grid, from: Position, to: Position) -> Path {
        bfs(grid, from, to)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

/// Sentinel for "no parent" in the flat parent array.
const NO_PARENT: usize = usize::MAX;

fn bfs(grid: &Grid, from: Position, to: Position) -> Path {
    if from == to {
        return Path(vec![from]);
    }
    if !grid.is_passable(to) {
        return Path::empty();
    }
    let Some(start) = grid.index_of(from).filter(|_| grid.is_passable(from)) else {
        return Path::empty();
    };
    let goal = grid.index_of(to).unwrap_or(NO_PARENT);

    let mut visited = vec![false; grid.len()];
    let mut parent  = vec![NO_PARENT; grid.len()];
    let mut queue   = VecDeque::with_capacity(grid.width() + grid.height());

    visited[start] = true;
    queue.push_back(start);
    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        if current == goal {
            trace!(%from, %to, expanded, "bfs reached target");
            return reconstruct(grid, &parent, goal);
        }
        expanded += 1;

        for neighbor in grid.passable_neighbors(grid.position_of(current)) {
            // passable_neighbors only yields in-bounds positions.
            let Some(n) = grid.index_of(neighbor) else { continue };
            if !visited[n] {
                visited[n] = true;
                parent[n] = current;
                queue.push_back(n);
            }
        }
    }

    trace!(%from, %to, expanded, "bfs exhausted without reaching target");
    Path::empty()
}

fn reconstruct(grid: &Grid, parent: &[usize], goal: usize) -> Path {
    let mut positions = Vec::new();
    let mut cur = goal;
    loop {
        positions.push(grid.position_of(cur));
        let p = parent[cur];
        if p == NO_PARENT {
            break;
        }
        cur = p;
    }
    positions.reverse();
    Path(positions)
}
