//! The pursuer.

use std::sync::Arc;

use gc_core::Position;
use gc_grid::{Grid, Path, PathFinder};

/// A pursuer that plans over a shared, read-only grid.
///
/// The ghost does not validate its own moves: [`move_to`][Self::move_to]
/// trusts the caller to pass a position taken from a path this ghost
/// returned.  [`Game`][crate::Game] upholds that by only ever moving to
/// `path.next_step()`.
pub struct Ghost<F: PathFinder> {
    position: Position,
    grid:     Arc<Grid>,
    finder:   F,
}

impl<F: PathFinder> Ghost<F> {
    pub fn new(position: Position, grid: Arc<Grid>, finder: F) -> Self {
        Self { position, grid, finder }
    }

    /// Shortest path from the current position to `target`.
    ///
    /// `[position]` when already there; empty when `target` is unreachable.
    pub fn shortest_path_to(&self, target: Position) -> Path {
        self.finder.find_path(&self.grid, self.position, target)
    }

    /// Replace the current position.  No adjacency or passability check.
    #[inline]
    pub fn move_to(&mut self, next: Position) {
        self.position = next;
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn finder(&self) -> &F {
        &self.finder
    }
}
