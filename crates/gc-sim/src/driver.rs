//! Target drivers: the external collaborators that move pac-man between ticks.
//!
//! The game itself only ever *reads* the target position.  A driver proposes
//! the next one and [`Game::run`][crate::Game::run] applies it through
//! [`Game::set_target`][crate::Game::set_target] before each tick.

use std::collections::VecDeque;

use gc_core::{Direction, Position, SimRng, Tick};
use gc_grid::Grid;

/// Source of target movement.
pub trait TargetDriver {
    /// The target position for `tick`, or `None` to leave it where it is.
    fn next_target(&mut self, tick: Tick, grid: &Grid, current: Position) -> Option<Position>;
}

impl<D: TargetDriver + ?Sized> TargetDriver for Box<D> {
    fn next_target(&mut self, tick: Tick, grid: &Grid, current: Position) -> Option<Position> {
        (**self).next_target(tick, grid, current)
    }
}

/// A target that never moves.
#[derive(Debug, Default, Clone, Copy)]
pub struct StationaryTarget;

impl TargetDriver for StationaryTarget {
    fn next_target(&mut self, _tick: Tick, _grid: &Grid, _current: Position) -> Option<Position> {
        None
    }
}

/// Replays a fixed list of moves, one per tick.  Moves into walls or off the
/// grid are consumed without moving.  `None` entries skip a tick.
#[derive(Debug, Default, Clone)]
pub struct ScriptedTarget {
    moves: VecDeque<Option<Direction>>,
}

impl ScriptedTarget {
    pub fn new(moves: impl IntoIterator<Item = Option<Direction>>) -> Self {
        Self { moves: moves.into_iter().collect() }
    }

    /// Build from directions only, moving every tick.
    pub fn from_directions(dirs: impl IntoIterator<Item = Direction>) -> Self {
        Self::new(dirs.into_iter().map(Some))
    }

    /// Moves not yet replayed.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl TargetDriver for ScriptedTarget {
    fn next_target(&mut self, _tick: Tick, grid: &Grid, current: Position) -> Option<Position> {
        let dir = self.moves.pop_front()??;
        let next = current.step(dir);
        grid.is_passable(next).then_some(next)
    }
}

/// Moves to a uniformly chosen passable neighbour with probability
/// `move_probability` each tick, otherwise stays.  Deterministic for a given
/// seed.
pub struct RandomWalkTarget {
    rng:              SimRng,
    move_probability: f64,
}

impl RandomWalkTarget {
    pub fn new(seed: u64) -> Self {
        Self::with_probability(seed, 1.0)
    }

    pub fn with_probability(seed: u64, move_probability: f64) -> Self {
        Self { rng: SimRng::new(seed), move_probability }
    }
}

impl TargetDriver for RandomWalkTarget {
    fn next_target(&mut self, _tick: Tick, grid: &Grid, current: Position) -> Option<Position> {
        if !self.rng.gen_bool(self.move_probability) {
            return None;
        }
        let options: Vec<Position> = grid.passable_neighbors(current).collect();
        self.rng.choose(&options).copied()
    }
}
