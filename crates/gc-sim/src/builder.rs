//! Fluent builder for constructing a [`Game`].

use std::sync::Arc;

use gc_core::{Position, SimConfig};
use gc_grid::{Grid, PathFinder};
use tracing::info;

use crate::error::Actor;
use crate::game::{GameStats, check_placement};
use crate::{Game, Ghost, SimResult};

/// Fluent builder for [`Game<F>`].
///
/// # Required inputs
///
/// - the maze [`Grid`] (owned or already in an `Arc`)
/// - ghost and target start positions
/// - `F: PathFinder` — the search algorithm (e.g. [`gc_grid::BfsPathFinder`])
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                 |
/// |---------------|-------------------------|
/// | `.config(c)`  | `SimConfig::default()`  |
///
/// # Example
///
/// ```rust,ignore
/// let mut game = GameBuilder::new(grid, ghost, pacman, BfsPathFinder)
///     .config(config)
///     .build()?;
/// game.run(&mut StationaryTarget, &mut NoopObserver)?;
/// ```
pub struct GameBuilder<F: PathFinder> {
    grid:   Arc<Grid>,
    ghost:  Position,
    target: Position,
    finder: F,
    config: Option<SimConfig>,
}

impl<F: PathFinder> GameBuilder<F> {
    /// Create a builder with all required inputs.
    pub fn new(
        grid:   impl Into<Arc<Grid>>,
        ghost:  Position,
        target: Position,
        finder: F,
    ) -> Self {
        Self {
            grid: grid.into(),
            ghost,
            target,
            finder,
            config: None,
        }
    }

    /// Supply the run-loop configuration.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validate start positions, compute the initial path, and return a
    /// ready-to-run [`Game`].
    pub fn build(self) -> SimResult<Game<F>> {
        check_placement(&self.grid, Actor::Ghost, self.ghost)?;
        check_placement(&self.grid, Actor::Target, self.target)?;

        let config = self.config.unwrap_or_default();
        let ghost = Ghost::new(self.ghost, Arc::clone(&self.grid), self.finder);
        let initial_path = ghost.shortest_path_to(self.target);

        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            ghost = %self.ghost,
            target = %self.target,
            initial_path_len = initial_path.len(),
            "game constructed"
        );

        Ok(Game {
            clock:        config.make_clock(),
            config,
            grid:         self.grid,
            target:       self.target,
            ghost,
            last_path:    initial_path.clone(),
            initial_path,
            stats:        GameStats::default(),
        })
    }
}
