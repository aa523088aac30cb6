//! The `Game` struct and its tick loop.

use std::sync::Arc;

use gc_core::{Position, SimClock, SimConfig, Tick};
use gc_grid::{BfsPathFinder, Grid, Path, PathFinder};
use tracing::{debug, info, warn};

use crate::error::Actor;
use crate::{
    GameBuilder, GameObserver, GameView, Ghost, RunSummary, SimError, SimResult, TargetDriver,
    TickReport,
};

// ── Statistics ────────────────────────────────────────────────────────────────

/// Running totals over the whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameStats {
    /// Ticks processed.
    pub ticks:         u64,
    /// Ticks in which the ghost moved.
    pub moves:         u64,
    /// Ticks in which the ghost was not on the target and found no path.
    pub no_path_ticks: u64,
    /// First tick that ended with the ghost on the target.
    pub caught_at:     Option<Tick>,
}

// ── Game ──────────────────────────────────────────────────────────────────────

/// The chase: one ghost re-planning toward one externally driven target.
///
/// Each [`tick`][Self::tick]:
///
/// 1. **Plan** — shortest path from the ghost to the target's current
///    position, from scratch.
/// 2. **Step** — if the path has a second position, move the ghost there.
///    A one-position path (already there) or an empty path (unreachable)
///    leaves the ghost in place.
///
/// Nothing is printed; observers and accessors expose the state.
///
/// Create via [`Game::new`] (BFS) or [`GameBuilder`].
pub struct Game<F: PathFinder = BfsPathFinder> {
    pub(crate) config:       SimConfig,
    pub(crate) clock:        SimClock,
    pub(crate) grid:         Arc<Grid>,
    pub(crate) target:       Position,
    pub(crate) ghost:        Ghost<F>,
    pub(crate) initial_path: Path,
    pub(crate) last_path:    Path,
    pub(crate) stats:        GameStats,
}

impl Game<BfsPathFinder> {
    /// Validate the start positions and compute the initial path with BFS.
    ///
    /// Fails if either position is off-grid or on a wall.
    pub fn new(
        grid:   impl Into<Arc<Grid>>,
        ghost:  Position,
        target: Position,
    ) -> SimResult<Self> {
        GameBuilder::new(grid, ghost, target, BfsPathFinder).build()
    }

    /// Build the grid from `0`/`1` marker rows, then as [`Game::new`].
    pub fn from_markers<R: AsRef<[u8]>>(
        rows:   &[R],
        ghost:  Position,
        target: Position,
    ) -> SimResult<Self> {
        let grid = Grid::from_rows(rows)?;
        Self::new(grid, ghost, target)
    }
}

impl<F: PathFinder> Game<F> {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn ghost_position(&self) -> Position {
        self.ghost.position()
    }

    #[inline]
    pub fn target_position(&self) -> Position {
        self.target
    }

    /// Path computed by the most recent tick; the initial path before any.
    pub fn last_path(&self) -> &Path {
        &self.last_path
    }

    /// Path computed once at construction.  Never recomputed.
    pub fn initial_path(&self) -> &Path {
        &self.initial_path
    }

    pub fn initial_path_len(&self) -> usize {
        self.initial_path.len()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ghost(&self) -> &Ghost<F> {
        &self.ghost
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[inline]
    pub fn is_caught(&self) -> bool {
        self.ghost.position() == self.target
    }

    /// Borrowed snapshot for observers and renderers.
    pub fn view(&self) -> GameView<'_> {
        GameView {
            tick:         self.clock.current_tick,
            grid:         &self.grid,
            ghost:        self.ghost.position(),
            target:       self.target,
            initial_path: &self.initial_path,
            last_path:    &self.last_path,
        }
    }

    // ── External input ────────────────────────────────────────────────────

    /// Move the target.  Rejects off-grid and wall positions and leaves the
    /// target unchanged in that case.
    pub fn set_target(&mut self, pos: Position) -> SimResult<()> {
        check_placement(&self.grid, Actor::Target, pos)?;
        self.target = pos;
        Ok(())
    }

    // ── Core tick ─────────────────────────────────────────────────────────

    /// Re-plan from scratch and advance the ghost at most one cell.
    pub fn tick(&mut self) -> TickReport {
        let now = self.clock.current_tick;
        let ghost_from = self.ghost.position();

        let path = self.ghost.shortest_path_to(self.target);
        let moved = match path.next_step() {
            Some(next) => {
                self.ghost.move_to(next);
                true
            }
            None => false,
        };

        let ghost = self.ghost.position();
        let caught = ghost == self.target;
        let first_catch = caught && self.stats.caught_at.is_none();

        self.stats.ticks += 1;
        if moved {
            self.stats.moves += 1;
        }
        if path.is_empty() {
            self.stats.no_path_ticks += 1;
        }
        if first_catch {
            self.stats.caught_at = Some(now);
            info!(tick = %now, at = %ghost, "ghost caught the target");
        }

        debug!(
            tick = %now,
            from = %ghost_from,
            to = %ghost,
            target = %self.target,
            path_len = path.len(),
            "tick"
        );

        let report = TickReport {
            tick: now,
            ghost_from,
            ghost,
            target: self.target,
            path_len: path.len(),
            moved,
            caught,
            first_catch,
        };
        self.last_path = path;
        self.clock.advance();
        report
    }

    // ── Run loops ─────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`, or until the ghost
    /// catches the target when `config.stop_on_catch` is set.
    ///
    /// Before each tick `driver` may move the target.  A driver proposing an
    /// off-grid or wall position aborts the run with that error.
    pub fn run<D, O>(&mut self, driver: &mut D, observer: &mut O) -> SimResult<RunSummary>
    where
        D: TargetDriver,
        O: GameObserver,
    {
        let mut summary = RunSummary::default();
        while self.clock.current_tick < self.config.end_tick() {
            let report = self.step(driver, observer)?;
            summary.ticks += 1;
            summary.moves += report.moved as u64;
            if self.config.stop_on_catch && report.caught {
                break;
            }
        }
        summary.caught_at = self.stats.caught_at;
        observer.on_run_end(&summary);
        Ok(summary)
    }

    /// Run exactly `n` ticks, ignoring `end_tick` and `stop_on_catch`.
    ///
    /// Useful for tests and interactive stepping.
    pub fn run_ticks<D, O>(&mut self, n: u64, driver: &mut D, observer: &mut O) -> SimResult<RunSummary>
    where
        D: TargetDriver,
        O: GameObserver,
    {
        let mut summary = RunSummary::default();
        for _ in 0..n {
            let report = self.step(driver, observer)?;
            summary.ticks += 1;
            summary.moves += report.moved as u64;
        }
        summary.caught_at = self.stats.caught_at;
        Ok(summary)
    }

    /// Driver input, observer hooks, and one tick.
    fn step<D, O>(&mut self, driver: &mut D, observer: &mut O) -> SimResult<TickReport>
    where
        D: TargetDriver,
        O: GameObserver,
    {
        let now = self.clock.current_tick;

        if let Some(next) = driver.next_target(now, &self.grid, self.target) {
            if next != self.target {
                if let Err(e) = self.set_target(next) {
                    warn!(tick = %now, error = %e, "driver proposed an invalid target");
                    return Err(e);
                }
            }
        }

        observer.on_tick_start(now, &self.view());
        let report = self.tick();
        observer.on_tick_end(&report, &self.view());
        if report.first_catch {
            observer.on_caught(report.tick, report.ghost);
        }
        Ok(report)
    }
}

/// Fail unless `pos` is on the grid and free.
pub(crate) fn check_placement(grid: &Grid, actor: Actor, pos: Position) -> SimResult<()> {
    if !grid.in_bounds(pos) {
        return Err(SimError::OutOfBounds {
            actor,
            pos,
            width:  grid.width(),
            height: grid.height(),
        });
    }
    if !grid.is_passable(pos) {
        return Err(SimError::Blocked { actor, pos });
    }
    Ok(())
}
