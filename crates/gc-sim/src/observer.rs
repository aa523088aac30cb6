//! Game observer trait, per-tick reports, and the read-only game view handed
//! to observers.

use gc_core::{Position, Tick};
use gc_grid::{Grid, Path};

// ── Data handed to observers ──────────────────────────────────────────────────

/// What happened during one [`Game::tick`][crate::Game::tick].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub tick:       Tick,
    /// Ghost position before the tick.
    pub ghost_from: Position,
    /// Ghost position after the tick.
    pub ghost:      Position,
    pub target:     Position,
    /// Length of the path planned this tick (0 = no path).
    pub path_len:   usize,
    pub moved:      bool,
    /// Ghost and target share a cell after the tick.
    pub caught:     bool,
    /// This is the first tick of the game that ended in a capture.
    pub first_catch: bool,
}

/// Borrowed snapshot of the game state, valid between ticks.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    /// The next tick to be processed.
    pub tick:         Tick,
    pub grid:         &'a Grid,
    pub ghost:        Position,
    pub target:       Position,
    /// Path computed at construction, kept for display.
    pub initial_path: &'a Path,
    /// Path computed by the most recent tick (the initial path before any).
    pub last_path:    &'a Path,
}

impl<'a> GameView<'a> {
    /// The part of `last_path` still ahead of the ghost, starting at its
    /// current position.  Empty when the last plan found no path.
    pub fn remaining_path(&self) -> &'a [Position] {
        let positions = self.last_path.positions();
        match positions.iter().position(|&p| p == self.ghost) {
            Some(i) => &positions[i..],
            None => &[],
        }
    }

    #[inline]
    pub fn is_caught(&self) -> bool {
        self.ghost == self.target
    }
}

/// Totals for one `run` / `run_ticks` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Ticks processed by this call.
    pub ticks:     u64,
    /// First tick of the game in which the ghost reached the target.
    pub caught_at: Option<Tick>,
    /// Moves made by the ghost during this call.
    pub moves:     u64,
}

// ── Observer trait ────────────────────────────────────────────────────────────

/// Callbacks invoked by [`Game::run`][crate::Game::run] and
/// [`Game::run_ticks`][crate::Game::run_ticks].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The core never renders; a console
/// renderer is just another observer.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl GameObserver for Progress {
///     fn on_tick_end(&mut self, report: &TickReport, _view: &GameView<'_>) {
///         println!("{}: ghost at {}", report.tick, report.ghost);
///     }
/// }
/// ```
pub trait GameObserver {
    /// Called before the tick is processed, after the driver has moved the
    /// target.
    fn on_tick_start(&mut self, _tick: Tick, _view: &GameView<'_>) {}

    /// Called after the tick is processed.
    fn on_tick_end(&mut self, _report: &TickReport, _view: &GameView<'_>) {}

    /// Called once, the first time the ghost reaches the target.
    fn on_caught(&mut self, _tick: Tick, _at: Position) {}

    /// Called once after a `run` completes (not after `run_ticks`).
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`GameObserver`] that does nothing.
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// `None` observes nothing; `Some` forwards every hook.
impl<O: GameObserver> GameObserver for Option<O> {
    fn on_tick_start(&mut self, tick: Tick, view: &GameView<'_>) {
        if let Some(o) = self {
            o.on_tick_start(tick, view);
        }
    }

    fn on_tick_end(&mut self, report: &TickReport, view: &GameView<'_>) {
        if let Some(o) = self {
            o.on_tick_end(report, view);
        }
    }

    fn on_caught(&mut self, tick: Tick, at: Position) {
        if let Some(o) = self {
            o.on_caught(tick, at);
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        if let Some(o) = self {
            o.on_run_end(summary);
        }
    }
}
