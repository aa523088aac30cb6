//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! replan-and-step of the pursuer; there is no mapping to simulated wall
//! time.  `SimClock` optionally carries a real-time pacing interval used by
//! drivers that animate the chase (the core itself never sleeps).

use std::fmt;
use std::time::Duration;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick.  Cheap to copy, holds no heap data.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The next tick to be processed — advanced by `advance()` after each one.
    pub current_tick: Tick,
    /// Real-time delay a pacing driver waits between ticks.  Zero = no pacing.
    pub tick_interval_ms: u64,
}

impl SimClock {
    pub fn new(tick_interval_ms: u64) -> Self {
        Self { current_tick: Tick::ZERO, tick_interval_ms }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Number of ticks processed so far.
    #[inline]
    pub fn elapsed_ticks(&self) -> u64 {
        self.current_tick.0
    }

    /// Pacing interval as a `Duration`.
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-loop configuration.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// `Game::run`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Upper bound on ticks processed by one `run` call.
    pub max_ticks: u64,

    /// Stop the run at the end of the tick in which the ghost reaches the
    /// target.  When `false` the run always lasts `max_ticks`.
    pub stop_on_catch: bool,

    /// Seed for drivers that move the target randomly.  The same seed always
    /// produces the same chase.
    pub seed: u64,

    /// Real-time delay between ticks for animated drivers.
    pub tick_interval_ms: u64,
}

impl SimConfig {
    /// The tick at which a run ends at the latest (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_interval_ms)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_ticks:        100,
            stop_on_catch:    true,
            seed:             42,
            tick_interval_ms: 100,
        }
    }
}
