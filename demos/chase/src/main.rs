//! chase — a ghost hunting pac-man through a small maze.
//!
//! Every tick the ghost re-plans a shortest path to pac-man and steps one
//! cell along it.  Frames go to stdout, logs to stderr (`RUST_LOG` controls
//! the level).
//!
//! ```text
//! chase [CONFIG.toml]
//! CHASE_TARGET=random CHASE_INTERACTIVE=false chase
//! ```

mod settings;

use std::io::{self, BufRead, Stdout, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gc_core::{Position, Tick};
use gc_grid::{BfsPathFinder, Grid, load_grid_csv, parse_grid_str};
use gc_output::{ConsoleObserver, CsvTraceWriter, Fanout, Legend, TextRenderer, TraceObserver};
use gc_sim::{
    GameBuilder, GameObserver, GameView, RandomWalkTarget, RunSummary, StationaryTarget,
    TargetDriver, TickReport,
};

use settings::{ChaseConfig, DEFAULT_CONFIG_PATH, TargetKind, load_config};

// ── Built-in maze ─────────────────────────────────────────────────────────────

const DEFAULT_MAZE: &str = "\
......
.##.#.
......
.###..
......
";

// ── Pacing ────────────────────────────────────────────────────────────────────

/// Sleeps after every tick so an unattended run can be watched.
struct Paced<O> {
    inner:    O,
    interval: Duration,
}

impl<O: GameObserver> GameObserver for Paced<O> {
    fn on_tick_start(&mut self, tick: Tick, view: &GameView<'_>) {
        self.inner.on_tick_start(tick, view);
    }

    fn on_tick_end(&mut self, report: &TickReport, view: &GameView<'_>) {
        self.inner.on_tick_end(report, view);
        if !report.caught && !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
    }

    fn on_caught(&mut self, tick: Tick, at: Position) {
        self.inner.on_caught(tick, at);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.inner.on_run_end(summary);
    }
}

type Observers = Fanout<ConsoleObserver<Stdout>, Option<TraceObserver<CsvTraceWriter>>>;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let cfg = load_config(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path.display()))?;

    // 1. Maze.
    let grid = load_maze(cfg.maze.as_deref())?;
    info!(width = grid.width(), height = grid.height(), free = grid.free_cells(), "maze ready");

    // 2. Game.
    let mut game = GameBuilder::new(grid, cfg.ghost_position(), cfg.pacman_position(), BfsPathFinder)
        .config(cfg.sim.clone())
        .build()
        .context("placing ghost and pac-man")?;

    // 3. Target driver.
    let mut driver: Box<dyn TargetDriver> = match cfg.target {
        TargetKind::Stationary => Box::new(StationaryTarget),
        TargetKind::Random => {
            Box::new(RandomWalkTarget::with_probability(cfg.sim.seed, cfg.target_move_probability))
        }
    };

    // 4. Observers: console frames, plus an optional CSV trace.
    let mut observers = build_observers(&cfg)?;
    observers.0.show(&game.view());

    // 5. Run.
    let summary = if cfg.interactive {
        run_interactive(&mut game, &mut driver, &mut observers)?
    } else {
        let mut paced = Paced { inner: observers, interval: game.clock().interval() };
        let summary = game.run(&mut driver, &mut paced)?;
        observers = paced.inner;
        summary
    };

    let Fanout(mut console, trace) = observers;
    if let Some(e) = console.take_error() {
        warn!(error = %e, "console output failed");
    }
    if let Some(mut trace) = trace {
        if let Some(e) = trace.take_error() {
            return Err(e).context("writing trace CSV");
        }
        info!(rows = trace.rows_written(), "trace written");
    }

    let stats = game.stats();
    info!(
        ticks = summary.ticks,
        moves = stats.moves,
        no_path_ticks = stats.no_path_ticks,
        caught_at = ?stats.caught_at.map(|t| t.0),
        "chase finished"
    );
    Ok(())
}

fn load_maze(path: Option<&Path>) -> Result<Grid> {
    match path {
        Some(p) => load_grid_csv(p).with_context(|| format!("loading maze {}", p.display())),
        None => parse_grid_str(DEFAULT_MAZE).context("parsing built-in maze"),
    }
}

fn build_observers(cfg: &ChaseConfig) -> Result<Observers> {
    let legend = if cfg.ascii { Legend::ascii() } else { Legend::default() };
    let console = ConsoleObserver::new(io::stdout(), TextRenderer::new(legend))
        .clear_screen(cfg.clear_screen);

    let trace = match &cfg.trace_csv {
        Some(path) => {
            let writer = CsvTraceWriter::new(path)
                .with_context(|| format!("creating trace file {}", path.display()))?;
            info!(path = %path.display(), "writing trace CSV");
            Some(TraceObserver::new(writer))
        }
        None => None,
    };

    Ok(Fanout(console, trace))
}

/// One tick per Enter; `q` (or end of input) stops early.
fn run_interactive<D, O>(
    game:     &mut gc_sim::Game,
    driver:   &mut D,
    observer: &mut O,
) -> Result<RunSummary>
where
    D: TargetDriver,
    O: GameObserver,
{
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let start_moves = game.stats().moves;
    let mut ticks = 0;

    while game.clock().current_tick < game.config().end_tick() {
        if game.config().stop_on_catch && game.is_caught() {
            break;
        }
        print!("Press Enter for the next move (q to quit): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        if line?.trim().eq_ignore_ascii_case("q") {
            break;
        }
        ticks += game.run_ticks(1, driver, observer)?.ticks;
    }

    let summary = RunSummary {
        ticks,
        caught_at: game.stats().caught_at,
        moves: game.stats().moves - start_moves,
    };
    observer.on_run_end(&summary);
    Ok(summary)
}
