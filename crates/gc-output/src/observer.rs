//! `TraceObserver<W>` — bridges `GameObserver` to a `TraceWriter`, and
//! `Fanout` for driving two observers from one run.

use gc_core::{Position, Tick};
use gc_sim::{GameObserver, GameView, RunSummary, TickReport};
use tracing::warn;

use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult, TraceRow};

/// A [`GameObserver`] that writes one [`TraceRow`] per tick to any
/// [`TraceWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Rows successfully written so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  `run` does this itself via `on_run_end`; call it
    /// after `run_ticks`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "trace write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> GameObserver for TraceObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport, _view: &GameView<'_>) {
        let result = self.writer.write_row(&TraceRow::from(report));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_run_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

/// Forwards every hook to two observers, `A` first.
pub struct Fanout<A, B>(pub A, pub B);

impl<A: GameObserver, B: GameObserver> GameObserver for Fanout<A, B> {
    fn on_tick_start(&mut self, tick: Tick, view: &GameView<'_>) {
        self.0.on_tick_start(tick, view);
        self.1.on_tick_start(tick, view);
    }

    fn on_tick_end(&mut self, report: &TickReport, view: &GameView<'_>) {
        self.0.on_tick_end(report, view);
        self.1.on_tick_end(report, view);
    }

    fn on_caught(&mut self, tick: Tick, at: Position) {
        self.0.on_caught(tick, at);
        self.1.on_caught(tick, at);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.0.on_run_end(summary);
        self.1.on_run_end(summary);
    }
}
