//! `ConsoleObserver<W>` — draws a frame after every tick.

use std::io::Write;

use gc_core::{Position, Tick};
use gc_sim::{GameObserver, GameView, RunSummary, TickReport};

use crate::{OutputError, TextRenderer};

/// ANSI "clear screen, cursor home".
const CLEAR: &str = "\x1b[2J\x1b[H";

/// A [`GameObserver`] that writes a rendered frame and the legend to `out`
/// after every tick, plus a line on capture and a summary at run end.
///
/// Write errors are stored internally because observer hooks have no return
/// value.  Check with [`take_error`][Self::take_error] after the run.
pub struct ConsoleObserver<W: Write> {
    out:          W,
    renderer:     TextRenderer,
    clear_screen: bool,
    last_error:   Option<OutputError>,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, renderer: TextRenderer) -> Self {
        Self { out, renderer, clear_screen: false, last_error: None }
    }

    /// Clear the terminal before each frame.
    pub fn clear_screen(mut self, yes: bool) -> Self {
        self.clear_screen = yes;
        self
    }

    /// Draw the current state without ticking; used for the opening frame.
    pub fn show(&mut self, view: &GameView<'_>) {
        let result = self.write_frame(view);
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, view: &GameView<'_>) -> std::io::Result<()> {
        if self.clear_screen {
            self.out.write_all(CLEAR.as_bytes())?;
        }
        self.out.write_all(self.renderer.render_frame(view).as_bytes())?;
        self.out.write_all(self.renderer.legend().as_bytes())?;
        self.out.flush()
    }

    fn store_err(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e.into());
            }
        }
    }
}

impl<W: Write> GameObserver for ConsoleObserver<W> {
    fn on_tick_end(&mut self, _report: &TickReport, view: &GameView<'_>) {
        let result = self.write_frame(view);
        self.store_err(result);
    }

    fn on_caught(&mut self, tick: Tick, at: Position) {
        let result = writeln!(self.out, "Ghost caught Pac-Man at {at} on tick {}.", tick.0);
        self.store_err(result);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        let result = match summary.caught_at {
            Some(t) => writeln!(
                self.out,
                "Run ended after {} ticks ({} moves); caught on tick {}.",
                summary.ticks, summary.moves, t.0
            ),
            None => writeln!(
                self.out,
                "Run ended after {} ticks ({} moves); target not caught.",
                summary.ticks, summary.moves
            ),
        };
        self.store_err(result);
    }
}
