//! `gc-output` — rendering and trace output for the ghost_chase workspace.
//!
//! Everything here sits outside the game core and reads it through
//! [`gc_sim::GameView`] and [`gc_sim::TickReport`].
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`render`]   | `TextRenderer`, `Legend` — console frame and legend text  |
//! | [`console`]  | `ConsoleObserver` — writes a frame per tick to any `Write`|
//! | [`csv`]      | `CsvTraceWriter` — one CSV row per tick                   |
//! | [`observer`] | `TraceObserver` — bridges `GameObserver` to a `TraceWriter` |
//!
//! # Usage
//!
//! ```rust,ignore
//! use gc_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("trace.csv"))?;
//! let mut obs = TraceObserver::new(writer);
//! game.run(&mut driver, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod render;
pub mod row;
pub mod writer;


pub use console::ConsoleObserver;
pub use crate::csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{Fanout, TraceObserver};
pub use render::{Legend, TextRenderer};
pub use row::TraceRow;
pub use writer::TraceWriter;
