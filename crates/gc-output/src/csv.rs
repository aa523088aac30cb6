//! CSV trace backend.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputResult, TraceRow};

/// Column names, in order.
pub const TRACE_HEADER: [&str; 7] =
    ["tick", "ghost_x", "ghost_y", "target_x", "target_y", "path_len", "moved"];

/// Writes one CSV row per tick.
pub struct CsvTraceWriter<W: Write = File> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvTraceWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> CsvTraceWriter<W> {
    /// Write to any `Write` sink, starting with the header row.
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(sink);
        rows.write_record(TRACE_HEADER)?;
        Ok(Self { rows, finished: false })
    }

    /// Flush and return the inner sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.rows.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> TraceWriter for CsvTraceWriter<W> {
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()> {
        self.rows.write_record(&[
            row.tick.to_string(),
            row.ghost_x.to_string(),
            row.ghost_y.to_string(),
            row.target_x.to_string(),
            row.target_y.to_string(),
            row.path_len.to_string(),
            (row.moved as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
