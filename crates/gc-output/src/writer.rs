//! The `TraceWriter` trait implemented by trace backends.

use crate::{OutputResult, TraceRow};

/// Trait implemented by trace backends (CSV today).
///
/// Errors are stored by [`TraceObserver`][crate::TraceObserver] and retrieved
/// with `take_error`, since observer hooks return nothing.
pub trait TraceWriter {
    /// Write one tick row.
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
