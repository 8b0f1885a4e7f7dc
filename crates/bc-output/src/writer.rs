//! The `SnapshotWriter` trait implemented by all backend writers.

use bc_clock::Snapshot;
use bc_core::Tick;

use crate::{OutputResult, TickSummaryRow};

/// Trait implemented by the JSON-lines and CSV writers.
///
/// Errors are stored by [`SnapshotObserver`](crate::SnapshotObserver) and
/// retrieved with its `take_error`.
pub trait SnapshotWriter {
    /// Write the full track contents at `tick`.
    fn write_snapshot(&mut self, tick: Tick, snapshot: &Snapshot) -> OutputResult<()>;

    /// Write one tick summary row.  Backends without a summary table ignore it.
    fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
        Ok(())
    }

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
