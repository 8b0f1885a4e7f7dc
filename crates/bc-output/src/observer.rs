//! `SnapshotObserver<W>`: bridges `ClockObserver` to a `SnapshotWriter`.

use bc_clock::{Clock, ClockObserver, TickOutcome, TrackKind};

use crate::OutputError;
use crate::row::TickSummaryRow;
use crate::writer::SnapshotWriter;

/// A [`ClockObserver`] that writes tick summaries and snapshots to any
/// [`SnapshotWriter`] backend.
///
/// Errors from the writer are stored internally because `ClockObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SnapshotObserver<W: SnapshotWriter> {
    writer:     W,
    /// Write a snapshot every N ticks; 0 disables snapshots.
    interval:   u64,
    last_error: Option<OutputError>,
}

impl<W: SnapshotWriter> SnapshotObserver<W> {
    /// `interval = 1` writes a snapshot after every tick.
    pub fn new(writer: W, interval: u64) -> Self {
        Self { writer, interval, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: SnapshotWriter> ClockObserver for SnapshotObserver<W> {
    fn on_tick_end(&mut self, clock: &Clock, outcome: &TickOutcome) {
        let row = TickSummaryRow {
            tick:         outcome.tick.0,
            ball:         outcome.ball.0,
            hours:        clock.displayed_hours() as u32,
            five_minutes: clock.displayed_five_minutes() as u32,
            minutes:      clock.displayed_minutes() as u32,
            reservoir:    clock.track(TrackKind::Reservoir).len() as u32,
            overflows:    outcome.overflowed.len() as u32,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);

        if self.interval > 0 && outcome.tick.0 % self.interval == 0 {
            let result = self.writer.write_snapshot(outcome.tick, &clock.snapshot());
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _clock: &Clock) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
