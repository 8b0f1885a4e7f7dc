//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`: displayed counts per tick
//! - `track_contents.csv`: every ball's track and position per snapshot

use std::fs::File;
use std::path::Path;

use bc_clock::{Snapshot, TrackKind};
use bc_core::Tick;
use csv::Writer;

use crate::writer::SnapshotWriter;
use crate::{OutputResult, TickSummaryRow, TrackContentRow};

/// Writes clock output to two CSV files.
pub struct CsvWriter {
    contents:  Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut contents = Writer::from_path(dir.join("track_contents.csv"))?;
        contents.write_record(["tick", "track", "position", "ball"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "ball", "hours", "five_minutes", "minutes", "reservoir", "overflows",
        ])?;

        Ok(Self {
            contents,
            summaries,
            finished: false,
        })
    }

    fn write_content(&mut self, row: &TrackContentRow) -> OutputResult<()> {
        self.contents.write_record(&[
            row.tick.to_string(),
            row.track.to_owned(),
            row.position.to_string(),
            row.ball.to_string(),
        ])?;
        Ok(())
    }
}

impl SnapshotWriter for CsvWriter {
    fn write_snapshot(&mut self, tick: Tick, snapshot: &Snapshot) -> OutputResult<()> {
        for kind in TrackKind::ALL {
            for (position, ball) in snapshot.track(kind).iter().enumerate() {
                self.write_content(&TrackContentRow {
                    tick:     tick.0,
                    track:    kind.label(),
                    position: position as u32,
                    ball:     ball.0,
                })?;
            }
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.ball.to_string(),
            row.hours.to_string(),
            row.five_minutes.to_string(),
            row.minutes.to_string(),
            row.reservoir.to_string(),
            row.overflows.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.contents.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
