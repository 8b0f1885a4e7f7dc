//! JSON-lines backend: one compact snapshot per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bc_clock::Snapshot;
use bc_core::Tick;

use crate::OutputResult;
use crate::writer::SnapshotWriter;

/// Writes each snapshot as a single line of compact JSON.
pub struct JsonLinesWriter<W: Write> {
    out:      W,
    lines:    u64,
    finished: bool,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0, finished: false }
    }

    /// Snapshots written so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl JsonLinesWriter<BufWriter<File>> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> SnapshotWriter for JsonLinesWriter<W> {
    fn write_snapshot(&mut self, _tick: Tick, snapshot: &Snapshot) -> OutputResult<()> {
        serde_json::to_writer(&mut self.out, snapshot)?;
        self.out.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
