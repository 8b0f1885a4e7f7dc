//! `bc-output`: snapshot writers for the ball clock simulator.
//!
//! | Backend           | Output                                                 |
//! |-------------------|--------------------------------------------------------|
//! | `JsonLinesWriter` | one compact snapshot per line, to any `io::Write`      |
//! | `CsvWriter`       | `tick_summaries.csv`, `track_contents.csv`             |
//!
//! Both implement [`SnapshotWriter`] and are driven by [`SnapshotObserver`],
//! which implements `bc_clock::ClockObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bc_output::{JsonLinesWriter, SnapshotObserver};
//!
//! let writer = JsonLinesWriter::new(std::io::stdout().lock());
//! let mut obs = SnapshotObserver::new(writer, 1);
//! clock.run_ticks(325, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use json::JsonLinesWriter;
pub use observer::SnapshotObserver;
pub use row::{TickSummaryRow, TrackContentRow};
pub use writer::SnapshotWriter;
