//! `bc-clock`: the ball clock engine.
//!
//! # Tick
//!
//! ```text
//! tick():
//!   ① pop    : take the longest-waiting ball from the reservoir
//!   ② add    : drop it on the minute track
//!   ③ cascade: full tracks dump back to the reservoir and pass the ball on:
//!               minute (4) → five-minute (11) → hour (11) → reservoir
//!   ④ report : return a TickOutcome listing every track that overflowed
//! ```
//!
//! Two hour-track overflows make a day.  [`CycleDetector`] counts them and
//! compares the reservoir with its starting order; [`find_cycle`] drives the
//! clock until the order repeats.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`sweep`] on Rayon's thread pool.                 |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bc_clock::{find_cycle, replay};
//! use bc_core::{ClockConfig, SearchLimits};
//!
//! let report = find_cycle(&ClockConfig::with_balls(30), &SearchLimits::default())?;
//! println!("{report}"); // 30 balls cycle after 15 days
//!
//! let snapshot = replay(&ClockConfig::with_balls(30), 325)?;
//! println!("{snapshot}");
//! ```

pub mod builder;
pub mod clock;
pub mod cycle;
pub mod error;
pub mod kind;
pub mod observer;
pub mod permutation;
pub mod search;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::ClockBuilder;
pub use clock::{Clock, ClockFace, TickOutcome};
pub use cycle::{CycleDetector, DetectorState};
pub use error::{ClockError, ClockResult, ErrorKind};
pub use kind::TrackKind;
pub use observer::{ClockObserver, NoopObserver};
pub use permutation::{day_permutation, predicted_period};
pub use search::{CycleReport, find_cycle, find_cycle_observed, replay, replay_observed, sweep};
pub use snapshot::Snapshot;
