//! Clock and cycle-search configuration.
//!
//! # Track chain
//!
//! ```text
//! reservoir ──pop──▶ minute (4) ──▶ five-minute (11) ──▶ hour (11) ──▶ reservoir
//! ```
//!
//! A full track that receives another ball dumps its contents back into the
//! reservoir and forwards the new ball to the next track.  A track of
//! capacity `c` therefore passes one ball on every `c + 1` arrivals, which is
//! what all the derived tick counts below are built from.

use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Number of simulated days the default search ceiling allows.
pub const DEFAULT_MAX_DAYS: u64 = 1_000_000;

// ── ClockConfig ───────────────────────────────────────────────────────────────

/// Shape of one ball clock.
///
/// The defaults describe the classic clock: a 4-ball minute track, an
/// 11-ball five-minute track and an 11-ball hour track (plus the hour track's
/// fixed indicator ball, which is not part of the simulation).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockConfig {
    /// Balls loaded into the reservoir, numbered `1..=ball_count`.
    pub ball_count: u32,

    /// Capacity of the minute track.
    pub minute_capacity: u32,

    /// Capacity of the five-minute track.
    pub five_minute_capacity: u32,

    /// Capacity of the hour track.
    pub hour_capacity: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            ball_count:           30,
            minute_capacity:      4,
            five_minute_capacity: 11,
            hour_capacity:        11,
        }
    }
}

impl ClockConfig {
    /// The classic clock loaded with `ball_count` balls.
    pub fn with_balls(ball_count: u32) -> Self {
        Self { ball_count, ..Self::default() }
    }

    /// Reject configurations that cannot describe a clock.
    ///
    /// Called by the clock builder before anything is allocated.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ball_count == 0 {
            return Err(CoreError::InvalidConfiguration(
                "ball count must be at least 1".to_owned(),
            ));
        }
        for (what, capacity) in [
            ("minute", self.minute_capacity),
            ("five-minute", self.five_minute_capacity),
            ("hour", self.hour_capacity),
        ] {
            if capacity == 0 {
                return Err(CoreError::InvalidConfiguration(format!(
                    "{what} track capacity must be at least 1"
                )));
            }
        }
        Ok(())
    }

    /// Ticks between two hour-track overflows (12 hours on the classic clock).
    pub fn ticks_per_half_day(&self) -> u64 {
        (self.minute_capacity as u64 + 1)
            * (self.five_minute_capacity as u64 + 1)
            * (self.hour_capacity as u64 + 1)
    }

    /// Ticks in one whole day: two hour-track overflows.
    pub fn ticks_per_day(&self) -> u64 {
        2 * self.ticks_per_half_day()
    }

    /// Smallest ball count that can complete a day.
    ///
    /// Just before the hour track overflows every track is full and one more
    /// ball must still come out of the reservoir.
    pub fn min_balls_for_day(&self) -> u32 {
        self.minute_capacity + self.five_minute_capacity + self.hour_capacity + 1
    }
}

// ── SearchLimits ──────────────────────────────────────────────────────────────

/// Safety bounds for the cycle search.
///
/// The period always exists but can be very long for some ball counts, so
/// the search gives up after `max_ticks` instead of hanging.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Ticks after which the search fails with an unbounded-search error.
    pub max_ticks: u64,

    /// Check ball conservation at every whole-day boundary.
    pub verify_conservation: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::for_days(&ClockConfig::default(), DEFAULT_MAX_DAYS)
    }
}

impl SearchLimits {
    /// A ceiling of `days` whole days on a clock shaped like `config`.
    pub fn for_days(config: &ClockConfig, days: u64) -> Self {
        Self {
            max_ticks:           days.saturating_mul(config.ticks_per_day()),
            verify_conservation: true,
        }
    }
}

// ── Argument parsing ──────────────────────────────────────────────────────────

/// Parse a count argument (ball count, tick count, day ceiling, …).
///
/// Leading and trailing whitespace is ignored; anything else that is not a
/// plain non-negative integer is a [`CoreError::Parse`].
pub fn parse_count<T: FromStr>(raw: &str, what: &'static str) -> CoreResult<T> {
    raw.trim().parse::<T>().map_err(|_| CoreError::Parse {
        what,
        raw: raw.to_owned(),
    })
}
