//! Driving loops: cycle search, fixed-length replay, and ball-count sweeps.
//!
//! Each loop owns a fresh [`Clock`] and can only stop between ticks.  The
//! cycle search is bounded by [`SearchLimits::max_ticks`]; the replay is
//! bounded by its tick count.

use std::fmt;
use std::ops::RangeInclusive;

use bc_core::{ClockConfig, SearchLimits};
use tracing::{debug, info, warn};

use crate::{
    Clock, ClockError, ClockObserver, ClockResult, CycleDetector, DetectorState, NoopObserver,
    Snapshot,
};

// ── CycleReport ───────────────────────────────────────────────────────────────

/// Outcome of a successful cycle search.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct CycleReport {
    pub ball_count: u32,
    /// Whole days until the reservoir order first repeats.
    pub days:       u64,
    /// Ticks simulated to get there.
    pub ticks:      u64,
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} balls cycle after {} days", self.ball_count, self.days)
    }
}

/// Reject clocks whose reservoir would run dry before the first day ends.
pub(crate) fn ensure_completes_day(config: &ClockConfig) -> ClockResult<()> {
    config.validate()?;
    let required = config.min_balls_for_day();
    if config.ball_count < required {
        return Err(ClockError::TooFewBalls { ball_count: config.ball_count, required });
    }
    Ok(())
}

// ── Cycle search ──────────────────────────────────────────────────────────────

/// Count the days until the ball order returns to its starting order.
pub fn find_cycle(config: &ClockConfig, limits: &SearchLimits) -> ClockResult<CycleReport> {
    find_cycle_observed(config, limits, &mut NoopObserver)
}

/// [`find_cycle`] with observer callbacks on every tick.
pub fn find_cycle_observed<O: ClockObserver>(
    config:   &ClockConfig,
    limits:   &SearchLimits,
    observer: &mut O,
) -> ClockResult<CycleReport> {
    ensure_completes_day(config)?;

    let mut clock = Clock::new(config.clone())?;
    let mut detector = CycleDetector::new(&clock);

    loop {
        if clock.now().0 >= limits.max_ticks {
            warn!(
                balls = config.ball_count,
                max_ticks = limits.max_ticks,
                days = detector.days(),
                "cycle search hit its tick ceiling"
            );
            return Err(ClockError::UnboundedSearch {
                ball_count: config.ball_count,
                max_ticks:  limits.max_ticks,
                days:       detector.days(),
            });
        }

        let outcome = clock.tick()?;
        for &kind in &outcome.overflowed {
            observer.on_overflow(outcome.tick, kind);
        }

        let days_before = detector.days();
        let state = detector.observe(&clock, &outcome);
        if detector.days() != days_before {
            debug!(balls = config.ball_count, day = detector.days(), tick = outcome.tick.0, "day complete");
            if limits.verify_conservation {
                clock.check_conservation()?;
            }
        }
        observer.on_tick_end(&clock, &outcome);

        if let DetectorState::Found { days } = state {
            observer.on_run_end(&clock);
            info!(balls = config.ball_count, days, ticks = clock.now().0, "cycle found");
            return Ok(CycleReport {
                ball_count: config.ball_count,
                days,
                ticks: clock.now().0,
            });
        }
    }
}

// ── Replay ────────────────────────────────────────────────────────────────────

/// Run exactly `ticks` ticks on a fresh clock and return its snapshot.
pub fn replay(config: &ClockConfig, ticks: u64) -> ClockResult<Snapshot> {
    replay_observed(config, ticks, &mut NoopObserver)
}

/// [`replay`] with observer callbacks on every tick.
pub fn replay_observed<O: ClockObserver>(
    config:   &ClockConfig,
    ticks:    u64,
    observer: &mut O,
) -> ClockResult<Snapshot> {
    let mut clock = Clock::new(config.clone())?;
    clock.run_ticks(ticks, observer)?;
    info!(balls = config.ball_count, ticks, time = %clock.face(), "replay finished");
    Ok(clock.snapshot())
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

/// Run the cycle search for every ball count in `balls`, using `base` for the
/// track shape.  Results come back in ball-count order.
pub fn sweep(
    balls:  RangeInclusive<u32>,
    base:   &ClockConfig,
    limits: &SearchLimits,
) -> Vec<(u32, ClockResult<CycleReport>)> {
    let search = |n: u32| {
        let config = ClockConfig { ball_count: n, ..base.clone() };
        (n, find_cycle(&config, limits))
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        balls.into_par_iter().map(search).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        balls.map(search).collect()
    }
}
