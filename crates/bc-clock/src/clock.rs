//! The `Clock` struct and its tick loop.

use std::fmt;

use bc_core::{BallId, ClockConfig, Tick, TrackId};
use bc_track::{Track, TrackError, TrackSet};

use crate::{ClockBuilder, ClockError, ClockObserver, ClockResult, Snapshot, TrackKind};

// ── TickOutcome ───────────────────────────────────────────────────────────────

/// Result of one [`Clock::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// The tick that just completed (the first tick is `T1`).
    pub tick:       Tick,
    /// Ball dispensed from the reservoir.
    pub ball:       BallId,
    /// Tracks whose overflow event fired, deepest first.
    pub overflowed: Vec<TrackKind>,
}

impl TickOutcome {
    pub fn overflowed(&self, kind: TrackKind) -> bool {
        self.overflowed.contains(&kind)
    }

    /// The hour track overflowed: twelve hours have passed.
    pub fn completed_half_day(&self) -> bool {
        self.overflowed(TrackKind::Hour)
    }
}

// ── ClockFace ─────────────────────────────────────────────────────────────────

/// The time as read off the tracks.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ClockFace {
    pub hours:   usize,
    pub minutes: usize,
}

impl fmt::Display for ClockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// One ball clock: the reservoir plus the minute, five-minute and hour
/// tracks, all owned by a single [`TrackSet`].
///
/// Create via [`ClockBuilder`] or [`Clock::new`].
#[derive(Debug)]
pub struct Clock {
    pub(crate) config:      ClockConfig,
    pub(crate) tracks:      TrackSet,
    pub(crate) minute:      TrackId,
    pub(crate) five_minute: TrackId,
    pub(crate) hour:        TrackId,
    pub(crate) now:         Tick,
}

impl Clock {
    /// Build the classic chain described by `config`.
    pub fn new(config: ClockConfig) -> ClockResult<Self> {
        ClockBuilder::new(config).build()
    }

    // ── Public API ────────────────────────────────────────────────────────

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Ticks completed since the clock was built.
    pub fn now(&self) -> Tick {
        self.now
    }

    pub fn ball_count(&self) -> u32 {
        self.config.ball_count
    }

    /// Advance one minute: pop the next ball and drop it on the minute track.
    ///
    /// The whole cascade is resolved before this returns.  An empty reservoir
    /// means the clock holds too few balls to keep moving; the clock is left
    /// unchanged and the error should end the run.
    pub fn tick(&mut self) -> ClockResult<TickOutcome> {
        let tick = self.now.next();
        let ball = self.tracks.pop_ball().map_err(|e| match e {
            TrackError::EmptyReservoir => ClockError::EmptyReservoir {
                tick,
                ball_count: self.config.ball_count,
            },
            other => ClockError::Track(other),
        })?;
        let id = ball.id();

        let cascade = self.tracks.add_ball(self.minute, ball)?;
        self.now = tick;

        Ok(TickOutcome {
            tick,
            ball: id,
            overflowed: cascade.overflowed().iter().map(|&t| self.kind_of(t)).collect(),
        })
    }

    /// Run exactly `n` ticks, reporting overflows and tick ends to `observer`.
    pub fn run_ticks<O: ClockObserver>(&mut self, n: u64, observer: &mut O) -> ClockResult<()> {
        for _ in 0..n {
            let outcome = self.tick()?;
            for &kind in &outcome.overflowed {
                observer.on_overflow(outcome.tick, kind);
            }
            observer.on_tick_end(self, &outcome);
        }
        observer.on_run_end(self);
        Ok(())
    }

    /// Start over with `ball_count` balls, keeping the track shape.
    pub fn reset(&mut self, ball_count: u32) -> ClockResult<()> {
        let indicator = self.tracks[self.hour].displayed_count() > self.tracks[self.hour].len();
        *self = ClockBuilder::new(self.config.clone())
            .ball_count(ball_count)
            .hour_indicator(indicator)
            .build()?;
        Ok(())
    }

    // ── Reading the clock ─────────────────────────────────────────────────

    pub fn track(&self, kind: TrackKind) -> &Track {
        &self.tracks[self.id_of(kind)]
    }

    /// Chronological contents of every track.
    pub fn snapshot(&self) -> Snapshot {
        let ids = |kind| self.track(kind).ball_ids().collect::<Vec<_>>();
        Snapshot {
            minute:      ids(TrackKind::Minute),
            five_minute: ids(TrackKind::FiveMinute),
            hour:        ids(TrackKind::Hour),
            reservoir:   ids(TrackKind::Reservoir),
        }
    }

    /// Reservoir contents in the order the balls were returned, oldest first.
    pub fn reservoir_ids(&self) -> impl ExactSizeIterator<Item = BallId> + '_ {
        self.track(TrackKind::Reservoir).ball_ids()
    }

    pub fn displayed_minutes(&self) -> usize {
        self.track(TrackKind::Minute).displayed_count()
    }

    pub fn displayed_five_minutes(&self) -> usize {
        self.track(TrackKind::FiveMinute).displayed_count()
    }

    pub fn displayed_hours(&self) -> usize {
        self.track(TrackKind::Hour).displayed_count()
    }

    pub fn face(&self) -> ClockFace {
        ClockFace {
            hours:   self.displayed_hours(),
            minutes: self.displayed_five_minutes() * 5 + self.displayed_minutes(),
        }
    }

    /// Check that every ball `1..=N` is held exactly once.
    pub fn check_conservation(&self) -> ClockResult<()> {
        let n = self.config.ball_count;
        let mut seen = vec![false; n as usize + 1];
        for (_, track) in self.tracks.iter() {
            for ball in track.ball_ids() {
                if ball.0 == 0 || ball.0 > n {
                    return Err(ClockError::UnknownBall { tick: self.now, ball, ball_count: n });
                }
                if std::mem::replace(&mut seen[ball.index()], true) {
                    return Err(ClockError::BallDuplicated { tick: self.now, ball });
                }
            }
        }
        match seen.iter().skip(1).position(|&s| !s) {
            Some(missing) => Err(ClockError::BallMissing {
                tick: self.now,
                ball: BallId(missing as u32 + 1),
            }),
            None => Ok(()),
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn id_of(&self, kind: TrackKind) -> TrackId {
        match kind {
            TrackKind::Minute     => self.minute,
            TrackKind::FiveMinute => self.five_minute,
            TrackKind::Hour       => self.hour,
            TrackKind::Reservoir  => self.tracks.reservoir(),
        }
    }

    fn kind_of(&self, id: TrackId) -> TrackKind {
        if id == self.minute {
            TrackKind::Minute
        } else if id == self.five_minute {
            TrackKind::FiveMinute
        } else if id == self.hour {
            TrackKind::Hour
        } else {
            TrackKind::Reservoir
        }
    }
}
