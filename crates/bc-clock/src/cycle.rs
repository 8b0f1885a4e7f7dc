//! Day counting and cycle detection.
//!
//! ```text
//!            hour overflow            hour overflow
//! Running ──────────────────▶ (half day) ──────────────▶ day += 1
//!    ▲                                                      │
//!    └───────────── reservoir ≠ initial order ◀─────────────┤
//!                                                           │ reservoir = initial order
//!                                                           ▼
//!                                                   Found { days }
//! ```
//!
//! The detector is a plain state machine: it is fed hour-overflow events and
//! reservoir orderings and never touches the clock itself, so it can be
//! driven by hand in tests.

use bc_core::BallId;

use crate::{Clock, ClockObserver, TickOutcome};

/// Where the search stands.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DetectorState {
    Running,
    /// Terminal: the reservoir matched its starting order after `days` days.
    Found { days: u64 },
}

/// Counts whole days from hour-track overflows and spots the first day on
/// which the reservoir order repeats.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    initial:  Vec<BallId>,
    days:     u64,
    half_day: bool,
    state:    DetectorState,
}

impl CycleDetector {
    /// Capture `clock`'s reservoir order as the order to look for.
    pub fn new(clock: &Clock) -> Self {
        Self::from_order(clock.reservoir_ids().collect())
    }

    pub fn from_order(initial: Vec<BallId>) -> Self {
        Self {
            initial,
            days:     0,
            half_day: false,
            state:    DetectorState::Running,
        }
    }

    pub fn state(&self) -> DetectorState {
        self.state
    }

    pub fn is_found(&self) -> bool {
        matches!(self.state, DetectorState::Found { .. })
    }

    /// Whole days counted so far.
    pub fn days(&self) -> u64 {
        self.days
    }

    /// `true` between the first and second hour overflow of a day.
    pub fn is_half_day(&self) -> bool {
        self.half_day
    }

    /// Feed one hour-track overflow.
    ///
    /// `reservoir` is only read when the event completes a whole day.  Once
    /// `Found`, further events are ignored.
    pub fn on_hour_overflow<I>(&mut self, reservoir: I) -> DetectorState
    where
        I: IntoIterator<Item = BallId>,
    {
        if self.is_found() {
            return self.state;
        }
        self.half_day = !self.half_day;
        if self.half_day {
            return self.state;
        }

        self.days += 1;
        if reservoir.into_iter().eq(self.initial.iter().copied()) {
            self.state = DetectorState::Found { days: self.days };
        }
        self.state
    }

    /// Feed a completed tick; only hour overflows matter.
    pub fn observe(&mut self, clock: &Clock, outcome: &TickOutcome) -> DetectorState {
        if outcome.completed_half_day() {
            self.on_hour_overflow(clock.reservoir_ids())
        } else {
            self.state
        }
    }
}

impl ClockObserver for CycleDetector {
    fn on_tick_end(&mut self, clock: &Clock, outcome: &TickOutcome) {
        self.observe(clock, outcome);
    }
}
