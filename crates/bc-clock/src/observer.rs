//! Clock observer trait for progress reporting and data collection.

use bc_core::Tick;

use crate::{Clock, TickOutcome, TrackKind};

/// Callbacks invoked by [`Clock::run_ticks`] and the cycle search at key
/// points in the tick loop.
///
/// This is how overflow events reach the outside world: each run takes
/// exactly one observer, so passing a different observer to the next run
/// replaces the previous one.  All methods have default no-op
/// implementations.
///
/// # Example: half-day printer
///
/// ```rust,ignore
/// struct HalfDays;
///
/// impl ClockObserver for HalfDays {
///     fn on_overflow(&mut self, tick: Tick, track: TrackKind) {
///         if track == TrackKind::Hour {
///             println!("{tick}: twelve hours");
///         }
///     }
/// }
/// ```
pub trait ClockObserver {
    /// Called once per overflow event, in firing order (deepest track first),
    /// after the tick's cascade has fully resolved.
    fn on_overflow(&mut self, _tick: Tick, _track: TrackKind) {}

    /// Called at the end of each tick with read-only access to the clock.
    fn on_tick_end(&mut self, _clock: &Clock, _outcome: &TickOutcome) {}

    /// Called once after the last tick of a run.
    fn on_run_end(&mut self, _clock: &Clock) {}
}

/// A [`ClockObserver`] that does nothing.
pub struct NoopObserver;

impl ClockObserver for NoopObserver {}

impl<O: ClockObserver + ?Sized> ClockObserver for &mut O {
    fn on_overflow(&mut self, tick: Tick, track: TrackKind) {
        (**self).on_overflow(tick, track);
    }

    fn on_tick_end(&mut self, clock: &Clock, outcome: &TickOutcome) {
        (**self).on_tick_end(clock, outcome);
    }

    fn on_run_end(&mut self, clock: &Clock) {
        (**self).on_run_end(clock);
    }
}

/// `None` observes nothing; lets callers switch an observer on at runtime.
impl<O: ClockObserver> ClockObserver for Option<O> {
    fn on_overflow(&mut self, tick: Tick, track: TrackKind) {
        if let Some(inner) = self {
            inner.on_overflow(tick, track);
        }
    }

    fn on_tick_end(&mut self, clock: &Clock, outcome: &TickOutcome) {
        if let Some(inner) = self {
            inner.on_tick_end(clock, outcome);
        }
    }

    fn on_run_end(&mut self, clock: &Clock) {
        if let Some(inner) = self {
            inner.on_run_end(clock);
        }
    }
}

/// Fan out to two observers, left first.
impl<A: ClockObserver, B: ClockObserver> ClockObserver for (A, B) {
    fn on_overflow(&mut self, tick: Tick, track: TrackKind) {
        self.0.on_overflow(tick, track);
        self.1.on_overflow(tick, track);
    }

    fn on_tick_end(&mut self, clock: &Clock, outcome: &TickOutcome) {
        self.0.on_tick_end(clock, outcome);
        self.1.on_tick_end(clock, outcome);
    }

    fn on_run_end(&mut self, clock: &Clock) {
        self.0.on_run_end(clock);
        self.1.on_run_end(clock);
    }
}
