//! Period prediction from a single simulated day.
//!
//! At every whole-day boundary all three tracks are empty and the reservoir
//! holds every ball, so a day acts on the reservoir as a fixed permutation of
//! positions.  The cycle length is the order of that permutation: the least
//! common multiple of its cycle lengths.
//!
//! This gives the answer after one day of simulation instead of the full
//! period, and it is an independent check on [`find_cycle`](crate::find_cycle):
//! if the two ever disagree, the day map has a pre-period and the first
//! repeat is not the initial ordering.

use bc_core::ClockConfig;

use crate::search::ensure_completes_day;
use crate::{Clock, ClockError, ClockResult, CycleDetector, CycleReport};

/// Simulate one day and return where each reservoir position's ball came
/// from: after one day, position `i` holds the ball that started at
/// position `perm[i]`.
pub fn day_permutation(config: &ClockConfig) -> ClockResult<Vec<usize>> {
    ensure_completes_day(config)?;

    let mut clock = Clock::new(config.clone())?;
    let mut detector = CycleDetector::new(&clock);
    for _ in 0..config.ticks_per_day() {
        let outcome = clock.tick()?;
        detector.observe(&clock, &outcome);
    }
    clock.check_conservation()?;
    debug_assert_eq!(detector.days(), 1);

    // The clock is loaded 1..=N in order, so ball k started at position k-1.
    Ok(clock.reservoir_ids().map(|id| id.index() - 1).collect())
}

/// Cycle length computed from the day permutation's cycle structure.
pub fn predicted_period(config: &ClockConfig) -> ClockResult<CycleReport> {
    let perm = day_permutation(config)?;
    let overflow = || ClockError::PeriodOverflow { ball_count: config.ball_count };

    let mut visited = vec![false; perm.len()];
    let mut days: u64 = 1;
    for start in 0..perm.len() {
        if visited[start] {
            continue;
        }
        let mut len: u64 = 0;
        let mut pos = start;
        while !visited[pos] {
            visited[pos] = true;
            pos = perm[pos];
            len += 1;
        }
        days = lcm(days, len).ok_or_else(overflow)?;
    }

    let ticks = days.checked_mul(config.ticks_per_day()).ok_or_else(overflow)?;
    Ok(CycleReport { ball_count: config.ball_count, days, ticks })
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}
