//! Unit and integration tests for bc-clock.

use bc_core::{BallId, ClockConfig, SearchLimits, Tick};

use crate::{
    Clock, ClockBuilder, ClockError, ClockObserver, CycleDetector, DetectorState, ErrorKind,
    Snapshot, TickOutcome, TrackKind,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn clock(n: u32) -> Clock {
    Clock::new(ClockConfig::with_balls(n)).unwrap()
}

fn ids(raw: &[u32]) -> Vec<BallId> {
    raw.iter().copied().map(BallId).collect()
}

fn run(clock: &mut Clock, ticks: u64) {
    for _ in 0..ticks {
        clock.tick().unwrap();
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn fresh_clock_holds_every_ball_in_reservoir() {
        let c = clock(3);
        assert_eq!(c.track(TrackKind::Reservoir).len(), 3);
        assert_eq!(c.now(), Tick::ZERO);
        assert!(c.check_conservation().is_ok());
    }

    #[test]
    fn fresh_clock_shows_indicator_hour() {
        let c = clock(30);
        assert_eq!(c.displayed_hours(), 1);
        assert_eq!(c.displayed_five_minutes(), 0);
        assert_eq!(c.displayed_minutes(), 0);
        assert_eq!(c.face().to_string(), "1:00");
    }

    #[test]
    fn indicator_can_be_hidden() {
        let c = ClockBuilder::new(ClockConfig::default()).hour_indicator(false).build().unwrap();
        assert_eq!(c.displayed_hours(), 0);
    }

    #[test]
    fn zero_balls_rejected() {
        let err = Clock::new(ClockConfig::with_balls(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn ball_count_override() {
        let c = ClockBuilder::new(ClockConfig::default()).ball_count(45).build().unwrap();
        assert_eq!(c.ball_count(), 45);
        assert_eq!(c.reservoir_ids().len(), 45);
    }

    #[test]
    fn track_capacities_follow_config() {
        let c = clock(30);
        assert_eq!(c.track(TrackKind::Minute).capacity(), Some(4));
        assert_eq!(c.track(TrackKind::FiveMinute).capacity(), Some(11));
        assert_eq!(c.track(TrackKind::Hour).capacity(), Some(11));
        assert_eq!(c.track(TrackKind::Reservoir).capacity(), None);
        assert_eq!(c.track(TrackKind::Hour).name(), "Hour");
    }

    #[test]
    fn reset_reloads_with_new_count() {
        let mut c = clock(30);
        run(&mut c, 100);
        c.reset(45).unwrap();
        assert_eq!(c.now(), Tick::ZERO);
        assert_eq!(c.snapshot().reservoir, (1..=45).map(BallId).collect::<Vec<_>>());
        assert_eq!(c.displayed_hours(), 1);
    }
}

// ── Ticking ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use super::*;

    #[test]
    fn first_tick_moves_ball_one_to_minute_track() {
        let mut c = clock(3);
        let outcome = c.tick().unwrap();
        assert_eq!(outcome.tick, Tick(1));
        assert_eq!(outcome.ball, BallId(1));
        assert!(outcome.overflowed.is_empty());
        let snap = c.snapshot();
        assert_eq!(snap.minute, ids(&[1]));
        assert_eq!(snap.reservoir, ids(&[2, 3]));
    }

    #[test]
    fn fifth_minute_dumps_minute_track() {
        let mut c = clock(30);
        run(&mut c, 4);
        assert_eq!(c.snapshot().minute, ids(&[1, 2, 3, 4]));
        let outcome = c.tick().unwrap();
        assert_eq!(outcome.overflowed, [TrackKind::Minute]);
        let snap = c.snapshot();
        assert!(snap.minute.is_empty());
        assert_eq!(snap.five_minute, ids(&[5]));
        // Returned newest first, behind the balls that never left.
        assert_eq!(&snap.reservoir[snap.reservoir.len() - 4..], ids(&[4, 3, 2, 1]).as_slice());
    }

    #[test]
    fn displayed_counts_after_66_ticks() {
        let mut c = clock(30);
        run(&mut c, 66);
        assert_eq!(c.displayed_hours(), 2);
        assert_eq!(c.displayed_five_minutes(), 1);
        assert_eq!(c.displayed_minutes(), 1);
        assert_eq!(c.face().to_string(), "2:06");
    }

    #[test]
    fn whole_day_empties_every_track() {
        let mut c = clock(30);
        run(&mut c, 1440);
        let snap = c.snapshot();
        assert!(snap.minute.is_empty());
        assert!(snap.five_minute.is_empty());
        assert!(snap.hour.is_empty());
        assert_eq!(snap.reservoir.len(), 30);
        assert_eq!(c.face().to_string(), "1:00");
    }

    #[test]
    fn half_day_overflow_fires_deepest_first() {
        let mut c = clock(30);
        run(&mut c, 719);
        let outcome = c.tick().unwrap();
        assert_eq!(
            outcome.overflowed,
            [TrackKind::Hour, TrackKind::FiveMinute, TrackKind::Minute]
        );
        assert!(outcome.completed_half_day());
    }

    #[test]
    fn empty_reservoir_is_fatal_and_leaves_clock_intact() {
        let mut c = clock(3);
        run(&mut c, 3);
        let before = c.snapshot();
        let err = c.tick().unwrap_err();
        assert!(matches!(err, ClockError::EmptyReservoir { tick: Tick(4), ball_count: 3 }));
        assert_eq!(err.kind(), ErrorKind::InternalConsistency);
        assert_eq!(c.now(), Tick(3));
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn capacity_never_exceeded() {
        let mut c = clock(40);
        for _ in 0..3_000 {
            c.tick().unwrap();
            for kind in [TrackKind::Minute, TrackKind::FiveMinute, TrackKind::Hour] {
                let track = c.track(kind);
                assert!(track.len() <= track.capacity().unwrap(), "{kind} over capacity");
            }
        }
    }

    #[test]
    fn conservation_holds_for_random_runs() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            let n = rng.gen_range(27..=127);
            let ticks = rng.gen_range(0..5_000);
            let mut c = clock(n);
            run(&mut c, ticks);
            c.check_conservation().unwrap();
            assert_eq!(c.snapshot().ball_count(), n as usize);
        }
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot_tests {
    use super::*;

    #[test]
    fn fresh_snapshot_json() {
        assert_eq!(
            clock(3).snapshot().to_json(),
            r#"{"Min":[],"FiveMin":[],"Hour":[],"Main":[1,2,3]}"#
        );
    }

    #[test]
    fn json_reads_back() {
        let mut c = clock(30);
        run(&mut c, 325);
        let snap = c.snapshot();
        let back: Snapshot = serde_json::from_str(&snap.to_json()).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn json_member_order_is_fixed() {
        let mut c = clock(30);
        run(&mut c, 66);
        let json = c.snapshot().to_string();
        let positions: Vec<usize> = ["\"Min\"", "\"FiveMin\"", "\"Hour\"", "\"Main\""]
            .iter()
            .map(|k| json.find(k).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
        assert!(!json.contains(' '));
    }

    #[test]
    fn replay_round_trip() {
        let cfg = ClockConfig::with_balls(30);
        let a = crate::replay(&cfg, 325).unwrap();
        let b = crate::replay(&cfg, 325).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.ball_count(), 30);
    }

    #[test]
    fn replay_zero_ticks_is_fresh_clock() {
        let snap = crate::replay(&ClockConfig::with_balls(3), 0).unwrap();
        assert_eq!(snap, clock(3).snapshot());
    }
}

// ── Cycle detector ────────────────────────────────────────────────────────────

#[cfg(test)]
mod detector_tests {
    use super::*;

    #[test]
    fn counts_two_overflows_per_day() {
        let mut d = CycleDetector::from_order(ids(&[1, 2, 3]));
        assert_eq!(d.on_hour_overflow(ids(&[3, 2, 1])), DetectorState::Running);
        assert!(d.is_half_day());
        assert_eq!(d.days(), 0);
        assert_eq!(d.on_hour_overflow(ids(&[3, 2, 1])), DetectorState::Running);
        assert!(!d.is_half_day());
        assert_eq!(d.days(), 1);
    }

    #[test]
    fn finds_repeat_on_whole_day() {
        let mut d = CycleDetector::from_order(ids(&[1, 2, 3]));
        d.on_hour_overflow(ids(&[2, 3, 1]));
        d.on_hour_overflow(ids(&[2, 3, 1]));
        d.on_hour_overflow(ids(&[1, 2, 3]));
        assert_eq!(d.state(), DetectorState::Running, "half-day match must not count");
        assert_eq!(d.on_hour_overflow(ids(&[1, 2, 3])), DetectorState::Found { days: 2 });
        assert!(d.is_found());
    }

    #[test]
    fn found_is_terminal() {
        let mut d = CycleDetector::from_order(ids(&[1]));
        d.on_hour_overflow(ids(&[1]));
        d.on_hour_overflow(ids(&[1]));
        assert_eq!(d.state(), DetectorState::Found { days: 1 });
        d.on_hour_overflow(ids(&[1]));
        d.on_hour_overflow(ids(&[1]));
        assert_eq!(d.state(), DetectorState::Found { days: 1 });
        assert_eq!(d.days(), 1);
    }

    #[test]
    fn half_day_does_not_read_reservoir() {
        let mut d = CycleDetector::from_order(ids(&[1, 2]));
        let untouched = std::iter::from_fn(|| -> Option<BallId> { panic!("reservoir read") });
        assert_eq!(d.on_hour_overflow(untouched), DetectorState::Running);
    }

    #[test]
    fn prefix_order_is_not_a_match() {
        let mut d = CycleDetector::from_order(ids(&[1, 2, 3]));
        d.on_hour_overflow(ids(&[1, 2]));
        assert_eq!(d.on_hour_overflow(ids(&[1, 2])), DetectorState::Running);
    }

    #[test]
    fn observes_clock_days() {
        let mut c = clock(30);
        let mut d = CycleDetector::new(&c);
        for _ in 0..1440 * 3 {
            let outcome = c.tick().unwrap();
            d.observe(&c, &outcome);
        }
        assert_eq!(d.days(), 3);
        assert!(!d.is_half_day());
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct EventCounter {
        minute:   usize,
        five:     usize,
        hour:     usize,
        ends:     usize,
        finished: bool,
    }

    impl ClockObserver for EventCounter {
        fn on_overflow(&mut self, _tick: Tick, track: TrackKind) {
            match track {
                TrackKind::Minute     => self.minute += 1,
                TrackKind::FiveMinute => self.five += 1,
                TrackKind::Hour       => self.hour += 1,
                TrackKind::Reservoir  => panic!("reservoir never overflows"),
            }
        }
        fn on_tick_end(&mut self, _clock: &Clock, _outcome: &TickOutcome) {
            self.ends += 1;
        }
        fn on_run_end(&mut self, _clock: &Clock) {
            self.finished = true;
        }
    }

    #[test]
    fn one_day_of_events() {
        let mut c = clock(30);
        let mut counter = EventCounter::default();
        c.run_ticks(1440, &mut counter).unwrap();
        assert_eq!(counter.minute, 288);
        assert_eq!(counter.five, 24);
        assert_eq!(counter.hour, 2);
        assert_eq!(counter.ends, 1440);
        assert!(counter.finished);
        assert_eq!(c.now(), Tick(1440));
    }

    #[test]
    fn pair_fans_out_to_both() {
        let mut c = clock(30);
        let mut pair = (EventCounter::default(), CycleDetector::new(&c));
        c.run_ticks(1440, &mut pair).unwrap();
        assert_eq!(pair.0.hour, 2);
        assert_eq!(pair.1.days(), 1);
    }

    #[test]
    fn search_reports_to_observer() {
        let mut counter = EventCounter::default();
        let report = crate::find_cycle_observed(
            &ClockConfig::with_balls(30),
            &SearchLimits::default(),
            &mut counter,
        )
        .unwrap();
        assert_eq!(counter.hour as u64, report.days * 2);
        assert_eq!(counter.ends as u64, report.ticks);
        assert!(counter.finished);
    }
}

// ── Cycle search ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod search_tests {
    use super::*;
    use crate::{find_cycle, predicted_period, sweep};

    #[test]
    fn thirty_balls_cycle_after_fifteen_days() {
        let report = find_cycle(&ClockConfig::with_balls(30), &SearchLimits::default()).unwrap();
        assert_eq!(report.days, 15);
        assert_eq!(report.ticks, 15 * 1440);
        assert_eq!(report.to_string(), "30 balls cycle after 15 days");
    }

    #[test]
    fn forty_five_balls_cycle_after_378_days() {
        let report = find_cycle(&ClockConfig::with_balls(45), &SearchLimits::default()).unwrap();
        assert_eq!(report.days, 378);
    }

    #[test]
    fn search_is_deterministic() {
        let cfg = ClockConfig::with_balls(33);
        let limits = SearchLimits::default();
        assert_eq!(find_cycle(&cfg, &limits).unwrap(), find_cycle(&cfg, &limits).unwrap());
    }

    #[test]
    fn ceiling_surfaces_as_error() {
        let cfg = ClockConfig::with_balls(30);
        let err = find_cycle(&cfg, &SearchLimits::for_days(&cfg, 14)).unwrap_err();
        assert!(matches!(err, ClockError::UnboundedSearch { ball_count: 30, days: 14, .. }));
        assert_eq!(err.kind(), ErrorKind::UnboundedSearch);

        assert!(find_cycle(&cfg, &SearchLimits::for_days(&cfg, 15)).is_ok());
    }

    #[test]
    fn too_few_balls_rejected_up_front() {
        let err = find_cycle(&ClockConfig::with_balls(26), &SearchLimits::default()).unwrap_err();
        assert!(matches!(err, ClockError::TooFewBalls { ball_count: 26, required: 27 }));
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn minimum_ball_count_completes_a_day() {
        assert!(crate::day_permutation(&ClockConfig::with_balls(27)).is_ok());
    }

    #[test]
    fn permutation_agrees_with_simulation() {
        let limits = SearchLimits::default();
        let mut compared = 0;
        for n in 27..=60 {
            let cfg = ClockConfig::with_balls(n);
            let predicted = predicted_period(&cfg).unwrap();
            if predicted.days > 500 {
                continue;
            }
            let found = find_cycle(&cfg, &limits).unwrap();
            assert_eq!(found, predicted, "{n} balls");
            compared += 1;
        }
        assert!(compared >= 2, "only {compared} ball counts compared");
    }

    #[test]
    fn predicted_period_matches_known_values() {
        assert_eq!(predicted_period(&ClockConfig::with_balls(30)).unwrap().days, 15);
        assert_eq!(predicted_period(&ClockConfig::with_balls(45)).unwrap().days, 378);
    }

    #[test]
    fn sweep_keeps_ball_count_order() {
        let base = ClockConfig::default();
        let results = sweep(26..=30, &base, &SearchLimits::for_days(&base, 20));
        let counts: Vec<u32> = results.iter().map(|(n, _)| *n).collect();
        assert_eq!(counts, [26, 27, 28, 29, 30]);
        assert!(matches!(results[0].1, Err(ClockError::TooFewBalls { .. })));
        assert_eq!(results[4].1.as_ref().unwrap().days, 15);
    }
}
