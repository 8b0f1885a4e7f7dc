//! Fluent builder for constructing a [`Clock`].

use bc_core::{BallId, ClockConfig, Tick};
use bc_track::{Ball, TrackSet};

use crate::{Clock, ClockResult, TrackKind};

/// Fluent builder for [`Clock`].
///
/// # Optional inputs (have defaults)
///
/// | Method                      | Default                  |
/// |-----------------------------|--------------------------|
/// | `.ball_count(n)`            | `config.ball_count`      |
/// | `.hour_indicator(false)`    | indicator ball shown     |
///
/// # Example
///
/// ```rust,ignore
/// let mut clock = ClockBuilder::new(ClockConfig::default())
///     .ball_count(45)
///     .build()?;
/// clock.tick()?;
/// ```
pub struct ClockBuilder {
    config:         ClockConfig,
    hour_indicator: bool,
}

impl ClockBuilder {
    pub fn new(config: ClockConfig) -> Self {
        Self { config, hour_indicator: true }
    }

    /// Override the number of balls loaded into the reservoir.
    pub fn ball_count(mut self, ball_count: u32) -> Self {
        self.config.ball_count = ball_count;
        self
    }

    /// Whether the hour track shows its fixed indicator ball.
    ///
    /// Only the displayed hour count changes; the simulation is identical.
    pub fn hour_indicator(mut self, shown: bool) -> Self {
        self.hour_indicator = shown;
        self
    }

    /// Validate the configuration, wire the track chain, and load the
    /// reservoir with balls `1..=ball_count` in order.
    pub fn build(self) -> ClockResult<Clock> {
        self.config.validate()?;

        let mut tracks = TrackSet::new(TrackKind::Reservoir.label());
        let reservoir = tracks.reservoir();
        let hour = tracks.add_track(
            TrackKind::Hour.label(),
            self.config.hour_capacity as usize,
            reservoir,
            usize::from(self.hour_indicator),
        )?;
        let five_minute = tracks.add_track(
            TrackKind::FiveMinute.label(),
            self.config.five_minute_capacity as usize,
            hour,
            0,
        )?;
        let minute = tracks.add_track(
            TrackKind::Minute.label(),
            self.config.minute_capacity as usize,
            five_minute,
            0,
        )?;

        tracks.fill_reservoir((1..=self.config.ball_count).map(|n| Ball::new(BallId(n))));

        Ok(Clock {
            config: self.config,
            tracks,
            minute,
            five_minute,
            hour,
            now: Tick::ZERO,
        })
    }
}
