//! Plain data row types written by output backends.

/// Displayed counts and overflow activity for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub ball:         u32,
    pub hours:        u32,
    pub five_minutes: u32,
    pub minutes:      u32,
    pub reservoir:    u32,
    /// Tracks that overflowed this tick (0–3).
    pub overflows:    u32,
}

/// One ball's place in a snapshot, in long format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackContentRow {
    pub tick:     u64,
    pub track:    &'static str,
    /// 0 = oldest arrival.
    pub position: u32,
    pub ball:     u32,
}
