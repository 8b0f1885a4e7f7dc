//! The four roles a track plays in the clock.

use std::fmt;

/// Position of a track in the clock's chain.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TrackKind {
    Minute,
    FiveMinute,
    Hour,
    Reservoir,
}

impl TrackKind {
    /// Every kind, in snapshot order.
    pub const ALL: [TrackKind; 4] = [
        TrackKind::Minute,
        TrackKind::FiveMinute,
        TrackKind::Hour,
        TrackKind::Reservoir,
    ];

    /// Name used as the snapshot key and the track's name.
    pub fn label(self) -> &'static str {
        match self {
            TrackKind::Minute     => "Min",
            TrackKind::FiveMinute => "FiveMin",
            TrackKind::Hour       => "Hour",
            TrackKind::Reservoir  => "Main",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
