//! Structured snapshot of the clock's track contents.
//!
//! The JSON form is a stable output contract: four members in the fixed
//! order `Min`, `FiveMin`, `Hour`, `Main`, compact, each an array of ball
//! ids in chronological order.
//!
//! ```text
//! {"Min":[],"FiveMin":[],"Hour":[],"Main":[1,2,3]}
//! ```

use std::fmt;

use bc_core::BallId;
use serde::{Deserialize, Serialize};

use crate::TrackKind;

/// Ball ids held by each track, oldest arrival first.
///
/// Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "Min")]
    pub minute:      Vec<BallId>,
    #[serde(rename = "FiveMin")]
    pub five_minute: Vec<BallId>,
    #[serde(rename = "Hour")]
    pub hour:        Vec<BallId>,
    #[serde(rename = "Main")]
    pub reservoir:   Vec<BallId>,
}

impl Snapshot {
    pub fn track(&self, kind: TrackKind) -> &[BallId] {
        match kind {
            TrackKind::Minute     => &self.minute,
            TrackKind::FiveMinute => &self.five_minute,
            TrackKind::Hour       => &self.hour,
            TrackKind::Reservoir  => &self.reservoir,
        }
    }

    /// Total balls across all four tracks.
    pub fn ball_count(&self) -> usize {
        TrackKind::ALL.iter().map(|&k| self.track(k).len()).sum()
    }

    /// Compact JSON rendering; same as `to_string()`.
    pub fn to_json(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
