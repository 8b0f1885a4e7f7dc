//! `TrackSet`: the arena that owns every track of one clock.
//!
//! # Overflow
//!
//! Adding a ball to a full track runs the dump in four steps:
//!
//! 1. the resident balls go back to the reservoir, newest first, so the
//!    ball that sat longest is the last one returned;
//! 2. the track is cleared;
//! 3. the arriving ball moves on to the successor, where the same rule
//!    applies (this is the cascade);
//! 4. the track's overflow event fires.
//!
//! Events are reported in the returned [`Cascade`] rather than through
//! callbacks.  Because step 4 follows step 3, a deeper overflow fires before
//! a shallower one.
//!
//! A successor must already exist when a track is added, so every successor
//! has a smaller index than its predecessor and the cascade always ends in
//! the reservoir.

use bc_core::TrackId;

use crate::{Ball, Track, TrackError, TrackResult};

const RESERVOIR: TrackId = TrackId(0);

// ── Cascade ───────────────────────────────────────────────────────────────────

/// What happened while one ball was added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cascade {
    /// Tracks that overflowed, in the order their events fired.
    overflowed: Vec<TrackId>,
    /// Track the arriving ball finally came to rest in.
    landed:     TrackId,
}

impl Cascade {
    /// Tracks that overflowed, deepest first.
    pub fn overflowed(&self) -> &[TrackId] {
        &self.overflowed
    }

    pub fn did_overflow(&self, track: TrackId) -> bool {
        self.overflowed.contains(&track)
    }

    /// Number of tracks that overflowed.
    pub fn depth(&self) -> usize {
        self.overflowed.len()
    }

    pub fn landed(&self) -> TrackId {
        self.landed
    }
}

// ── TrackSet ──────────────────────────────────────────────────────────────────

/// Owner of all tracks; tracks refer to each other by [`TrackId`].
#[derive(Debug)]
pub struct TrackSet {
    tracks: Vec<Track>,
}

impl TrackSet {
    /// Create an arena holding only an empty reservoir.
    pub fn new(reservoir_name: impl Into<String>) -> Self {
        Self { tracks: vec![Track::reservoir(reservoir_name)] }
    }

    /// The reservoir's id.  Always slot 0.
    #[inline]
    pub fn reservoir(&self) -> TrackId {
        RESERVOIR
    }

    /// Add a bounded track that overflows into `successor`.
    ///
    /// `display_offset` is the number of fixed indicator balls shown on the
    /// track (1 for an hour track, 0 otherwise).
    pub fn add_track(
        &mut self,
        name:           impl Into<String>,
        capacity:       usize,
        successor:      TrackId,
        display_offset: usize,
    ) -> TrackResult<TrackId> {
        let name = name.into();
        if capacity == 0 {
            return Err(TrackError::ZeroCapacity { name });
        }
        self.get(successor)?;
        let id = TrackId::try_from(self.tracks.len())
            .map_err(|_| TrackError::UnknownTrack(TrackId::INVALID))?;
        self.tracks.push(Track::bounded(name, capacity, successor, display_offset));
        Ok(id)
    }

    pub fn get(&self, id: TrackId) -> TrackResult<&Track> {
        self.tracks.get(id.index()).ok_or(TrackError::UnknownTrack(id))
    }

    /// Number of tracks, reservoir included.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All tracks with their ids, reservoir first.
    pub fn iter(&self) -> impl Iterator<Item = (TrackId, &Track)> {
        self.tracks.iter().enumerate().map(|(i, t)| (TrackId(i as u32), t))
    }

    /// Total balls held across every track.
    pub fn ball_count(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }

    /// Return balls straight to the reservoir, in iteration order.
    pub fn fill_reservoir(&mut self, balls: impl IntoIterator<Item = Ball>) {
        self.tracks[RESERVOIR.index()].queue.extend(balls);
    }

    /// Dispense the next ball: the one that has waited longest in the
    /// reservoir.
    pub fn pop_ball(&mut self) -> TrackResult<Ball> {
        self.tracks[RESERVOIR.index()]
            .queue
            .pop_front()
            .ok_or(TrackError::EmptyReservoir)
    }

    /// Add `ball` to `track`, resolving any overflow before returning.
    pub fn add_ball(&mut self, track: TrackId, ball: Ball) -> TrackResult<Cascade> {
        self.get(track)?;

        let mut current = track;
        let mut overflowed = Vec::new();
        loop {
            let target = &mut self.tracks[current.index()];
            let Some(successor) = target.successor else {
                target.queue.push_back(ball);
                break;
            };
            if !target.is_full() {
                target.queue.push_back(ball);
                break;
            }

            let dumped = std::mem::take(&mut target.queue);
            self.tracks[RESERVOIR.index()].queue.extend(dumped.into_iter().rev());
            overflowed.push(current);
            current = successor;
        }

        // Collected along the ball's path; the most nested overflow fires first.
        overflowed.reverse();
        Ok(Cascade { overflowed, landed: current })
    }
}

impl std::ops::Index<TrackId> for TrackSet {
    type Output = Track;

    /// # Panics
    /// Panics if `id` was not handed out by this set; use [`TrackSet::get`]
    /// for ids of unknown origin.
    fn index(&self, id: TrackId) -> &Track {
        &self.tracks[id.index()]
    }
}
