//! A single capacity-bounded track.

use std::collections::VecDeque;

use bc_core::{BallId, TrackId};

use crate::Ball;

/// An ordered holding area for balls.
///
/// Queues are kept in arrival order, oldest at the front.  For ordinary
/// tracks that is the order the balls were laid down; for the reservoir it is
/// the order they were returned, and the front is also the next ball to be
/// dispensed.
///
/// Tracks are created and mutated only through [`TrackSet`](crate::TrackSet),
/// which enforces the capacity and conservation invariants.
#[derive(Debug)]
pub struct Track {
    pub(crate) name:           String,
    /// `None` = unbounded (the reservoir).
    pub(crate) capacity:       Option<usize>,
    pub(crate) queue:          VecDeque<Ball>,
    /// `None` = this track is the reservoir.
    pub(crate) successor:      Option<TrackId>,
    /// Balls shown on the track that never enter the queue.
    pub(crate) display_offset: usize,
}

impl Track {
    pub(crate) fn reservoir(name: impl Into<String>) -> Self {
        Self {
            name:           name.into(),
            capacity:       None,
            queue:          VecDeque::new(),
            successor:      None,
            display_offset: 0,
        }
    }

    pub(crate) fn bounded(
        name:           impl Into<String>,
        capacity:       usize,
        successor:      TrackId,
        display_offset: usize,
    ) -> Self {
        Self {
            name: name.into(),
            capacity: Some(capacity),
            queue: VecDeque::with_capacity(capacity),
            successor: Some(successor),
            display_offset,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum balls held in the queue; `None` for the reservoir.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Track that receives the ball which triggers an overflow.
    pub fn successor(&self) -> Option<TrackId> {
        self.successor
    }

    #[inline]
    pub fn is_reservoir(&self) -> bool {
        self.successor.is_none()
    }

    /// `true` when the next arriving ball triggers an overflow.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.capacity.is_some_and(|cap| self.queue.len() >= cap)
    }

    /// Balls actually held.
    #[inline]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Balls a person reading the clock would count, indicator ball included.
    #[inline]
    pub fn displayed_count(&self) -> usize {
        self.queue.len() + self.display_offset
    }

    /// Held ball ids, oldest arrival first.
    pub fn ball_ids(&self) -> impl ExactSizeIterator<Item = BallId> + '_ {
        self.queue.iter().map(Ball::id)
    }
}
