//! The ball itself.

use bc_core::BallId;

/// One numbered ball.
///
/// Deliberately not `Clone`: two `Ball`s never share an identity within a
/// run.  Orderings are compared through [`Ball::id`].
#[derive(Debug)]
pub struct Ball {
    id: BallId,
}

impl Ball {
    pub fn new(id: BallId) -> Self {
        Self { id }
    }

    #[inline]
    pub fn id(&self) -> BallId {
        self.id
    }
}
