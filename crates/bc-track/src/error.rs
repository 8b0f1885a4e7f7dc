//! Error types for bc-track.

use bc_core::TrackId;
use thiserror::Error;

/// Errors raised while wiring or driving a [`TrackSet`](crate::TrackSet).
#[derive(Debug, Error)]
pub enum TrackError {
    /// The reservoir was popped with no balls left.  With correct wiring and
    /// enough balls this never happens, so callers treat it as fatal.
    #[error("reservoir is empty")]
    EmptyReservoir,

    #[error("track {0} does not exist")]
    UnknownTrack(TrackId),

    #[error("track {name:?} needs a capacity of at least 1")]
    ZeroCapacity { name: String },
}

/// Alias for `Result<T, TrackError>`.
pub type TrackResult<T> = Result<T, TrackError>;
