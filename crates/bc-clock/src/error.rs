use bc_core::{BallId, CoreError, Tick};
use bc_track::TrackError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("track error: {0}")]
    Track(#[from] TrackError),

    #[error("{ball_count} balls cannot complete a day: at least {required} are needed")]
    TooFewBalls {
        ball_count: u32,
        required:   u32,
    },

    #[error("reservoir ran dry at {tick} with {ball_count} balls loaded")]
    EmptyReservoir {
        tick:       Tick,
        ball_count: u32,
    },

    #[error("ball {ball} is missing at {tick}")]
    BallMissing { tick: Tick, ball: BallId },

    #[error("ball {ball} is held twice at {tick}")]
    BallDuplicated { tick: Tick, ball: BallId },

    #[error("ball {ball} at {tick} is outside 1..={ball_count}")]
    UnknownBall {
        tick:       Tick,
        ball:       BallId,
        ball_count: u32,
    },

    #[error("no cycle for {ball_count} balls within {max_ticks} ticks ({days} days searched)")]
    UnboundedSearch {
        ball_count: u32,
        max_ticks:  u64,
        days:       u64,
    },

    #[error("cycle length for {ball_count} balls does not fit in 64 bits")]
    PeriodOverflow { ball_count: u32 },
}

/// Coarse error class, used by callers to decide how to report a failure.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// Bad input, rejected before simulation started.
    InvalidConfiguration,
    /// The engine broke one of its own invariants.  Fatal.
    InternalConsistency,
    /// The search hit its ceiling without finding a repeat.
    UnboundedSearch,
}

impl ClockError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClockError::Config(_) | ClockError::TooFewBalls { .. } => ErrorKind::InvalidConfiguration,
            ClockError::Track(TrackError::ZeroCapacity { .. }) => ErrorKind::InvalidConfiguration,
            ClockError::UnboundedSearch { .. } | ClockError::PeriodOverflow { .. } => {
                ErrorKind::UnboundedSearch
            }
            ClockError::Track(_)
            | ClockError::EmptyReservoir { .. }
            | ClockError::BallMissing { .. }
            | ClockError::BallDuplicated { .. }
            | ClockError::UnknownBall { .. } => ErrorKind::InternalConsistency,
        }
    }
}

pub type ClockResult<T> = Result<T, ClockError>;
