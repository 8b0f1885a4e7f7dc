//! `bc-track`: balls, tracks, and the overflow cascade.
//!
//! # Layout
//!
//! All tracks of one clock live in a single [`TrackSet`] arena and refer to
//! each other by [`TrackId`](bc_core::TrackId).  Slot 0 is always the
//! reservoir: unbounded, no successor, and the sink every other track dumps
//! into when it overflows.
//!
//! ```text
//!            ┌──────────── dump (newest first) ────────────┐
//!            ▼                                             │
//! reservoir ──pop──▶ track A ──forward──▶ track B ──forward──▶ …
//! ```
//!
//! [`Ball`] is neither `Clone` nor `Copy`: the only way to get a ball into a
//! track is to move it out of another one, so the arena cannot duplicate or
//! lose balls.

pub mod ball;
pub mod error;
pub mod set;
pub mod track;


pub use ball::Ball;
pub use error::{TrackError, TrackResult};
pub use set::{Cascade, TrackSet};
pub use track::Track;
