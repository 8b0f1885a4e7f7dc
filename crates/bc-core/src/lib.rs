//! `bc-core`: foundational types for the ball clock simulator.
//!
//! This crate is a dependency of every other `bc-*` crate.  It intentionally
//! has no `bc-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `BallId`, `TrackId`                                    |
//! | [`time`]     | `Tick`                                                 |
//! | [`config`]   | `ClockConfig`, `SearchLimits`, `parse_count`           |
//! | [`error`]    | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ClockConfig, SearchLimits, parse_count};
pub use error::{CoreError, CoreResult};
pub use ids::{BallId, TrackId};
pub use time::Tick;
