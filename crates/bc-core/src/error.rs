//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors detected before any simulation state is built.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("could not parse {what} from {raw:?}: expected a non-negative integer")]
    Parse {
        what: &'static str,
        raw:  String,
    },
}

/// Shorthand result type for `bc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
