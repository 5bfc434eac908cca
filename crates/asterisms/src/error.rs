//! Error type shared by the planar solver and the sky-level helpers.
//!
//! Degenerate geometry (collinear or coincident points) is never an error;
//! only malformed input and empty point sets are.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AsterismError {
    /// Input has the wrong shape: mismatched arity, non-finite coordinate,
    /// out-of-range declination, unprojectable position.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    /// The operation needs at least one point.
    #[error("{op}: empty input")]
    EmptyInput { op: &'static str },
}

impl AsterismError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn empty(op: &'static str) -> Self {
        Self::EmptyInput { op }
    }
}

pub type AsterismResult<T> = Result<T, AsterismError>;
