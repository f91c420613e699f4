//! Error type shared by the tangle codec, composition, and factorization.

use thiserror::Error;

use crate::edge::Edge;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures raised by the core.
///
/// A merge that does not apply is not an error; see [`crate::merge::merge_replacement`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed text token (wrong arity, not an integer, zero label).
    #[error("cannot parse `{token}`: {reason}")]
    Parse { token: String, reason: String },
    /// Edge list is not a perfect matching on `1..=N` and `-1..=-N`.
    #[error("invalid diagram: {0}")]
    InvalidDiagram(String),
    /// Two diagrams of different order were composed.
    #[error("size mismatch: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },
    /// Generator index outside `1..N`.
    #[error("generator index {index} out of range for N={n}")]
    GeneratorOutOfRange { index: usize, n: usize },
    /// Incremental crossing cache differs from a from-scratch recomputation.
    #[error("stale crossing count on {edge}: cached {cached}, actual {actual}")]
    StaleCrossings {
        edge: Edge,
        cached: usize,
        actual: usize,
    },
    /// Internal invariant of the projection or orchestrator violated.
    #[error("inconsistent state: {0}")]
    Inconsistent(String),
    /// No candidate edge yields a length-reducing merge with the hook at `index`.
    #[error("no length-reducing merge for U{index} in {diagram}")]
    NoMergeCandidate { diagram: String, index: usize },
}

impl Error {
    pub(crate) fn parse(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Parse {
            token: token.into(),
            reason: reason.into(),
        }
    }
}
