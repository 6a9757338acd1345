//! Error types for tensor construction and access.

use thiserror::Error;

/// Errors surfaced by tensor construction and indexed access.
///
/// All failures are immediate and synchronous; there are no retries and no
/// partial results. Reads beyond a tensor's stored extent are *not* errors:
/// they see the implicit zeros (see [`PaddedND::get`](crate::PaddedND::get)).
///
/// [`Ragged`](TensorError::Ragged) and
/// [`ShapeMismatch`](TensorError::ShapeMismatch) cover malformed construction
/// input; [`RankMismatch`](TensorError::RankMismatch) covers multi-indices and
/// per-axis argument lists whose length does not agree with a tensor's rank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TensorError {
    /// Nested coefficient input is not rectangular: two sibling entries at
    /// the same depth have different shapes.
    #[error("ragged coefficient nesting: sibling entries have shapes {first:?} and {other:?}")]
    Ragged {
        /// Shape of the first sibling entry.
        first: Vec<usize>,
        /// Shape of the first sibling that disagrees with it.
        other: Vec<usize>,
    },

    /// Flat coefficient data does not contain exactly the number of elements
    /// the requested shape calls for.
    #[error("shape {shape:?} requires {expected} coefficients, but got {got}")]
    ShapeMismatch {
        /// The requested shape.
        shape: Vec<usize>,
        /// Element count implied by the shape.
        expected: usize,
        /// Element count actually supplied.
        got: usize,
    },

    /// A multi-index or per-axis argument list does not match the tensor's
    /// rank.
    #[error("rank mismatch: {what} has {got} entries, expected {rank}")]
    RankMismatch {
        /// What was being matched against the rank (e.g. "multi-index").
        what: &'static str,
        /// Number of entries supplied.
        got: usize,
        /// The tensor's rank.
        rank: usize,
    },
}
