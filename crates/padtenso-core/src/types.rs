//! Shared type aliases for tensor dimensions.

use smallvec::SmallVec;

/// Type alias for tensor rank (number of axes).
///
/// A scalar has rank 0, a vector rank 1, a matrix rank 2, and so on.
///
/// # Examples
///
/// ```
/// use padtenso_core::{PaddedND, Rank};
///
/// let t = PaddedND::from_coefficients([[1i64, 2], [3, 4]]).unwrap();
/// let rank: Rank = t.rank();
/// assert_eq!(rank, 2);
/// ```
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Optimized for tensors with up to 6 axes; higher ranks fall back to the
/// heap automatically. Any entry may be 0: a tensor trimmed of all its
/// coefficients keeps its rank but has extent 0 along every axis.
///
/// # Examples
///
/// ```
/// use padtenso_core::{Nested, Shape};
///
/// let literal = Nested::from([[1i64, 2, 3], [4, 5, 6]]);
/// let shape: Shape = literal.shape().unwrap();
/// assert_eq!(&shape[..], &[2, 3]);
/// ```
pub type Shape = SmallVec<[usize; 6]>;
