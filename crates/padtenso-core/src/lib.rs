//! # padtenso-core
//!
//! Finitely-stored tensors over an infinite, zero-padded coefficient space.
//!
//! This crate provides one value type, [`PaddedND`]: a rank-N array of
//! numeric coefficients that behaves as if it extended with zeros beyond its
//! stored extent in every dimension. Arithmetic, shifting and trimming all
//! act on the conceptual infinite array while only the finite support is
//! ever stored:
//!
//! - **Padded reads** ([`PaddedND::get`]) observe the implicit zeros instead
//!   of failing on out-of-range indices
//! - **Shape reconciliation**: addition zero-extends operands to the larger
//!   extent, multiplication truncates to the overlap
//! - **Shifting** ([`PaddedND::shift_left`], [`PaddedND::shift_right`])
//!   moves the stored window against the infinite space
//! - **Trimming** ([`PaddedND::trim`]) recovers the minimal stored support
//!
//! ## Core Principles
//!
//! ### SciRS2 Integration
//!
//! This crate uses `scirs2-core` for array storage and randomness. Direct
//! use of `ndarray` or `rand` is not permitted in this codebase.
//!
//! ### Immutability
//!
//! A tensor is never mutated after construction: every operation returns a
//! new value, so tensors can be shared across threads freely.
//!
//! ### Element classes
//!
//! Each tensor carries a uniform element class ([`DType`]: boolean, integer
//! or float), fixed at construction and promoted under arithmetic the way
//! ordinary numbers promote: integer with integer stays integer, anything
//! with a float becomes float, and division always yields floats.
//!
//! ## Quick Start
//!
//! ```
//! use padtenso_core::{Coeff, PaddedND};
//!
//! let t = PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]]).unwrap();
//! assert_eq!(t.rank(), 2);
//! assert_eq!(t.shape(), &[3, 2]);
//!
//! // Reads beyond the stored extent see the implicit zeros.
//! assert_eq!(t.get(&[999, 238_974]).unwrap(), Coeff::Int(0));
//!
//! // Addition reconciles shapes by zero-extension.
//! let s = PaddedND::from_coefficients([[7i64, 8], [9, 10]]).unwrap();
//! assert_eq!(
//!     &t + &s,
//!     PaddedND::from_coefficients([[8i64, 10], [12, 14], [5, 6]]).unwrap()
//! );
//! ```
//!
//! ## Creating Tensors
//!
//! ```
//! use padtenso_core::{DType, PaddedND};
//!
//! // From a nested literal (any mix of Vecs and arrays).
//! let t = PaddedND::from_coefficients([[1i64, 2], [3, 4]]).unwrap();
//!
//! // From flat row-major data plus a shape.
//! let f = PaddedND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//!
//! // One-hot basis tensor: shape (2, 3), single 1 at (1, 2).
//! let b = PaddedND::basis(&[1, 2]);
//!
//! // Standard-normal samples, float class.
//! let r = PaddedND::random(&[2, 3]);
//! assert_eq!(r.dtype(), DType::Float);
//! # let _ = (t, f, b);
//! ```
//!
//! ## Shifting and Trimming
//!
//! ```
//! use padtenso_core::PaddedND;
//!
//! let t = PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]]).unwrap();
//!
//! // Truncating shift drops leading entries.
//! assert_eq!(
//!     t.shift_left(&[2, 1]).unwrap(),
//!     PaddedND::from_coefficients([[6i64]]).unwrap()
//! );
//!
//! // Zero-padding shift prepends zeros; shifting back restores the input.
//! let padded = t.shift_right(&[1, 2]).unwrap();
//! assert_eq!(padded.shape(), &[4, 4]);
//! assert_eq!(padded.shift_left(&[1, 2]).unwrap(), t);
//!
//! // Trim recovers the minimal stored support.
//! assert_eq!(
//!     PaddedND::from_coefficients([1i64, 0]).unwrap().trim(),
//!     PaddedND::from_coefficients([1i64]).unwrap()
//! );
//! ```
//!
//! ## Arithmetic
//!
//! ```
//! use padtenso_core::{DType, PaddedND};
//!
//! let t = PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]]).unwrap();
//!
//! // Scalar multiplication commutes and keeps the integer class.
//! assert_eq!(2 * &t, &t * 2);
//! assert_eq!((2 * &t).dtype(), DType::Int);
//!
//! // Division always yields the float class.
//! let half = &t / 2;
//! assert_eq!(half.dtype(), DType::Float);
//! assert_eq!(
//!     half,
//!     PaddedND::from_coefficients([[0.5, 1.0], [1.5, 2.0], [2.5, 3.0]]).unwrap()
//! );
//! ```
//!
//! ## Error Handling
//!
//! Construction and access return `Result<_, TensorError>`; out-of-range
//! reads are not errors (they see zeros), only rank mismatches and
//! malformed construction input fail:
//!
//! ```
//! use padtenso_core::{PaddedND, TensorError};
//!
//! // Ragged nesting is rejected.
//! let ragged = PaddedND::from_coefficients(vec![vec![1i64, 2], vec![3]]);
//! assert!(matches!(ragged, Err(TensorError::Ragged { .. })));
//!
//! // A multi-index must match the rank.
//! let t = PaddedND::from_coefficients([[1i64, 2], [3, 4]]).unwrap();
//! assert!(matches!(
//!     t.get(&[0]),
//!     Err(TensorError::RankMismatch { .. })
//! ));
//! ```
//!
//! ## Extending
//!
//! The combination policies ([`zip_padded`], [`zip_overlap`],
//! [`map_scalar`]) are generic over the left operand through the
//! [`PaddedTensor`] trait, so a downstream type layering more semantics
//! over the same padded-coefficient model (a multivariate polynomial
//! representation, for instance) gets correctly-typed results from the
//! shared arithmetic.

pub mod coeff;
pub mod error;
pub mod nested;
pub mod padded;
pub mod types;

#[cfg(test)]
mod property_tests;

pub use coeff::{Coeff, DType, NEAR_ZERO_TOL};
pub use error::TensorError;
pub use nested::Nested;
pub use padded::{map_scalar, zip_overlap, zip_padded, PaddedND, PaddedTensor};
pub use types::{Rank, Shape};
