//! Indexed access under the implicit zero padding
//!
//! This is the foundational operation of the whole type: every shifting and
//! combining operation is defined in terms of "what does this tensor read at
//! this (possibly out-of-range) index".

use super::types::PaddedND;
use crate::coeff::Coeff;
use crate::error::TensorError;
use crate::types::Shape;

impl PaddedND {
    /// Read the coefficient at a multi-index, honoring the implicit padding.
    ///
    /// Components may be negative: a component in `[-n, 0)` wraps around to
    /// the end of its axis of extent `n`. Any component outside the stored
    /// extent (beyond the end, or below `-n`) makes the whole read observe
    /// the zero of the tensor's element class; out-of-range is never an
    /// error.
    ///
    /// # Errors
    ///
    /// Fails only when the number of components differs from the rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::{Coeff, PaddedND, TensorError};
    ///
    /// let t = PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]]).unwrap();
    ///
    /// assert_eq!(t.get(&[2, 1]).unwrap(), Coeff::Int(6));
    /// assert_eq!(t.get(&[-1, -1]).unwrap(), Coeff::Int(6));
    /// assert_eq!(t.get(&[999, 238_974]).unwrap(), Coeff::Int(0));
    /// assert_eq!(t.get(&[-4, 0]).unwrap(), Coeff::Int(0));
    ///
    /// assert!(matches!(
    ///     t.get(&[0]),
    ///     Err(TensorError::RankMismatch { .. })
    /// ));
    /// ```
    pub fn get(&self, index: &[isize]) -> Result<Coeff, TensorError> {
        if index.len() != self.rank() {
            return Err(TensorError::RankMismatch {
                what: "multi-index",
                got: index.len(),
                rank: self.rank(),
            });
        }
        let mut resolved = Shape::with_capacity(index.len());
        for (d, &i) in index.iter().enumerate() {
            let n = self.shape()[d] as isize;
            let i = if i < 0 { i + n } else { i };
            if i < 0 || i >= n {
                return Ok(Coeff::zero(self.dtype));
            }
            resolved.push(i as usize);
        }
        Ok(self.data[&resolved[..]])
    }

    /// Padded read for non-negative indices; used by the shifting and
    /// combining operations.
    pub(crate) fn coeff_at(&self, index: &[usize]) -> Coeff {
        for (d, &i) in index.iter().enumerate() {
            if i >= self.shape()[d] {
                return Coeff::zero(self.dtype);
            }
        }
        self.data[index]
    }
}
