//! Shifting, trimming and rounding
//!
//! Shifts move the stored window against the infinite coefficient space:
//! a left shift drops leading entries, a right shift prepends zeros of the
//! tensor's own element class. Trimming recovers the minimal stored window,
//! and rounding composes coefficient rounding with a trim.

use super::functions::unravel_index;
use super::types::PaddedND;
use crate::coeff::{Coeff, DType};
use crate::error::TensorError;
use crate::types::Shape;
use scirs2_core::ndarray_ext::{Array, IxDyn};
use smallvec::smallvec;

impl PaddedND {
    /// Truncating shift: drop the first `offsets[d]` entries along axis `d`.
    ///
    /// The result reads at `idx` what the original read at `idx + offsets`,
    /// so its extent along axis `d` is `max(0, shape[d] - offsets[d])`.
    /// Data before the shift point is lost; shifting left past the stored
    /// extent yields an empty tensor.
    ///
    /// # Errors
    ///
    /// Fails when the number of offsets differs from the rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::PaddedND;
    ///
    /// let t = PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]]).unwrap();
    /// let shifted = t.shift_left(&[2, 1]).unwrap();
    /// assert_eq!(shifted, PaddedND::from_coefficients([[6i64]]).unwrap());
    /// ```
    pub fn shift_left(&self, offsets: &[usize]) -> Result<Self, TensorError> {
        if offsets.len() != self.rank() {
            return Err(TensorError::RankMismatch {
                what: "offset list",
                got: offsets.len(),
                rank: self.rank(),
            });
        }
        let shape: Shape = self
            .shape()
            .iter()
            .zip(offsets)
            .map(|(&n, &o)| n.saturating_sub(o))
            .collect();
        let total: usize = shape.iter().product();
        let mut data = Vec::with_capacity(total);
        let mut idx = Shape::new();
        for flat in 0..total {
            unravel_index(flat, &shape, &mut idx);
            for (d, &o) in offsets.iter().enumerate() {
                idx[d] += o;
            }
            data.push(self.data[&idx[..]]);
        }
        Ok(Self {
            data: Array::from_shape_vec(IxDyn(&shape), data)
                .expect("element count matches the truncated shape"),
            dtype: self.dtype,
        })
    }

    /// Zero-padding shift: prepend `offsets[d]` zeros along axis `d`.
    ///
    /// The padding zeros have the tensor's own element class, so an integer
    /// tensor stays integer. The result's extent along axis `d` is
    /// `shape[d] + offsets[d]`, and `shift_left` with the same offsets
    /// restores the original exactly.
    ///
    /// # Errors
    ///
    /// Fails when the number of offsets differs from the rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::PaddedND;
    ///
    /// let t = PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]]).unwrap();
    /// let padded = t.shift_right(&[1, 2]).unwrap();
    /// assert_eq!(
    ///     padded,
    ///     PaddedND::from_coefficients([
    ///         [0i64, 0, 0, 0],
    ///         [0, 0, 1, 2],
    ///         [0, 0, 3, 4],
    ///         [0, 0, 5, 6],
    ///     ])
    ///     .unwrap()
    /// );
    /// assert_eq!(padded.shift_left(&[1, 2]).unwrap(), t);
    /// ```
    pub fn shift_right(&self, offsets: &[usize]) -> Result<Self, TensorError> {
        if offsets.len() != self.rank() {
            return Err(TensorError::RankMismatch {
                what: "offset list",
                got: offsets.len(),
                rank: self.rank(),
            });
        }
        let shape: Shape = self
            .shape()
            .iter()
            .zip(offsets)
            .map(|(&n, &o)| n + o)
            .collect();
        let total: usize = shape.iter().product();
        let mut data = Vec::with_capacity(total);
        let mut idx = Shape::new();
        let mut src = Shape::new();
        for flat in 0..total {
            unravel_index(flat, &shape, &mut idx);
            src.clear();
            let mut in_padding = false;
            for (d, &o) in offsets.iter().enumerate() {
                if idx[d] < o {
                    in_padding = true;
                    break;
                }
                src.push(idx[d] - o);
            }
            data.push(if in_padding {
                Coeff::zero(self.dtype)
            } else {
                self.data[&src[..]]
            });
        }
        Ok(Self {
            data: Array::from_shape_vec(IxDyn(&shape), data)
                .expect("element count matches the padded shape"),
            dtype: self.dtype,
        })
    }

    /// Restrict to the smallest origin-anchored bounding box containing
    /// every coefficient that is not near zero.
    ///
    /// Near-zero means exactly zero for discrete classes and within an
    /// absolute tolerance of zero for floats (see
    /// [`Coeff::is_near_zero`](crate::Coeff::is_near_zero)). If every
    /// coefficient is near zero, every axis collapses to extent 0 (the rank
    /// is kept); a rank-0 tensor trims to itself. Trimming is idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::PaddedND;
    ///
    /// let t = PaddedND::from_coefficients([1i64, 0]).unwrap();
    /// assert_eq!(t.trim(), PaddedND::from_coefficients([1i64]).unwrap());
    ///
    /// let zeros = PaddedND::from_coefficients([[0i64, 0], [0, 0]]).unwrap();
    /// assert_eq!(zeros.trim().shape(), &[0, 0]);
    /// ```
    pub fn trim(&self) -> Self {
        if self.rank() == 0 {
            return self.clone();
        }
        let mut bound: Option<Shape> = None;
        let mut idx = Shape::new();
        // Storage is always freshly built in standard layout, so flat
        // iteration order is row-major.
        for (flat, c) in self.data.iter().enumerate() {
            if c.is_near_zero() {
                continue;
            }
            unravel_index(flat, self.shape(), &mut idx);
            match bound.as_mut() {
                None => bound = Some(idx.iter().map(|&i| i + 1).collect()),
                Some(b) => {
                    for (d, &i) in idx.iter().enumerate() {
                        if i + 1 > b[d] {
                            b[d] = i + 1;
                        }
                    }
                }
            }
        }
        let shape = bound.unwrap_or_else(|| smallvec![0; self.rank()]);
        let total: usize = shape.iter().product();
        let mut data = Vec::with_capacity(total);
        for flat in 0..total {
            unravel_index(flat, &shape, &mut idx);
            data.push(self.data[&idx[..]]);
        }
        Self {
            data: Array::from_shape_vec(IxDyn(&shape), data)
                .expect("element count matches the bounding box"),
            dtype: self.dtype,
        }
    }

    /// Round every coefficient to the given decimal precision, then trim.
    ///
    /// `None` rounds to the nearest integer with ties to even and yields an
    /// integer-class tensor; `Some(n)` rounds floats to `n` decimal places
    /// (negative `n` rounds to tens, hundreds, ...) and keeps the float
    /// class. Discrete-class tensors keep their values and become integer
    /// class.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::{DType, PaddedND};
    ///
    /// let t = PaddedND::from_coefficients([1.25, 2.5, 0.0]).unwrap();
    ///
    /// let nearest = t.round(None);
    /// assert_eq!(nearest, PaddedND::from_coefficients([1i64, 2]).unwrap());
    /// assert_eq!(nearest.dtype(), DType::Int);
    ///
    /// let tenths = t.round(Some(1));
    /// assert_eq!(tenths, PaddedND::from_coefficients([1.2, 2.5]).unwrap());
    /// assert_eq!(tenths.dtype(), DType::Float);
    /// ```
    pub fn round(&self, ndigits: Option<i32>) -> Self {
        let dtype = match (self.dtype, ndigits) {
            (DType::Float, Some(_)) => DType::Float,
            _ => DType::Int,
        };
        let data = self.data.mapv(|c| c.round_to(ndigits));
        Self { data, dtype }.trim()
    }
}
