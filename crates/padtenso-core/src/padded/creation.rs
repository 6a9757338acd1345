//! Tensor creation methods
//!
//! This module provides the three root constructors: nested coefficient
//! literals, one-hot basis tensors, and standard-normal random tensors.
//! Every other tensor in existence is derived from these.

use super::types::PaddedND;
use crate::coeff::{Coeff, DType};
use crate::error::TensorError;
use crate::nested::Nested;
use crate::types::Shape;
use scirs2_core::ndarray_ext::{Array, IxDyn};

impl PaddedND {
    /// Create a tensor from a nested coefficient literal.
    ///
    /// Accepts anything convertible to [`Nested`]: a bare scalar (producing
    /// a rank-0 tensor), or arbitrarily deep `Vec`s / fixed-size arrays of
    /// scalars. Mixed coefficient classes are promoted to the widest one so
    /// the element class is uniform.
    ///
    /// # Errors
    ///
    /// Fails when the nesting is not rectangular (sibling entries of
    /// different shapes at any depth).
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::{DType, PaddedND, TensorError};
    ///
    /// let t = PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]]).unwrap();
    /// assert_eq!(t.shape(), &[3, 2]);
    /// assert_eq!(t.dtype(), DType::Int);
    ///
    /// // A scalar literal produces a rank-0 tensor.
    /// let s = PaddedND::from_coefficients(2.5).unwrap();
    /// assert_eq!(s.rank(), 0);
    ///
    /// // Ragged nesting is rejected.
    /// let err = PaddedND::from_coefficients(vec![vec![1i64, 2], vec![3]]);
    /// assert!(matches!(err, Err(TensorError::Ragged { .. })));
    /// ```
    pub fn from_coefficients(coefficients: impl Into<Nested>) -> Result<Self, TensorError> {
        let nested = coefficients.into();
        let shape = nested.shape()?;
        let mut flat = Vec::new();
        nested.flatten_into(&mut flat);
        let dtype = flat
            .iter()
            .map(|c| c.dtype())
            .reduce(DType::promote)
            .unwrap_or(DType::Int);
        let data: Vec<Coeff> = flat.into_iter().map(|c| c.cast(dtype)).collect();
        let data = Array::from_shape_vec(IxDyn(&shape), data)
            .expect("flattened literal matches its inferred shape");
        Ok(Self { data, dtype })
    }

    /// Create a one-hot basis tensor.
    ///
    /// The result has rank `index.len()`, shape `(i_1 + 1, ..., i_k + 1)`,
    /// integer class, and a single `1` at `index`; everything else is `0`.
    /// Together with the implicit padding this is the standard basis vector
    /// of the infinite coefficient space at that multi-index.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::PaddedND;
    ///
    /// let b = PaddedND::basis(&[1, 2]);
    /// assert_eq!(b.shape(), &[2, 3]);
    /// assert_eq!(
    ///     b,
    ///     PaddedND::from_coefficients([[0i64, 0, 0], [0, 0, 1]]).unwrap()
    /// );
    /// ```
    pub fn basis(index: &[usize]) -> Self {
        let shape: Shape = index.iter().map(|&i| i + 1).collect();
        let mut data = Array::from_elem(IxDyn(&shape), Coeff::Int(0));
        data[index] = Coeff::Int(1);
        Self {
            data,
            dtype: DType::Int,
        }
    }

    /// Create a tensor of independent standard-normal samples.
    ///
    /// Uses scirs2_core::random for RNG (never rand/rand_distr directly)
    /// with a Box-Muller transform; the result always has the float class.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::{DType, PaddedND};
    ///
    /// let t = PaddedND::random(&[2, 3]);
    /// assert_eq!(t.shape(), &[2, 3]);
    /// assert_eq!(t.dtype(), DType::Float);
    /// ```
    pub fn random(shape: &[usize]) -> Self {
        use scirs2_core::random::quick::random_f64;
        let total: usize = shape.iter().product();
        let mut data = Vec::with_capacity(total + 1);
        while data.len() < total {
            // Box-Muller transform; u1 is kept away from 0 for ln().
            let u1 = random_f64().max(f64::MIN_POSITIVE);
            let u2 = random_f64();
            let r = (-2.0 * u1.ln()).sqrt();
            let theta = 2.0 * std::f64::consts::PI * u2;
            data.push(Coeff::Float(r * theta.cos()));
            data.push(Coeff::Float(r * theta.sin()));
        }
        data.truncate(total);
        Self {
            data: Array::from_shape_vec(IxDyn(shape), data)
                .expect("sample count matches the shape"),
            dtype: DType::Float,
        }
    }
}
