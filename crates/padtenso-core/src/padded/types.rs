//! Padded tensor type definition and basic operations
//!
//! This module defines the core [`PaddedND`] type and provides basic
//! creation and accessor methods. Additional operations are organized in
//! separate modules.

use crate::coeff::{Coeff, DType};
use crate::error::TensorError;
use scirs2_core::ndarray_ext::{Array, IxDyn};

/// Finitely-stored N-dimensional tensor over an infinite zero-padded
/// coefficient space, backed by scirs2_core's ndarray.
///
/// The stored array is a rectangular window into a conceptually unbounded
/// array that is zero everywhere else: reads beyond the stored extent along
/// any axis observe the zero of the tensor's element class instead of
/// failing. Every coefficient belongs to a single class
/// ([`DType`](crate::DType)), fixed at construction.
///
/// `PaddedND` is immutable. No method mutates a tensor in place; every
/// operation returns a new value, so sharing tensors across threads needs
/// no coordination.
///
/// # Examples
///
/// ```
/// use padtenso_core::{Coeff, PaddedND};
///
/// let t = PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]]).unwrap();
/// assert_eq!(t.rank(), 2);
/// assert_eq!(t.shape(), &[3, 2]);
///
/// // In-range reads see stored coefficients, everything else sees zero.
/// assert_eq!(t.get(&[2, 1]).unwrap(), Coeff::Int(6));
/// assert_eq!(t.get(&[999, 238_974]).unwrap(), Coeff::Int(0));
/// ```
#[derive(Clone)]
pub struct PaddedND {
    /// Underlying ndarray storage (via scirs2_core); never mutated after
    /// construction.
    pub(crate) data: Array<Coeff, IxDyn>,
    /// Uniform element class of the stored coefficients.
    pub(crate) dtype: DType,
}

impl PaddedND {
    /// Create a tensor from flat row-major data and a shape.
    ///
    /// Mixed input classes are promoted to the widest one
    /// (`Bool < Int < Float`) so the element class stays uniform; an empty
    /// input defaults to the integer class.
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened coefficients in row-major order
    /// * `shape` - Target shape
    ///
    /// # Errors
    ///
    /// Fails when the element count does not match the shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::PaddedND;
    ///
    /// let t = PaddedND::from_vec(vec![1i64, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(t.shape(), &[2, 3]);
    ///
    /// assert!(PaddedND::from_vec(vec![1i64, 2, 3], &[2, 2]).is_err());
    /// ```
    pub fn from_vec<C: Into<Coeff>>(vec: Vec<C>, shape: &[usize]) -> Result<Self, TensorError> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            return Err(TensorError::ShapeMismatch {
                shape: shape.to_vec(),
                expected: total,
                got: vec.len(),
            });
        }
        let coeffs: Vec<Coeff> = vec.into_iter().map(Into::into).collect();
        let dtype = coeffs
            .iter()
            .map(|c| c.dtype())
            .reduce(DType::promote)
            .unwrap_or(DType::Int);
        let data: Vec<Coeff> = coeffs.into_iter().map(|c| c.cast(dtype)).collect();
        let data = Array::from_shape_vec(IxDyn(shape), data)
            .expect("element count was checked against the shape");
        Ok(Self { data, dtype })
    }

    /// Create a tensor of zeros with the given shape and element class.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::{Coeff, DType, PaddedND};
    ///
    /// let t = PaddedND::zeros(&[2, 3], DType::Int);
    /// assert_eq!(t.get(&[1, 2]).unwrap(), Coeff::Int(0));
    /// assert_eq!(t.dtype(), DType::Int);
    /// ```
    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), Coeff::zero(dtype)),
            dtype,
        }
    }

    /// Get the rank (number of axes) of this tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::{DType, PaddedND};
    ///
    /// let t = PaddedND::zeros(&[2, 3, 4], DType::Float);
    /// assert_eq!(t.rank(), 3);
    /// ```
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Get the stored shape of this tensor
    ///
    /// Any entry may be zero; the conceptual tensor extends with zeros
    /// beyond the stored extent along every axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::{DType, PaddedND};
    ///
    /// let t = PaddedND::zeros(&[2, 3, 4], DType::Float);
    /// assert_eq!(t.shape(), &[2, 3, 4]);
    /// ```
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get a copy of the shape as a vector.
    pub fn shape_vec(&self) -> Vec<usize> {
        self.shape().to_vec()
    }

    /// Get the number of stored coefficients
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor stores no coefficients (some axis has extent 0)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The element class of this tensor.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Get a read-only reference to the underlying ndarray
    ///
    /// There is no mutable counterpart: the backing array is immutable
    /// after construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::PaddedND;
    ///
    /// let t = PaddedND::from_vec(vec![1i64, 2, 3, 4], &[2, 2]).unwrap();
    /// assert_eq!(t.as_array().shape(), &[2, 2]);
    /// ```
    pub fn as_array(&self) -> &Array<Coeff, IxDyn> {
        &self.data
    }

    /// Convert the stored coefficients to a flat vector in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::{Coeff, PaddedND};
    ///
    /// let t = PaddedND::from_vec(vec![1i64, 2, 3, 4], &[2, 2]).unwrap();
    /// assert_eq!(t.to_vec()[3], Coeff::Int(4));
    /// ```
    pub fn to_vec(&self) -> Vec<Coeff> {
        self.data.iter().copied().collect()
    }

    /// Create an iterator over all stored coefficients in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::PaddedND;
    ///
    /// let t = PaddedND::from_vec(vec![1i64, 2, 3, 4], &[2, 2]).unwrap();
    /// let sum: i64 = t.iter().map(|c| c.as_i64()).sum();
    /// assert_eq!(sum, 10);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &Coeff> {
        self.data.iter()
    }

    /// Check if two tensors have the same stored shape
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }
}
