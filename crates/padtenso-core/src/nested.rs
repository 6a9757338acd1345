//! Nested coefficient literals.
//!
//! [`Nested`] is the input type of
//! [`PaddedND::from_coefficients`](crate::PaddedND::from_coefficients): an
//! arbitrarily deep nesting of scalars and sequences, converted from plain
//! Rust values (`5`, `vec![1, 2]`, `[[1, 2], [3, 4]]`) via `From`/`Into`.

use crate::coeff::Coeff;
use crate::error::TensorError;
use crate::types::Shape;
use smallvec::smallvec;

/// A nested coefficient literal of arbitrary depth.
///
/// # Examples
///
/// ```
/// use padtenso_core::Nested;
///
/// // Fixed-size arrays and Vecs nest freely.
/// let matrix = Nested::from([[1i64, 2], [3, 4]]);
/// assert_eq!(&matrix.shape().unwrap()[..], &[2, 2]);
///
/// let scalar = Nested::from(5i64);
/// assert_eq!(&scalar.shape().unwrap()[..], &[] as &[usize]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Nested {
    /// A single coefficient (depth 0).
    Scalar(Coeff),
    /// A sequence of sibling entries along one axis.
    Seq(Vec<Nested>),
}

impl Nested {
    /// Rectangular shape of this literal.
    ///
    /// Fails if two sibling entries at any depth have different shapes,
    /// including the case of a scalar next to a sequence. An empty sequence
    /// has shape `[0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::{Nested, TensorError};
    ///
    /// let ragged = Nested::from(vec![vec![1i64, 2], vec![3]]);
    /// assert!(matches!(ragged.shape(), Err(TensorError::Ragged { .. })));
    /// ```
    pub fn shape(&self) -> Result<Shape, TensorError> {
        match self {
            Nested::Scalar(_) => Ok(Shape::new()),
            Nested::Seq(items) => {
                let mut iter = items.iter();
                let first = match iter.next() {
                    None => return Ok(smallvec![0]),
                    Some(item) => item.shape()?,
                };
                for item in iter {
                    let other = item.shape()?;
                    if other != first {
                        return Err(TensorError::Ragged {
                            first: first.to_vec(),
                            other: other.to_vec(),
                        });
                    }
                }
                let mut shape: Shape = smallvec![items.len()];
                shape.extend_from_slice(&first);
                Ok(shape)
            }
        }
    }

    /// Append all coefficients in row-major order.
    pub(crate) fn flatten_into(&self, out: &mut Vec<Coeff>) {
        match self {
            Nested::Scalar(c) => out.push(*c),
            Nested::Seq(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

impl From<Coeff> for Nested {
    fn from(value: Coeff) -> Self {
        Nested::Scalar(value)
    }
}

impl From<bool> for Nested {
    fn from(value: bool) -> Self {
        Nested::Scalar(value.into())
    }
}

impl From<i32> for Nested {
    fn from(value: i32) -> Self {
        Nested::Scalar(value.into())
    }
}

impl From<i64> for Nested {
    fn from(value: i64) -> Self {
        Nested::Scalar(value.into())
    }
}

impl From<f64> for Nested {
    fn from(value: f64) -> Self {
        Nested::Scalar(value.into())
    }
}

impl<N: Into<Nested>> From<Vec<N>> for Nested {
    fn from(value: Vec<N>) -> Self {
        Nested::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<N: Into<Nested>, const K: usize> From<[N; K]> for Nested {
    fn from(value: [N; K]) -> Self {
        Nested::Seq(value.into_iter().map(Into::into).collect())
    }
}
