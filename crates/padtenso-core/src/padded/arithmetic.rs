//! Elementwise combination policies and operator sugar
//!
//! Two policies reconcile the stored shapes of two tensors before a
//! pointwise combination:
//!
//! - [`zip_overlap`] restricts both operands to the per-axis minimum shape.
//!   This is the multiplicative policy: a product with an implicit zero is
//!   zero anyway, and truncation avoids dividing by implicit zeros.
//! - [`zip_padded`] zero-extends both operands to the per-axis maximum
//!   shape. This is the additive policy: a sum with an implicit zero must
//!   keep the other operand's value.
//!
//! Both are generic over the *left* operand's type through the
//! [`PaddedTensor`] trait and construct their result with it, so a derived
//! tensor-like type (say, a polynomial wrapper) gets results of its own
//! type back from the shared arithmetic. [`map_scalar`] is the fallback of
//! both policies when the second operand is a bare scalar.
//!
//! The `+ - * /` operator impls on [`PaddedND`] are sugar over these
//! policies; they panic on rank-mismatched operands, while the policy
//! functions surface that case as an error.

use super::functions::unravel_index;
use super::types::PaddedND;
use crate::coeff::{Coeff, DType};
use crate::error::TensorError;
use crate::types::Shape;
use scirs2_core::ndarray_ext::{Array, IxDyn};
use std::ops::{Add, Div, Mul, Sub};

/// Anything constructible from a coefficient array.
///
/// The combination policies build their result through this trait using the
/// left operand's type, which is what lets a derived tensor-like type reuse
/// the arithmetic wholesale.
///
/// # Examples
///
/// A wrapper type that stays closed under the shared arithmetic:
///
/// ```
/// use padtenso_core::{zip_padded, Coeff, DType, PaddedND, PaddedTensor};
/// use scirs2_core::ndarray_ext::{Array, IxDyn};
///
/// struct MultiPoly(PaddedND);
///
/// impl PaddedTensor for MultiPoly {
///     fn from_parts(coeffs: Array<Coeff, IxDyn>, dtype: DType) -> Self {
///         MultiPoly(PaddedND::from_parts(coeffs, dtype))
///     }
///     fn coeffs(&self) -> &Array<Coeff, IxDyn> {
///         self.0.coeffs()
///     }
///     fn dtype(&self) -> DType {
///         self.0.dtype()
///     }
/// }
///
/// let p = MultiPoly(PaddedND::from_coefficients([1i64, 2]).unwrap());
/// let q = PaddedND::from_coefficients([1i64, 0, 3]).unwrap();
///
/// // The sum of a MultiPoly and a tensor is again a MultiPoly.
/// let sum: MultiPoly = zip_padded(|a, b| a + b, &p, &q, DType::Int).unwrap();
/// assert_eq!(
///     *sum.0.coeffs(),
///     *PaddedND::from_coefficients([2i64, 2, 3]).unwrap().coeffs()
/// );
/// ```
pub trait PaddedTensor: Sized {
    /// Construct a value from a coefficient array and its element class.
    fn from_parts(coeffs: Array<Coeff, IxDyn>, dtype: DType) -> Self;

    /// The stored coefficient array.
    fn coeffs(&self) -> &Array<Coeff, IxDyn>;

    /// The uniform element class of the stored coefficients.
    fn dtype(&self) -> DType;
}

impl PaddedTensor for PaddedND {
    fn from_parts(coeffs: Array<Coeff, IxDyn>, dtype: DType) -> Self {
        Self {
            data: coeffs,
            dtype,
        }
    }

    fn coeffs(&self) -> &Array<Coeff, IxDyn> {
        &self.data
    }

    fn dtype(&self) -> DType {
        self.dtype
    }
}

/// Padded read against an arbitrary coefficient array.
fn padded_read(arr: &Array<Coeff, IxDyn>, index: &[usize], dtype: DType) -> Coeff {
    for (d, &i) in index.iter().enumerate() {
        if i >= arr.shape()[d] {
            return Coeff::zero(dtype);
        }
    }
    arr[index]
}

/// Combine two tensors pointwise over their per-axis minimum shape.
///
/// The result has the left operand's type and the given element class; its
/// extent along axis `d` is `min(s.shape[d], t.shape[d])`.
///
/// # Errors
///
/// Fails when the operands' ranks differ.
///
/// # Examples
///
/// ```
/// use padtenso_core::{zip_overlap, DType, PaddedND};
///
/// let s = PaddedND::from_coefficients([1i64, 2, 3]).unwrap();
/// let t = PaddedND::from_coefficients([4i64, 5]).unwrap();
///
/// let product: PaddedND = zip_overlap(|a, b| a * b, &s, &t, DType::Int).unwrap();
/// assert_eq!(product, PaddedND::from_coefficients([4i64, 10]).unwrap());
/// ```
pub fn zip_overlap<S, T, F>(f: F, s: &S, t: &T, dtype: DType) -> Result<S, TensorError>
where
    S: PaddedTensor,
    T: PaddedTensor,
    F: Fn(Coeff, Coeff) -> Coeff,
{
    let (sa, ta) = (s.coeffs(), t.coeffs());
    if sa.ndim() != ta.ndim() {
        return Err(TensorError::RankMismatch {
            what: "right operand shape",
            got: ta.ndim(),
            rank: sa.ndim(),
        });
    }
    let shape: Shape = sa
        .shape()
        .iter()
        .zip(ta.shape())
        .map(|(&a, &b)| a.min(b))
        .collect();
    let total: usize = shape.iter().product();
    let mut data = Vec::with_capacity(total);
    let mut idx = Shape::new();
    for flat in 0..total {
        unravel_index(flat, &shape, &mut idx);
        data.push(f(sa[&idx[..]], ta[&idx[..]]));
    }
    Ok(S::from_parts(
        Array::from_shape_vec(IxDyn(&shape), data)
            .expect("element count matches the overlap shape"),
        dtype,
    ))
}

/// Combine two tensors pointwise over their per-axis maximum shape,
/// zero-extending each operand with zeros of its own element class.
///
/// The result has the left operand's type and the given element class; its
/// extent along axis `d` is `max(s.shape[d], t.shape[d])`.
///
/// # Errors
///
/// Fails when the operands' ranks differ.
///
/// # Examples
///
/// ```
/// use padtenso_core::{zip_padded, DType, PaddedND};
///
/// let s = PaddedND::from_coefficients([1i64, 2, 3]).unwrap();
/// let t = PaddedND::from_coefficients([4i64, 5]).unwrap();
///
/// let sum: PaddedND = zip_padded(|a, b| a + b, &s, &t, DType::Int).unwrap();
/// assert_eq!(sum, PaddedND::from_coefficients([5i64, 7, 3]).unwrap());
/// ```
pub fn zip_padded<S, T, F>(f: F, s: &S, t: &T, dtype: DType) -> Result<S, TensorError>
where
    S: PaddedTensor,
    T: PaddedTensor,
    F: Fn(Coeff, Coeff) -> Coeff,
{
    let (sa, ta) = (s.coeffs(), t.coeffs());
    if sa.ndim() != ta.ndim() {
        return Err(TensorError::RankMismatch {
            what: "right operand shape",
            got: ta.ndim(),
            rank: sa.ndim(),
        });
    }
    let shape: Shape = sa
        .shape()
        .iter()
        .zip(ta.shape())
        .map(|(&a, &b)| a.max(b))
        .collect();
    let total: usize = shape.iter().product();
    let mut data = Vec::with_capacity(total);
    let mut idx = Shape::new();
    for flat in 0..total {
        unravel_index(flat, &shape, &mut idx);
        let a = padded_read(sa, &idx, s.dtype());
        let b = padded_read(ta, &idx, t.dtype());
        data.push(f(a, b));
    }
    Ok(S::from_parts(
        Array::from_shape_vec(IxDyn(&shape), data)
            .expect("element count matches the padded shape"),
        dtype,
    ))
}

/// Apply `f` to every coefficient of `s`.
///
/// This is the scalar fallback of both combination policies: when the
/// second operand is a bare scalar, it broadcasts over the left operand's
/// stored coefficients. The result has the left operand's type and the
/// given element class.
///
/// # Examples
///
/// ```
/// use padtenso_core::{map_scalar, Coeff, DType, PaddedND};
///
/// let t = PaddedND::from_coefficients([1i64, 2, 3]).unwrap();
/// let doubled: PaddedND = map_scalar(|c| c * Coeff::Int(2), &t, DType::Int);
/// assert_eq!(doubled, PaddedND::from_coefficients([2i64, 4, 6]).unwrap());
/// ```
pub fn map_scalar<S, F>(f: F, s: &S, dtype: DType) -> S
where
    S: PaddedTensor,
    F: Fn(Coeff) -> Coeff,
{
    S::from_parts(s.coeffs().mapv(f), dtype)
}

// Operator sugar. Tensor (+) tensor uses the additive padding policy,
// tensor (*) tensor and tensor (/) tensor the truncating overlap policy;
// scalar forms broadcast. All of these panic when the operands' ranks
// differ; use the policy functions directly for a fallible combination.

impl Add for &PaddedND {
    type Output = PaddedND;

    fn add(self, rhs: &PaddedND) -> PaddedND {
        match zip_padded(
            |a, b| a + b,
            self,
            rhs,
            DType::arithmetic(self.dtype, rhs.dtype),
        ) {
            Ok(r) => r,
            Err(e) => panic!("cannot add tensors: {e}"),
        }
    }
}

impl Add for PaddedND {
    type Output = PaddedND;

    fn add(self, rhs: PaddedND) -> PaddedND {
        &self + &rhs
    }
}

impl Add<i64> for &PaddedND {
    type Output = PaddedND;

    fn add(self, rhs: i64) -> PaddedND {
        let rhs = Coeff::Int(rhs);
        map_scalar(|c| c + rhs, self, DType::arithmetic(self.dtype, DType::Int))
    }
}

impl Add<i64> for PaddedND {
    type Output = PaddedND;

    fn add(self, rhs: i64) -> PaddedND {
        &self + rhs
    }
}

impl Add<f64> for &PaddedND {
    type Output = PaddedND;

    fn add(self, rhs: f64) -> PaddedND {
        let rhs = Coeff::Float(rhs);
        map_scalar(|c| c + rhs, self, DType::Float)
    }
}

impl Add<f64> for PaddedND {
    type Output = PaddedND;

    fn add(self, rhs: f64) -> PaddedND {
        &self + rhs
    }
}

impl Sub for &PaddedND {
    type Output = PaddedND;

    fn sub(self, rhs: &PaddedND) -> PaddedND {
        match zip_padded(
            |a, b| a - b,
            self,
            rhs,
            DType::arithmetic(self.dtype, rhs.dtype),
        ) {
            Ok(r) => r,
            Err(e) => panic!("cannot subtract tensors: {e}"),
        }
    }
}

impl Sub for PaddedND {
    type Output = PaddedND;

    fn sub(self, rhs: PaddedND) -> PaddedND {
        &self - &rhs
    }
}

impl Sub<i64> for &PaddedND {
    type Output = PaddedND;

    fn sub(self, rhs: i64) -> PaddedND {
        let rhs = Coeff::Int(rhs);
        map_scalar(|c| c - rhs, self, DType::arithmetic(self.dtype, DType::Int))
    }
}

impl Sub<i64> for PaddedND {
    type Output = PaddedND;

    fn sub(self, rhs: i64) -> PaddedND {
        &self - rhs
    }
}

impl Sub<f64> for &PaddedND {
    type Output = PaddedND;

    fn sub(self, rhs: f64) -> PaddedND {
        let rhs = Coeff::Float(rhs);
        map_scalar(|c| c - rhs, self, DType::Float)
    }
}

impl Sub<f64> for PaddedND {
    type Output = PaddedND;

    fn sub(self, rhs: f64) -> PaddedND {
        &self - rhs
    }
}

impl Mul for &PaddedND {
    type Output = PaddedND;

    fn mul(self, rhs: &PaddedND) -> PaddedND {
        match zip_overlap(
            |a, b| a * b,
            self,
            rhs,
            DType::arithmetic(self.dtype, rhs.dtype),
        ) {
            Ok(r) => r,
            Err(e) => panic!("cannot multiply tensors: {e}"),
        }
    }
}

impl Mul for PaddedND {
    type Output = PaddedND;

    fn mul(self, rhs: PaddedND) -> PaddedND {
        &self * &rhs
    }
}

impl Mul<i64> for &PaddedND {
    type Output = PaddedND;

    fn mul(self, rhs: i64) -> PaddedND {
        let rhs = Coeff::Int(rhs);
        map_scalar(|c| c * rhs, self, DType::arithmetic(self.dtype, DType::Int))
    }
}

impl Mul<i64> for PaddedND {
    type Output = PaddedND;

    fn mul(self, rhs: i64) -> PaddedND {
        &self * rhs
    }
}

impl Mul<f64> for &PaddedND {
    type Output = PaddedND;

    fn mul(self, rhs: f64) -> PaddedND {
        let rhs = Coeff::Float(rhs);
        map_scalar(|c| c * rhs, self, DType::Float)
    }
}

impl Mul<f64> for PaddedND {
    type Output = PaddedND;

    fn mul(self, rhs: f64) -> PaddedND {
        &self * rhs
    }
}

impl Mul<&PaddedND> for i64 {
    type Output = PaddedND;

    fn mul(self, rhs: &PaddedND) -> PaddedND {
        rhs * self
    }
}

impl Mul<PaddedND> for i64 {
    type Output = PaddedND;

    fn mul(self, rhs: PaddedND) -> PaddedND {
        &rhs * self
    }
}

impl Mul<&PaddedND> for f64 {
    type Output = PaddedND;

    fn mul(self, rhs: &PaddedND) -> PaddedND {
        rhs * self
    }
}

impl Mul<PaddedND> for f64 {
    type Output = PaddedND;

    fn mul(self, rhs: PaddedND) -> PaddedND {
        &rhs * self
    }
}

impl Div for &PaddedND {
    type Output = PaddedND;

    fn div(self, rhs: &PaddedND) -> PaddedND {
        match zip_overlap(|a, b| a / b, self, rhs, DType::Float) {
            Ok(r) => r,
            Err(e) => panic!("cannot divide tensors: {e}"),
        }
    }
}

impl Div for PaddedND {
    type Output = PaddedND;

    fn div(self, rhs: PaddedND) -> PaddedND {
        &self / &rhs
    }
}

impl Div<i64> for &PaddedND {
    type Output = PaddedND;

    fn div(self, rhs: i64) -> PaddedND {
        let rhs = Coeff::Int(rhs);
        map_scalar(|c| c / rhs, self, DType::Float)
    }
}

impl Div<i64> for PaddedND {
    type Output = PaddedND;

    fn div(self, rhs: i64) -> PaddedND {
        &self / rhs
    }
}

impl Div<f64> for &PaddedND {
    type Output = PaddedND;

    fn div(self, rhs: f64) -> PaddedND {
        let rhs = Coeff::Float(rhs);
        map_scalar(|c| c / rhs, self, DType::Float)
    }
}

impl Div<f64> for PaddedND {
    type Output = PaddedND;

    fn div(self, rhs: f64) -> PaddedND {
        &self / rhs
    }
}
