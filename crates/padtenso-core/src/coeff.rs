//! Coefficient values and element classes.
//!
//! Every tensor stores coefficients of a single class ([`DType`]); [`Coeff`]
//! carries one coefficient of any class. Arithmetic between coefficients
//! follows the standard numeric promotion rules: integer with integer stays
//! integer, anything with a float becomes float, and division always yields
//! a float. Booleans participate in arithmetic as 0/1 and promote to
//! integers, so `true + true == 2`.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Absolute tolerance of the near-zero test for floating-point coefficients.
///
/// Integer and boolean coefficients are compared against zero exactly.
pub const NEAR_ZERO_TOL: f64 = 1e-8;

/// Element class of a tensor, fixed per tensor instance.
///
/// Promotion order is `Bool < Int < Float`. Arithmetic never produces a
/// `Bool` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// Boolean coefficients (0/1 under arithmetic).
    Bool,
    /// Signed 64-bit integer coefficients.
    Int,
    /// 64-bit floating-point coefficients.
    Float,
}

impl DType {
    /// Widest of two classes under the `Bool < Int < Float` order.
    ///
    /// This is the class a constructor assigns when its input mixes classes.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::DType;
    ///
    /// assert_eq!(DType::promote(DType::Int, DType::Float), DType::Float);
    /// assert_eq!(DType::promote(DType::Bool, DType::Int), DType::Int);
    /// assert_eq!(DType::promote(DType::Bool, DType::Bool), DType::Bool);
    /// ```
    pub fn promote(a: DType, b: DType) -> DType {
        match (a, b) {
            (DType::Float, _) | (_, DType::Float) => DType::Float,
            (DType::Int, _) | (_, DType::Int) => DType::Int,
            (DType::Bool, DType::Bool) => DType::Bool,
        }
    }

    /// Result class of additive or multiplicative arithmetic between two
    /// operand classes. Like [`promote`](DType::promote), except booleans
    /// are carried to `Int` (`true + true == 2`).
    ///
    /// Division ignores this and always yields [`DType::Float`].
    pub fn arithmetic(a: DType, b: DType) -> DType {
        match DType::promote(a, b) {
            DType::Bool => DType::Int,
            widened => widened,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::Bool => write!(f, "bool"),
            DType::Int => write!(f, "int"),
            DType::Float => write!(f, "float"),
        }
    }
}

/// A single tensor coefficient.
///
/// Comparison is numeric across classes: `Coeff::Int(1)` equals
/// `Coeff::Float(1.0)` and `Coeff::Bool(true)`.
///
/// # Examples
///
/// ```
/// use padtenso_core::Coeff;
///
/// assert_eq!(Coeff::Int(2) + Coeff::Int(3), Coeff::Int(5));
/// assert_eq!(Coeff::Int(1) + Coeff::Float(0.5), Coeff::Float(1.5));
/// assert_eq!(Coeff::Bool(true) + Coeff::Bool(true), Coeff::Int(2));
///
/// // Division always yields a float.
/// assert_eq!(Coeff::Int(1) / Coeff::Int(2), Coeff::Float(0.5));
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Coeff {
    /// A boolean coefficient.
    Bool(bool),
    /// An integer coefficient.
    Int(i64),
    /// A floating-point coefficient.
    Float(f64),
}

impl Coeff {
    /// The class of this coefficient.
    pub fn dtype(self) -> DType {
        match self {
            Coeff::Bool(_) => DType::Bool,
            Coeff::Int(_) => DType::Int,
            Coeff::Float(_) => DType::Float,
        }
    }

    /// The zero coefficient of the given class.
    ///
    /// This is what reads beyond a tensor's stored extent observe, and what
    /// zero-padding shifts fill with. Padding with the tensor's own class
    /// keeps integer tensors integer.
    pub fn zero(dtype: DType) -> Coeff {
        match dtype {
            DType::Bool => Coeff::Bool(false),
            DType::Int => Coeff::Int(0),
            DType::Float => Coeff::Float(0.0),
        }
    }

    /// Convert this coefficient to the given class.
    ///
    /// Widening (`Bool` to `Int`, `Int` to `Float`) is exact for the integer
    /// ranges tensors realistically hold; narrowing a `Float` to `Int`
    /// truncates and to `Bool` tests against zero.
    pub fn cast(self, dtype: DType) -> Coeff {
        match dtype {
            DType::Bool => Coeff::Bool(!self.is_near_zero()),
            DType::Int => Coeff::Int(self.as_i64()),
            DType::Float => Coeff::Float(self.as_f64()),
        }
    }

    /// Numeric value as a float.
    pub fn as_f64(self) -> f64 {
        match self {
            Coeff::Bool(b) => b as i64 as f64,
            Coeff::Int(v) => v as f64,
            Coeff::Float(x) => x,
        }
    }

    /// Numeric value as an integer, truncating for floats.
    pub fn as_i64(self) -> i64 {
        match self {
            Coeff::Bool(b) => b as i64,
            Coeff::Int(v) => v,
            Coeff::Float(x) => x as i64,
        }
    }

    /// Near-zero test used by trimming.
    ///
    /// Exact for `Bool` and `Int`; within [`NEAR_ZERO_TOL`] of zero for
    /// `Float`.
    ///
    /// # Examples
    ///
    /// ```
    /// use padtenso_core::Coeff;
    ///
    /// assert!(Coeff::Int(0).is_near_zero());
    /// assert!(Coeff::Float(1e-12).is_near_zero());
    /// assert!(!Coeff::Float(1e-3).is_near_zero());
    /// ```
    pub fn is_near_zero(self) -> bool {
        match self {
            Coeff::Bool(b) => !b,
            Coeff::Int(v) => v == 0,
            Coeff::Float(x) => x.abs() <= NEAR_ZERO_TOL,
        }
    }

    /// Decimal rounding with ties to even.
    ///
    /// `None` rounds to the nearest integer and yields an `Int` coefficient;
    /// `Some(n)` rounds a float to `n` decimal places (negative `n` rounds
    /// to tens, hundreds, ...) and stays `Float`. Discrete coefficients
    /// round to their integer value.
    pub(crate) fn round_to(self, ndigits: Option<i32>) -> Coeff {
        match self {
            Coeff::Bool(b) => Coeff::Int(b as i64),
            Coeff::Int(v) => Coeff::Int(v),
            Coeff::Float(x) => match ndigits {
                None => Coeff::Int(x.round_ties_even() as i64),
                Some(n) if n >= 0 => {
                    let scale = 10f64.powi(n);
                    Coeff::Float((x * scale).round_ties_even() / scale)
                }
                Some(n) => {
                    // Dividing by the power keeps round-trips like
                    // round(123.0, -1) == 120.0 exact.
                    let scale = 10f64.powi(-n);
                    Coeff::Float((x / scale).round_ties_even() * scale)
                }
            },
        }
    }
}

impl PartialEq for Coeff {
    fn eq(&self, other: &Coeff) -> bool {
        match (self.dtype(), other.dtype()) {
            (DType::Float, _) | (_, DType::Float) => self.as_f64() == other.as_f64(),
            _ => self.as_i64() == other.as_i64(),
        }
    }
}

impl Add for Coeff {
    type Output = Coeff;

    fn add(self, rhs: Coeff) -> Coeff {
        match DType::arithmetic(self.dtype(), rhs.dtype()) {
            DType::Float => Coeff::Float(self.as_f64() + rhs.as_f64()),
            _ => Coeff::Int(self.as_i64() + rhs.as_i64()),
        }
    }
}

impl Sub for Coeff {
    type Output = Coeff;

    fn sub(self, rhs: Coeff) -> Coeff {
        match DType::arithmetic(self.dtype(), rhs.dtype()) {
            DType::Float => Coeff::Float(self.as_f64() - rhs.as_f64()),
            _ => Coeff::Int(self.as_i64() - rhs.as_i64()),
        }
    }
}

impl Mul for Coeff {
    type Output = Coeff;

    fn mul(self, rhs: Coeff) -> Coeff {
        match DType::arithmetic(self.dtype(), rhs.dtype()) {
            DType::Float => Coeff::Float(self.as_f64() * rhs.as_f64()),
            _ => Coeff::Int(self.as_i64() * rhs.as_i64()),
        }
    }
}

impl Div for Coeff {
    type Output = Coeff;

    /// Division always yields a `Float` coefficient; division by zero
    /// follows native IEEE behavior and is not trapped.
    fn div(self, rhs: Coeff) -> Coeff {
        Coeff::Float(self.as_f64() / rhs.as_f64())
    }
}

impl From<bool> for Coeff {
    fn from(value: bool) -> Self {
        Coeff::Bool(value)
    }
}

impl From<i32> for Coeff {
    fn from(value: i32) -> Self {
        Coeff::Int(value as i64)
    }
}

impl From<i64> for Coeff {
    fn from(value: i64) -> Self {
        Coeff::Int(value)
    }
}

impl From<f64> for Coeff {
    fn from(value: f64) -> Self {
        Coeff::Float(value)
    }
}

impl fmt::Display for Coeff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coeff::Bool(b) => write!(f, "{b}"),
            Coeff::Int(v) => write!(f, "{v}"),
            Coeff::Float(x) => write!(f, "{x}"),
        }
    }
}
