//! # PaddedND - Trait Implementations
//!
//! This module contains trait implementations for `PaddedND`:
//! `Index`, `PartialEq`, `Debug` and `Display`.

use super::types::PaddedND;
use crate::coeff::{Coeff, DType};
use std::fmt;

static ZERO_BOOL: Coeff = Coeff::Bool(false);
static ZERO_INT: Coeff = Coeff::Int(0);
static ZERO_FLOAT: Coeff = Coeff::Float(0.0);

/// Non-negative indexed access under the implicit padding.
///
/// Reads beyond the stored extent return a reference to the zero of the
/// tensor's element class. For signed indices with wraparound and a
/// fallible rank check, use [`PaddedND::get`].
///
/// # Panics
///
/// Panics when the index length differs from the tensor's rank.
///
/// # Examples
///
/// ```
/// use padtenso_core::{Coeff, PaddedND};
///
/// let t = PaddedND::from_coefficients([[1i64, 2], [3, 4]]).unwrap();
/// assert_eq!(t[&[1, 1][..]], Coeff::Int(4));
/// assert_eq!(t[&[100, 100][..]], Coeff::Int(0));
/// ```
impl std::ops::Index<&[usize]> for PaddedND {
    type Output = Coeff;

    fn index(&self, index: &[usize]) -> &Coeff {
        assert_eq!(
            index.len(),
            self.rank(),
            "rank mismatch: multi-index has {} entries, expected {}",
            index.len(),
            self.rank()
        );
        for (d, &i) in index.iter().enumerate() {
            if i >= self.shape()[d] {
                return match self.dtype() {
                    DType::Bool => &ZERO_BOOL,
                    DType::Int => &ZERO_INT,
                    DType::Float => &ZERO_FLOAT,
                };
            }
        }
        &self.data[index]
    }
}

/// Strict structural equality over the *stored* arrays.
///
/// Two tensors are equal iff their stored shapes match and every stored
/// coefficient compares numerically equal (so `[1]` equals `[1.0]`; the
/// element class itself is not compared). No implicit zero-extension is
/// performed: a tensor and its zero-padded counterpart of larger stored
/// shape are **not** equal until trimmed.
///
/// # Examples
///
/// ```
/// use padtenso_core::PaddedND;
///
/// let a = PaddedND::from_coefficients([1i64]).unwrap();
/// let b = PaddedND::from_coefficients([1i64, 0]).unwrap();
///
/// // Mathematically equal in the padded space, but stored shapes differ.
/// assert_ne!(a, b);
/// assert_eq!(a, b.trim());
/// ```
impl PartialEq for PaddedND {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a == b)
    }
}

impl fmt::Debug for PaddedND {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaddedND")
            .field("shape", &self.shape())
            .field("rank", &self.rank())
            .field("dtype", &self.dtype())
            .field("data", &self.data)
            .finish()
    }
}

/// Multi-line rendering of the stored coefficients, labeled with the type
/// name. Continuation rows are aligned under the opening bracket; a rank-0
/// tensor renders as `PaddedND(value)`.
///
/// # Examples
///
/// ```
/// use padtenso_core::PaddedND;
///
/// let t = PaddedND::from_coefficients([[1i64, 2], [3, 4]]).unwrap();
/// assert_eq!(format!("{t}"), "PaddedND[[1, 2],\n         [3, 4]]");
/// ```
impl fmt::Display for PaddedND {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABEL: &str = "PaddedND";
        write!(f, "{LABEL}")?;
        if self.rank() == 0 {
            if let Some(c) = self.data.iter().next() {
                write!(f, "({c})")?;
            }
            return Ok(());
        }
        let mut prefix = Vec::with_capacity(self.rank());
        write_block(f, self, &mut prefix, LABEL.len())
    }
}

/// Recursive block writer: one bracket pair per axis, rows of the deepest
/// axis on one line, outer separators on fresh aligned lines.
fn write_block(
    f: &mut fmt::Formatter<'_>,
    t: &PaddedND,
    prefix: &mut Vec<usize>,
    pad: usize,
) -> fmt::Result {
    let depth = prefix.len();
    if depth == t.rank() {
        return write!(f, "{}", t.data[&prefix[..]]);
    }
    write!(f, "[")?;
    for i in 0..t.shape()[depth] {
        if i > 0 {
            write!(f, ",")?;
            if depth + 1 < t.rank() {
                write!(f, "\n{:width$}", "", width = pad + depth + 1)?;
            } else {
                write!(f, " ")?;
            }
        }
        prefix.push(i);
        write_block(f, t, prefix, pad)?;
        prefix.pop();
    }
    write!(f, "]")
}
