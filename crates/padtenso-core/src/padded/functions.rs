//! Crate-internal index arithmetic helpers.

use crate::types::Shape;

/// Convert a row-major linear index into a multi-dimensional index.
///
/// `out` is cleared and refilled; `flat` must be less than the product of
/// `shape`.
pub(crate) fn unravel_index(mut flat: usize, shape: &[usize], out: &mut Shape) {
    out.clear();
    out.resize(shape.len(), 0);
    for d in (0..shape.len()).rev() {
        out[d] = flat % shape[d];
        flat /= shape[d];
    }
}
