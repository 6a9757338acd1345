//! Integration tests for padtenso-core
//!
//! These tests walk the public API through the reference scenarios:
//! construction, padded reads, shifting, trimming, arithmetic with shape
//! reconciliation, and the documented failure modes.

use padtenso_core::{
    zip_overlap, zip_padded, Coeff, DType, Nested, PaddedND, PaddedTensor, TensorError,
};
use scirs2_core::ndarray_ext::{Array, IxDyn};

fn sample_tensor() -> PaddedND {
    PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]]).unwrap()
}

#[test]
fn basis_tensor_is_one_hot() {
    let b = PaddedND::basis(&[1, 2]);
    assert_eq!(b.shape(), &[2, 3]);
    assert_eq!(b.dtype(), DType::Int);
    assert_eq!(
        b,
        PaddedND::from_coefficients([[0i64, 0, 0], [0, 0, 1]]).unwrap()
    );

    // Rank-0 basis: the scalar 1.
    let unit = PaddedND::basis(&[]);
    assert_eq!(unit.rank(), 0);
    assert_eq!(unit.get(&[]).unwrap(), Coeff::Int(1));
}

#[test]
fn padded_reads_see_zeros_beyond_the_stored_extent() {
    let t = sample_tensor();

    assert_eq!(t.get(&[2, 1]).unwrap(), Coeff::Int(6));
    assert_eq!(t.get(&[999, 238_974]).unwrap(), Coeff::Int(0));
    assert_eq!(t.get(&[999, 238_974]).unwrap().dtype(), DType::Int);

    // Negative components wrap around while in range, pad otherwise.
    assert_eq!(t.get(&[-1, -1]).unwrap(), Coeff::Int(6));
    assert_eq!(t.get(&[-4, 0]).unwrap(), Coeff::Int(0));
}

#[test]
fn rank_mismatched_index_is_an_error() {
    let t = sample_tensor();
    assert_eq!(
        t.get(&[0]),
        Err(TensorError::RankMismatch {
            what: "multi-index",
            got: 1,
            rank: 2,
        })
    );
}

#[test]
fn truncating_shift_drops_leading_entries() {
    let t = sample_tensor();
    let shifted = t.shift_left(&[2, 1]).unwrap();
    assert_eq!(shifted, PaddedND::from_coefficients([[6i64]]).unwrap());
    assert_eq!(shifted.dtype(), DType::Int);

    // Shifting past the stored extent empties the axis.
    let gone = t.shift_left(&[5, 0]).unwrap();
    assert_eq!(gone.shape(), &[0, 2]);
}

#[test]
fn padding_shift_prepends_native_zeros() {
    let t = sample_tensor();
    let padded = t.shift_right(&[1, 2]).unwrap();
    assert_eq!(
        padded,
        PaddedND::from_coefficients([
            [0i64, 0, 0, 0],
            [0, 0, 1, 2],
            [0, 0, 3, 4],
            [0, 0, 5, 6],
        ])
        .unwrap()
    );
    // The zero fill keeps the integer class.
    assert_eq!(padded.dtype(), DType::Int);
}

#[test]
fn pad_then_truncate_restores_the_original() {
    let t = sample_tensor();
    let roundtrip = t.shift_right(&[3, 1]).unwrap().shift_left(&[3, 1]).unwrap();
    assert_eq!(roundtrip, t);

    // The reverse order is lossy.
    let lossy = t.shift_left(&[1, 0]).unwrap().shift_right(&[1, 0]).unwrap();
    assert_ne!(lossy, t);
    assert_eq!(lossy.get(&[0, 0]).unwrap(), Coeff::Int(0));
}

#[test]
fn shift_offsets_must_match_the_rank() {
    let t = sample_tensor();
    assert!(matches!(
        t.shift_left(&[1]),
        Err(TensorError::RankMismatch { .. })
    ));
    assert!(matches!(
        t.shift_right(&[1, 2, 3]),
        Err(TensorError::RankMismatch { .. })
    ));
}

#[test]
fn trim_drops_trailing_near_zeros() {
    let t = PaddedND::from_coefficients([1i64, 0]).unwrap();
    assert_eq!(t.trim(), PaddedND::from_coefficients([1i64]).unwrap());

    // Floats trim under the near-zero tolerance.
    let f = PaddedND::from_coefficients([[2.0, 1e-12], [1e-10, 1e-9]]).unwrap();
    assert_eq!(f.trim().shape(), &[1, 1]);
}

#[test]
fn trim_of_all_zero_tensor_collapses_every_axis() {
    let zeros = PaddedND::from_coefficients([[0i64, 0, 0], [0, 0, 0]]).unwrap();
    let trimmed = zeros.trim();
    assert_eq!(trimmed.shape(), &[0, 0]);
    assert_eq!(trimmed.trim().shape(), &[0, 0]);

    // A rank-0 tensor has no axes to collapse.
    let scalar = PaddedND::from_coefficients(0i64).unwrap();
    assert_eq!(scalar.trim().rank(), 0);
    assert_eq!(scalar.trim(), scalar);
}

#[test]
fn rounding_composes_with_trim() {
    let t = PaddedND::from_coefficients([[1.4, 2.6], [1e-3, 0.0]]).unwrap();
    let rounded = t.round(None);
    assert_eq!(rounded.dtype(), DType::Int);
    assert_eq!(rounded, PaddedND::from_coefficients([[1i64, 3]]).unwrap());

    let tenths = t.round(Some(1));
    assert_eq!(tenths.dtype(), DType::Float);
    assert_eq!(
        tenths,
        PaddedND::from_coefficients([[1.4, 2.6]]).unwrap()
    );
}

#[test]
fn addition_reconciles_to_the_larger_extent() {
    let t = sample_tensor();
    let s = PaddedND::from_coefficients([[7i64, 8], [9, 10]]).unwrap();

    let sum = &t + &s;
    assert_eq!(
        sum,
        PaddedND::from_coefficients([[8i64, 10], [12, 14], [5, 6]]).unwrap()
    );
    assert_eq!(sum.dtype(), DType::Int);

    let diff = &t - &s;
    assert_eq!(
        diff,
        PaddedND::from_coefficients([[-6i64, -6], [-6, -6], [5, 6]]).unwrap()
    );
    assert!(sum.same_shape(&diff));
}

#[test]
fn scalar_multiplication_commutes_and_keeps_the_class() {
    let t = sample_tensor();
    let doubled = PaddedND::from_coefficients([[2i64, 4], [6, 8], [10, 12]]).unwrap();

    assert_eq!(2 * &t, doubled);
    assert_eq!(&t * 2, doubled);
    assert_eq!((&t * 2).dtype(), DType::Int);
    assert_eq!((&t * 2.0).dtype(), DType::Float);
}

#[test]
fn division_always_yields_floats() {
    let t = sample_tensor();
    let half = &t / 2;
    assert_eq!(half.dtype(), DType::Float);
    assert_eq!(
        half,
        PaddedND::from_coefficients([[0.5, 1.0], [1.5, 2.0], [2.5, 3.0]]).unwrap()
    );
}

#[test]
fn elementwise_tensor_product_truncates_to_the_overlap() {
    let t = sample_tensor();
    let s = PaddedND::from_coefficients([[7i64, 8], [9, 10]]).unwrap();

    let product = &t * &s;
    assert_eq!(
        product,
        PaddedND::from_coefficients([[7i64, 16], [27, 40]]).unwrap()
    );
    assert_eq!(product.dtype(), DType::Int);
}

#[test]
fn additive_inverse_cancels_up_to_trim() {
    let t = sample_tensor();
    let cancelled = (&t + &(-1 * &t)).trim();
    assert_eq!(cancelled.shape(), &[0, 0]);
}

#[test]
fn mixed_class_arithmetic_promotes_to_float() {
    let ints = PaddedND::from_coefficients([1i64, 2]).unwrap();
    let floats = PaddedND::from_coefficients([0.5, 0.5]).unwrap();
    let sum = &ints + &floats;
    assert_eq!(sum.dtype(), DType::Float);
    assert_eq!(sum, PaddedND::from_coefficients([1.5, 2.5]).unwrap());
}

#[test]
fn equality_is_strict_about_stored_shape() {
    let a = PaddedND::from_coefficients([1i64]).unwrap();
    let b = PaddedND::from_coefficients([1i64, 0]).unwrap();

    assert_ne!(a, b);
    assert_eq!(a, b.trim());

    // Coefficient comparison is numeric across classes.
    let f = PaddedND::from_coefficients([1.0]).unwrap();
    assert_eq!(a, f);
}

#[test]
fn ragged_nesting_is_rejected() {
    let err = PaddedND::from_coefficients(vec![vec![1i64, 2], vec![3]]).unwrap_err();
    assert!(matches!(err, TensorError::Ragged { .. }));

    // A scalar next to a sequence is ragged too.
    let mixed = Nested::Seq(vec![Nested::from(1i64), Nested::from(vec![2i64])]);
    assert!(matches!(mixed.shape(), Err(TensorError::Ragged { .. })));
}

#[test]
fn from_vec_checks_the_element_count() {
    let err = PaddedND::from_vec(vec![1i64, 2, 3], &[2, 2]).unwrap_err();
    assert_eq!(
        err,
        TensorError::ShapeMismatch {
            shape: vec![2, 2],
            expected: 4,
            got: 3,
        }
    );
}

#[test]
fn mixed_class_literals_are_promoted_at_construction() {
    let t = PaddedND::from_vec(vec![Coeff::Int(1), Coeff::Float(0.5)], &[2]).unwrap();
    assert_eq!(t.dtype(), DType::Float);
    assert_eq!(t.get(&[0]).unwrap(), Coeff::Float(1.0));

    let b = PaddedND::from_coefficients([true, false]).unwrap();
    assert_eq!(b.dtype(), DType::Bool);
    assert_eq!(&b + &b, PaddedND::from_coefficients([2i64, 0]).unwrap());
}

#[test]
fn random_tensors_are_float_class() {
    let r = PaddedND::random(&[3, 4]);
    assert_eq!(r.shape(), &[3, 4]);
    assert_eq!(r.dtype(), DType::Float);
    assert!(r.iter().all(|c| c.as_f64().is_finite()));
}

#[test]
fn display_labels_the_nested_rendering() {
    let t = sample_tensor();
    assert_eq!(
        format!("{t}"),
        "PaddedND[[1, 2],\n         [3, 4],\n         [5, 6]]"
    );

    let v = PaddedND::from_coefficients([1i64, 2, 3]).unwrap();
    assert_eq!(format!("{v}"), "PaddedND[1, 2, 3]");

    let s = PaddedND::from_coefficients(2.5).unwrap();
    assert_eq!(format!("{s}"), "PaddedND(2.5)");
}

// A derived tensor-like type gets its own type back from the shared
// combination policies.
struct MultiPoly(PaddedND);

impl PaddedTensor for MultiPoly {
    fn from_parts(coeffs: Array<Coeff, IxDyn>, dtype: DType) -> Self {
        MultiPoly(PaddedND::from_parts(coeffs, dtype))
    }

    fn coeffs(&self) -> &Array<Coeff, IxDyn> {
        self.0.coeffs()
    }

    fn dtype(&self) -> DType {
        self.0.dtype()
    }
}

#[test]
fn combination_policies_preserve_the_left_operand_type() {
    let p = MultiPoly(PaddedND::from_coefficients([1i64, 2]).unwrap());
    let q = PaddedND::from_coefficients([3i64, 0, 4]).unwrap();

    let sum: MultiPoly = zip_padded(|a, b| a + b, &p, &q, DType::Int).unwrap();
    assert_eq!(sum.0, PaddedND::from_coefficients([4i64, 2, 4]).unwrap());

    let product: MultiPoly = zip_overlap(|a, b| a * b, &p, &q, DType::Int).unwrap();
    assert_eq!(product.0, PaddedND::from_coefficients([3i64, 0]).unwrap());
}

#[test]
fn rank_mismatched_operands_fail_in_the_policies() {
    let row = PaddedND::from_coefficients([1i64, 2]).unwrap();
    let grid = PaddedND::from_coefficients([[1i64, 2], [3, 4]]).unwrap();

    let err = zip_padded::<PaddedND, _, _>(|a, b| a + b, &row, &grid, DType::Int).unwrap_err();
    assert!(matches!(err, TensorError::RankMismatch { .. }));
}
