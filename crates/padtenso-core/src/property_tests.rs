//! Property-based tests for padded tensor operations
//!
//! This module uses proptest to verify the algebraic laws of the padded
//! coefficient space across randomly generated shapes and contents.

#[cfg(test)]
mod tests {
    use crate::{Coeff, DType, PaddedND};
    use proptest::prelude::*;

    // Strategy for generating valid tensor shapes (1-3D, small sizes)
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 1..=3)
    }

    // Integer tensor with the given shape distribution
    fn tensor_strategy() -> impl Strategy<Value = PaddedND> {
        shape_strategy()
            .prop_flat_map(|shape| {
                let total: usize = shape.iter().product();
                (prop::collection::vec(-50i64..50, total), Just(shape))
            })
            .prop_map(|(data, shape)| PaddedND::from_vec(data, &shape).unwrap())
    }

    // Pair of same-rank tensors (shapes may differ per axis)
    fn tensor_pair_strategy() -> impl Strategy<Value = (PaddedND, PaddedND)> {
        (1usize..=3).prop_flat_map(|rank| {
            let one = move || {
                prop::collection::vec(1usize..6, rank).prop_flat_map(|shape| {
                    let total: usize = shape.iter().product();
                    (prop::collection::vec(-50i64..50, total), Just(shape))
                        .prop_map(|(data, shape)| PaddedND::from_vec(data, &shape).unwrap())
                })
            };
            (one(), one())
        })
    }

    #[test]
    fn test_proptest_smoke() {
        // Simple smoke test to verify proptest is working
        let t = PaddedND::zeros(&[2, 3], DType::Int);
        assert_eq!(t.shape(), &[2, 3]);
    }

    proptest! {
        #[test]
        fn prop_out_of_range_reads_are_zero(t in tensor_strategy()) {
            let beyond: Vec<isize> = t.shape().iter().map(|&n| n as isize + 7).collect();
            prop_assert_eq!(t.get(&beyond).unwrap(), Coeff::Int(0));

            let below: Vec<isize> = t.shape().iter().map(|&n| -(n as isize) - 1).collect();
            prop_assert_eq!(t.get(&below).unwrap(), Coeff::Int(0));
        }

        #[test]
        fn prop_shift_right_then_left_roundtrips(
            t in tensor_strategy(),
            seed in prop::collection::vec(0usize..4, 3)
        ) {
            let offsets: Vec<usize> = seed.iter().take(t.rank()).copied().collect();
            let padded = t.shift_right(&offsets).unwrap();
            prop_assert_eq!(padded.shift_left(&offsets).unwrap(), t);
        }

        #[test]
        fn prop_shift_left_loses_leading_entries(t in tensor_strategy()) {
            // The reverse composition is generally lossy: the entries in
            // front of the shift point cannot come back.
            let offsets = vec![1; t.rank()];
            let restored = t
                .shift_left(&offsets)
                .unwrap()
                .shift_right(&offsets)
                .unwrap();
            prop_assert_eq!(restored.shape(), t.shape());
            let origin = vec![0isize; t.rank()];
            prop_assert_eq!(restored.get(&origin).unwrap(), Coeff::Int(0));
        }

        #[test]
        fn prop_trim_is_idempotent(t in tensor_strategy()) {
            let once = t.trim();
            prop_assert_eq!(once.trim(), once);
        }

        #[test]
        fn prop_trimmed_reads_match_original(t in tensor_strategy()) {
            // Trimming only discards near-zero coefficients, so padded
            // reads are unchanged everywhere.
            let trimmed = t.trim();
            let shape = t.shape_vec();
            let total: usize = shape.iter().product();
            for flat in 0..total {
                let mut idx = vec![0isize; shape.len()];
                let mut rem = flat;
                for d in (0..shape.len()).rev() {
                    idx[d] = (rem % shape[d]) as isize;
                    rem /= shape[d];
                }
                prop_assert_eq!(trimmed.get(&idx).unwrap(), t.get(&idx).unwrap());
            }
        }

        #[test]
        fn prop_addition_commutes((a, b) in tensor_pair_strategy()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn prop_addition_is_associative((a, b) in tensor_pair_strategy()) {
            // A third same-rank operand with yet another shape.
            let c = a.shift_right(&vec![1; a.rank()]).unwrap();
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn prop_additive_inverse_trims_to_nothing(t in tensor_strategy()) {
            let cancelled = (&t + &(-1 * &t)).trim();
            let expected_shape = vec![0; t.rank()];
            prop_assert_eq!(cancelled.shape(), expected_shape.as_slice());
        }

        #[test]
        fn prop_scalar_division_yields_floats(t in tensor_strategy()) {
            let halved = &t / 2;
            prop_assert_eq!(halved.dtype(), DType::Float);
            for (c, orig) in halved.iter().zip(t.iter()) {
                prop_assert_eq!(*c, Coeff::Float(orig.as_f64() / 2.0));
            }
        }

        #[test]
        fn prop_integer_product_stays_integer((a, b) in tensor_pair_strategy()) {
            let product = &a * &b;
            prop_assert_eq!(product.dtype(), DType::Int);
        }

        #[test]
        fn prop_scalar_multiplication_commutes(t in tensor_strategy()) {
            prop_assert_eq!(3 * &t, &t * 3);
        }
    }
}
