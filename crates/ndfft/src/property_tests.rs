//! Property-based tests for the transform engine
//!
//! Round-trips, axis-order independence, the half-spectrum prefix relation
//! and convolution shapes, checked over random shapes of rank 1-3.

#[cfg(test)]
mod tests {
    use crate::request::{Direction, TransformRequest};
    use crate::{FftEngine, NaiveDftKernel, Tensor};
    use proptest::prelude::*;
    use scirs2_core::numeric::Complex64;

    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..7, 1..=3)
    }

    fn real_tensor(shape: Vec<usize>) -> impl Strategy<Value = Tensor> {
        let n: usize = shape.iter().product();
        prop::collection::vec(-10.0f64..10.0, n)
            .prop_map(move |data| Tensor::from_real_vec(data, &shape).unwrap())
    }

    fn complex_tensor(shape: Vec<usize>) -> impl Strategy<Value = Tensor> {
        let n: usize = shape.iter().product();
        prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), n).prop_map(move |data| {
            let data = data.into_iter().map(|(re, im)| Complex64::new(re, im)).collect();
            Tensor::from_complex_vec(data, &shape).unwrap()
        })
    }

    fn l1(a: &Tensor, b: &Tensor) -> f64 {
        assert_eq!(a.shape(), b.shape());
        a.to_complex()
            .iter()
            .zip(b.to_complex().iter())
            .map(|(x, y)| (x - y).norm())
            .sum()
    }

    proptest! {
        #[test]
        fn prop_fftn_roundtrip(t in shape_strategy().prop_flat_map(complex_tensor)) {
            let engine = FftEngine::new();
            let back = engine.ifftn(&engine.fftn(&t).unwrap()).unwrap();
            prop_assert!(l1(&back, &t) < 1e-10);
        }

        #[test]
        fn prop_fft_roundtrip_rank1(t in (1usize..33).prop_flat_map(|n| complex_tensor(vec![n]))) {
            let engine = FftEngine::new();
            let back = engine.ifft(&engine.fft(&t).unwrap()).unwrap();
            prop_assert!(l1(&back, &t) < 1e-10);
        }

        #[test]
        fn prop_rfftn_roundtrip_even_last_axis(
            t in (prop::collection::vec(1usize..6, 0..=2), 1usize..5)
                .prop_flat_map(|(mut shape, half)| {
                    shape.push(half * 2);
                    real_tensor(shape)
                })
        ) {
            let engine = FftEngine::new();
            let back = engine.irfftn(&engine.rfftn(&t).unwrap()).unwrap();
            prop_assert_eq!(back.shape(), t.shape());
            prop_assert!(l1(&back, &t) < 1e-10);
        }

        #[test]
        fn prop_fftn_axis_order_independent(t in shape_strategy().prop_flat_map(real_tensor)) {
            let engine = FftEngine::new();
            let expected = engine.fftn(&t).unwrap();

            let ascending = (0..t.rank()).try_fold(t.clone(), |acc, axis| {
                engine.transform_axis(&acc, TransformRequest::complex(axis, Direction::Forward))
            }).unwrap();
            prop_assert!(l1(&ascending, &expected) < 1e-9);
        }

        #[test]
        fn prop_ifftn_axis_order_independent(t in shape_strategy().prop_flat_map(complex_tensor)) {
            let engine = FftEngine::new();
            let expected = engine.ifftn(&t).unwrap();

            let descending = (0..t.rank()).rev().try_fold(t.clone(), |acc, axis| {
                engine.transform_axis(&acc, TransformRequest::complex(axis, Direction::Inverse))
            }).unwrap();
            prop_assert!(l1(&descending, &expected) < 1e-10);
        }

        #[test]
        fn prop_rfftn_is_prefix_of_fftn(t in shape_strategy().prop_flat_map(real_tensor)) {
            let engine = FftEngine::new();
            let half = engine.rfftn(&t).unwrap();
            let full = engine.fftn(&t).unwrap();

            let last = t.rank() - 1;
            let n = t.shape()[last];
            prop_assert_eq!(half.shape()[last], n / 2 + 1);

            let ranges: Vec<_> = half.shape().iter().map(|&len| 0..len).collect();
            let prefix = Tensor::Complex(full.to_complex().slice_region(&ranges).unwrap());
            prop_assert!(l1(&half, &prefix) < 1e-9);
        }

        #[test]
        fn prop_fftconvolve_shape(
            (a, b) in (1usize..=3).prop_flat_map(|rank| (
                prop::collection::vec(1usize..5, rank).prop_flat_map(real_tensor),
                prop::collection::vec(1usize..5, rank).prop_flat_map(real_tensor),
            ))
        ) {
            let engine = FftEngine::new();
            let c = engine.fftconvolve(&a, &b).unwrap();
            let expected: Vec<usize> = a.shape().iter().zip(b.shape()).map(|(x, y)| x + y - 1).collect();
            prop_assert_eq!(c.shape(), &expected[..]);
        }

        #[test]
        fn prop_fftconvolve_commutes(
            (a, b) in (1usize..=2).prop_flat_map(|rank| (
                prop::collection::vec(1usize..5, rank).prop_flat_map(real_tensor),
                prop::collection::vec(1usize..5, rank).prop_flat_map(complex_tensor),
            ))
        ) {
            let engine = FftEngine::new();
            let ab = engine.fftconvolve(&a, &b).unwrap();
            let ba = engine.fftconvolve(&b, &a).unwrap();
            prop_assert!(l1(&ab, &ba) < 1e-9);
        }

        #[test]
        fn prop_naive_kernel_agrees(t in shape_strategy().prop_flat_map(complex_tensor)) {
            let fast = FftEngine::new();
            let naive = FftEngine::with_kernel(NaiveDftKernel);
            let a = fast.fftn(&t).unwrap();
            let b = naive.fftn(&t).unwrap();
            prop_assert!(l1(&a, &b) < 1e-8);
        }
    }
}
