//! Integration tests for ndfft-kernels
//!
//! The fast kernel is checked against the direct DFT on strided and
//! multi-lane inputs.

use ndfft_kernels::{NaiveDftKernel, RustFftKernel, SpectralKernel};
use proptest::prelude::*;
use scirs2_core::ndarray_ext::{ArrayD, IxDyn};
use scirs2_core::numeric::Complex64;

fn signal(shape: &[usize], seed: u64) -> ArrayD<Complex64> {
    let n: usize = shape.iter().product();
    let data = (0..n)
        .map(|i| {
            let x = (i as u64).wrapping_mul(6364136223846793005).wrapping_add(seed) % 1000;
            let y = (i as u64 * 31 + seed * 17) % 997;
            Complex64::new(x as f64 / 500.0 - 1.0, y as f64 / 498.5 - 1.0)
        })
        .collect();
    ArrayD::from_shape_vec(IxDyn(shape), data).unwrap()
}

fn l1(a: &ArrayD<Complex64>, b: &ArrayD<Complex64>) -> f64 {
    assert_eq!(a.shape(), b.shape());
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).norm()).sum()
}

#[test]
fn test_fast_matches_naive_on_swapped_view() {
    let fast = RustFftKernel::new();
    let naive = NaiveDftKernel;
    let input = signal(&[3, 5, 4], 7);

    let mut view = input.view();
    view.swap_axes(0, 2);

    let a = fast.forward_complex(view.clone()).unwrap();
    let b = naive.forward_complex(view).unwrap();
    assert_eq!(a.shape(), &[4, 5, 3]);
    assert!(l1(&a, &b) < 1e-9);
}

#[test]
fn test_real_pair_reconstructs_signal() {
    let kernel = RustFftKernel::new();
    let complex = signal(&[2, 3, 6], 11);
    let real = complex.mapv(|c| c.re);

    let half = kernel.forward_real(real.view()).unwrap();
    assert_eq!(half.shape(), &[2, 3, 4]);

    let mut full = ArrayD::from_elem(IxDyn(&[2, 3, 6]), Complex64::new(0.0, 0.0));
    for (idx, v) in half.indexed_iter() {
        full[idx] = *v;
    }
    let back = kernel.inverse_real(full.view()).unwrap();
    let err: f64 = back.iter().zip(real.iter()).map(|(a, b)| (a - b).abs()).sum();
    assert!(err < 1e-10);
}

#[test]
fn test_kernel_names() {
    assert_eq!(RustFftKernel::new().name(), "rustfft");
    assert_eq!(NaiveDftKernel.name(), "naive_dft");
}

proptest! {
    #[test]
    fn prop_fast_matches_naive(
        shape in prop::collection::vec(1usize..7, 1..=3),
        seed in 0u64..1000,
    ) {
        let input = signal(&shape, seed);
        let fast = RustFftKernel::new();
        let naive = NaiveDftKernel;

        let f = fast.forward_complex(input.view()).unwrap();
        let g = naive.forward_complex(input.view()).unwrap();
        prop_assert!(l1(&f, &g) < 1e-9);

        let fi = fast.inverse_complex(input.view()).unwrap();
        let gi = naive.inverse_complex(input.view()).unwrap();
        prop_assert!(l1(&fi, &gi) < 1e-9);
    }

    #[test]
    fn prop_forward_real_is_prefix_of_forward_complex(
        shape in prop::collection::vec(1usize..9, 1..=3),
        seed in 0u64..1000,
    ) {
        let kernel = RustFftKernel::new();
        let real = signal(&shape, seed).mapv(|c| c.re);
        let complex = real.mapv(|x| Complex64::new(x, 0.0));

        let half = kernel.forward_real(real.view()).unwrap();
        let full = kernel.forward_complex(complex.view()).unwrap();
        let n = *shape.last().unwrap();
        prop_assert_eq!(half.shape()[shape.len() - 1], n / 2 + 1);

        for (idx, v) in half.indexed_iter() {
            let w = full[idx];
            prop_assert!((*v - w).norm() < 1e-9);
        }
    }
}
