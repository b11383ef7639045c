//! Half-spectrum expansion ahead of the real inverse step

use crate::engine::FftEngine;
use crate::error::{FftError, FftResult};
use ndfft_core::DenseND;
use ndfft_kernels::SpectralKernel;
use scirs2_core::numeric::Complex64;

/// Length of the real signal recovered from a half-spectrum of length `m`.
pub(crate) fn expanded_len(m: usize) -> usize {
    m.saturating_sub(1) * 2
}

impl<K: SpectralKernel> FftEngine<K> {
    /// Zero-filled buffer with `axis` grown from `m` to `(m - 1) * 2`, holding
    /// `half` in its first `m` positions.
    ///
    /// Conjugate symmetry is neither checked nor enforced here; the kernel's
    /// real inverse only reads the first half of each lane.
    pub(crate) fn expand_half_spectrum(
        &self,
        operation: &'static str,
        half: &DenseND<Complex64>,
        axis: usize,
    ) -> FftResult<DenseND<Complex64>> {
        let rank = half.rank();
        if axis >= rank {
            return Err(FftError::Dimension { axis, rank });
        }
        let m = half.shape()[axis];
        let n = expanded_len(m);
        if n == 0 {
            return Err(FftError::argument_shape(
                operation,
                format!(
                    "half-spectrum axis {} has length {}, at least 2 is required",
                    axis, m
                ),
            ));
        }

        let mut shape = half.shape_vec();
        shape[axis] = n;
        log::trace!("{}: expanding axis {} from {} to {}", operation, axis, m, n);
        Ok(half.zero_padded(&shape)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_expanded_len() {
        assert_eq!(expanded_len(1), 0);
        assert_eq!(expanded_len(2), 2);
        assert_eq!(expanded_len(3), 4);
        assert_eq!(expanded_len(6), 10);
    }

    #[test]
    fn test_expand_copies_prefix_and_zero_fills() {
        let engine = FftEngine::new();
        let half = DenseND::from_vec(
            vec![c(1.0, 0.0), c(2.0, 1.0), c(3.0, -1.0), c(4.0, 0.0), c(5.0, 2.0), c(6.0, 0.0)],
            &[2, 3],
        )
        .unwrap();

        let full = engine.expand_half_spectrum("irfft2", &half, 1).unwrap();
        assert_eq!(full.shape(), &[2, 4]);
        assert_eq!(full[&[0, 1][..]], c(2.0, 1.0));
        assert_eq!(full[&[1, 2][..]], c(6.0, 0.0));
        assert_eq!(full[&[0, 3][..]], c(0.0, 0.0));
        assert_eq!(full[&[1, 3][..]], c(0.0, 0.0));
    }

    #[test]
    fn test_expand_other_axes_untouched() {
        let engine = FftEngine::new();
        let half = DenseND::<Complex64>::ones(&[5, 2, 4]);
        let full = engine.expand_half_spectrum("irfftn", &half, 2).unwrap();
        assert_eq!(full.shape(), &[5, 2, 6]);
    }

    #[test]
    fn test_expand_rejects_length_one() {
        let engine = FftEngine::new();
        let half = DenseND::<Complex64>::ones(&[3, 1]);
        let err = engine.expand_half_spectrum("irfft2", &half, 1).unwrap_err();
        assert!(matches!(
            err,
            FftError::ArgumentShape {
                operation: "irfft2",
                ..
            }
        ));
    }

    #[test]
    fn test_expand_rejects_bad_axis() {
        let engine = FftEngine::new();
        let half = DenseND::<Complex64>::ones(&[3]);
        let err = engine.expand_half_spectrum("irfft", &half, 1).unwrap_err();
        assert_eq!(err, FftError::Dimension { axis: 1, rank: 1 });
    }
}
