//! Direct O(n²) DFT kernel

use crate::kernel::{Direction, SpectralKernel};
use scirs2_core::numeric::Complex64;
use std::f64::consts::PI;

/// Reference kernel evaluating the DFT sum directly.
///
/// Quadratic in the lane length. Useful as an independent oracle for the
/// fast kernel and for tiny lanes where planning dominates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveDftKernel;

impl SpectralKernel for NaiveDftKernel {
    fn name(&self) -> &'static str {
        "naive_dft"
    }

    fn process_batch(&self, buffer: &mut [Complex64], lane_len: usize, direction: Direction) {
        if lane_len == 0 {
            return;
        }
        let sign = match direction {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        };
        let mut scratch = vec![Complex64::new(0.0, 0.0); lane_len];
        for lane in buffer.chunks_exact_mut(lane_len) {
            for (k, out) in scratch.iter_mut().enumerate() {
                *out = lane
                    .iter()
                    .enumerate()
                    .map(|(t, &value)| {
                        let angle = sign * 2.0 * PI * ((k * t) % lane_len) as f64 / lane_len as f64;
                        value * Complex64::new(angle.cos(), angle.sin())
                    })
                    .sum();
            }
            lane.copy_from_slice(&scratch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_matches_closed_form() {
        let mut buffer: Vec<Complex64> = [1.0, 2.0, 3.0, 4.0]
            .iter()
            .map(|&x| Complex64::new(x, 0.0))
            .collect();
        NaiveDftKernel.process_batch(&mut buffer, 4, Direction::Forward);
        let expected = [
            Complex64::new(10.0, 0.0),
            Complex64::new(-2.0, 2.0),
            Complex64::new(-2.0, 0.0),
            Complex64::new(-2.0, -2.0),
        ];
        for (got, want) in buffer.iter().zip(expected.iter()) {
            assert!((got - want).norm() < 1e-12);
        }
    }

    #[test]
    fn test_naive_batches_lanes_independently() {
        let mut buffer = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        ];
        NaiveDftKernel.process_batch(&mut buffer, 2, Direction::Forward);
        assert!((buffer[0] - Complex64::new(1.0, 0.0)).norm() < 1e-12);
        assert!((buffer[1] - Complex64::new(1.0, 0.0)).norm() < 1e-12);
        assert!((buffer[2] - Complex64::new(1.0, 0.0)).norm() < 1e-12);
        assert!((buffer[3] - Complex64::new(-1.0, 0.0)).norm() < 1e-12);
    }
}
