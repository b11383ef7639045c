//! The trailing-axis spectral primitive
//!
//! Every operation here transforms the **last** axis of its input and leaves
//! all other axes untouched. Input views may have any strides (including
//! axis-swapped views); outputs are freshly allocated in C-contiguous order.
//!
//! Implementors only supply [`SpectralKernel::process_batch`], an unnormalized
//! in-place 1-D DFT over a buffer of back-to-back lanes. The four public
//! primitives are built on top of it:
//!
//! | Primitive | Trailing length | Output | Scaling |
//! |-----------|-----------------|--------|---------|
//! | `forward_complex` | n → n | complex | none |
//! | `inverse_complex` | n → n | complex | 1/n |
//! | `forward_real` | n → n/2+1 | complex | none |
//! | `inverse_real` | n → n | real | 1/n |

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{ArrayD, ArrayView, IxDyn};
use scirs2_core::numeric::Complex64;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Time/space domain to frequency domain (`exp(-2πi kt/n)`)
    Forward,
    /// Frequency domain back to time/space domain (`exp(+2πi kt/n)`)
    Inverse,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Inverse => write!(f, "inverse"),
        }
    }
}

/// A 1-D DFT applied independently along the trailing axis.
pub trait SpectralKernel: Send + Sync {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Unnormalized in-place DFT of every `lane_len` chunk of `buffer`.
    ///
    /// `buffer.len()` is always a non-zero multiple of `lane_len`.
    fn process_batch(&self, buffer: &mut [Complex64], lane_len: usize, direction: Direction);

    /// Complex forward transform, n → n.
    fn forward_complex(
        &self,
        input: ArrayView<'_, Complex64, IxDyn>,
    ) -> KernelResult<ArrayD<Complex64>> {
        let n = trailing_len("forward_complex", input.shape())?;
        let mut buffer: Vec<Complex64> = input.iter().cloned().collect();
        self.process_batch(&mut buffer, n, Direction::Forward);
        assemble("forward_complex", input.shape(), n, buffer)
    }

    /// Complex inverse transform, n → n, scaled by 1/n.
    fn inverse_complex(
        &self,
        input: ArrayView<'_, Complex64, IxDyn>,
    ) -> KernelResult<ArrayD<Complex64>> {
        let n = trailing_len("inverse_complex", input.shape())?;
        let mut buffer: Vec<Complex64> = input.iter().cloned().collect();
        self.process_batch(&mut buffer, n, Direction::Inverse);
        let scale = 1.0 / n as f64;
        buffer.iter_mut().for_each(|c| *c *= scale);
        assemble("inverse_complex", input.shape(), n, buffer)
    }

    /// Real forward transform, n → n/2+1 (half-spectrum).
    fn forward_real(&self, input: ArrayView<'_, f64, IxDyn>) -> KernelResult<ArrayD<Complex64>> {
        let n = trailing_len("forward_real", input.shape())?;
        let mut buffer: Vec<Complex64> = input.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        self.process_batch(&mut buffer, n, Direction::Forward);

        let half = n / 2 + 1;
        let compact: Vec<Complex64> = buffer
            .chunks_exact(n)
            .flat_map(|lane| lane[..half].iter().cloned())
            .collect();
        assemble("forward_real", input.shape(), half, compact)
    }

    /// Real inverse transform, n → n, scaled by 1/n.
    ///
    /// `input` is a full-length lane buffer. Only the first `n/2+1` entries
    /// of each lane are read; the rest are rebuilt by conjugate symmetry. The
    /// imaginary part of the DC term, and of the Nyquist term when `n` is
    /// even, is ignored.
    fn inverse_real(&self, input: ArrayView<'_, Complex64, IxDyn>) -> KernelResult<ArrayD<f64>> {
        let n = trailing_len("inverse_real", input.shape())?;
        let mut buffer: Vec<Complex64> = input.iter().cloned().collect();
        buffer
            .chunks_exact_mut(n)
            .for_each(hermitian_extend_in_place);
        self.process_batch(&mut buffer, n, Direction::Inverse);

        let scale = 1.0 / n as f64;
        let real: Vec<f64> = buffer.iter().map(|c| c.re * scale).collect();
        assemble("inverse_real", input.shape(), n, real)
    }
}

/// Length of the trailing axis, validated non-degenerate.
fn trailing_len(operation: &str, shape: &[usize]) -> KernelResult<usize> {
    let Some(&n) = shape.last() else {
        return Err(KernelError::scalar_input(operation));
    };
    if shape.iter().any(|&d| d == 0) {
        return Err(KernelError::empty_input(operation, shape));
    }
    Ok(n)
}

/// Wrap row-major lanes into an array whose trailing axis has `lane_len`.
fn assemble<T>(
    operation: &str,
    shape: &[usize],
    lane_len: usize,
    data: Vec<T>,
) -> KernelResult<ArrayD<T>> {
    let mut out_shape = shape.to_vec();
    if let Some(last) = out_shape.last_mut() {
        *last = lane_len;
    }
    ArrayD::from_shape_vec(IxDyn(&out_shape), data)
        .map_err(|e| KernelError::operation_error(operation, e.to_string()))
}

/// Overwrite the negative-frequency half of `lane` with the conjugate mirror
/// of its positive half.
pub(crate) fn hermitian_extend_in_place(lane: &mut [Complex64]) {
    let n = lane.len();
    if n == 0 {
        return;
    }
    lane[0].im = 0.0;
    let half = n / 2 + 1;
    for k in half..n {
        lane[k] = lane[n - k].conj();
    }
    if n % 2 == 0 {
        lane[n / 2].im = 0.0;
    }
}
