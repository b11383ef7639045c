//! The transform engine and its N-dimensional composition rules
//!
//! Every N-D operation is a sequence of per-axis steps:
//!
//! | Operation | Steps |
//! |-----------|-------|
//! | `fftn` | complex forward on axes `last, last-1, ..., 0` |
//! | `ifftn` | complex inverse on axes `0, 1, ..., last` |
//! | `rfftn` | real forward on `last`, then complex forward on `last-1, ..., 0` |
//! | `irfftn` | complex inverse on `0, ..., last-1`, expand `last`, real inverse on `last` |
//!
//! Each step consumes the previous step's output; the caller's tensor is
//! never written.

use crate::error::{FftError, FftResult};
use crate::request::{Direction, TransformRequest};
use crate::spectrum::expanded_len;
use ndfft_core::{AsTensor, Domain, Tensor};
use ndfft_kernels::{RustFftKernel, SpectralKernel};
use std::borrow::Cow;
use std::fmt;

/// N-dimensional DFT service.
///
/// Holds the 1-D spectral kernel and nothing else; every operation is a pure
/// function of its arguments. Tensors of any rank are accepted by the `*n`
/// operations; the fixed-arity operations check rank first.
///
/// # Examples
///
/// ```
/// use ndfft::{FftEngine, Tensor};
///
/// let engine = FftEngine::new();
/// let a = Tensor::from_real_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
///
/// let spectrum = engine.rfft2(&a).unwrap();
/// assert_eq!(spectrum.shape(), &[2, 2]);
///
/// let full = engine.fftn(&a).unwrap();
/// assert_eq!(full.shape(), &[2, 3]);
/// ```
pub struct FftEngine<K = RustFftKernel> {
    kernel: K,
}

impl FftEngine<RustFftKernel> {
    /// Engine backed by [`RustFftKernel`].
    pub fn new() -> Self {
        Self::with_kernel(RustFftKernel::new())
    }
}

impl Default for FftEngine<RustFftKernel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SpectralKernel> fmt::Debug for FftEngine<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FftEngine")
            .field("kernel", &self.kernel.name())
            .finish()
    }
}

/// Resolve `arg` to a tensor and check the preconditions shared by every
/// operation: it is a tensor, it has at least one axis, it is non-empty, and
/// (for fixed-arity operations) it has the required rank.
pub(crate) fn accept<'a, A>(
    operation: &'static str,
    arg: &'a A,
    rank: Option<usize>,
) -> FftResult<&'a Tensor>
where
    A: AsTensor + ?Sized,
{
    let tensor = arg
        .as_tensor()
        .ok_or_else(|| FftError::argument_type(operation, "a tensor", arg.type_label()))?;

    if tensor.rank() == 0 {
        return Err(FftError::argument_shape(
            operation,
            "rank-0 input has no axis to transform",
        ));
    }
    if tensor.is_empty() {
        return Err(FftError::argument_shape(
            operation,
            format!("empty input (shape {:?})", tensor.shape()),
        ));
    }
    if let Some(expected) = rank {
        if tensor.rank() != expected {
            return Err(FftError::argument_shape(
                operation,
                format!("expected rank {}, got rank {}", expected, tensor.rank()),
            ));
        }
    }

    log::debug!(
        "{}: {} input of shape {:?}",
        operation,
        tensor.domain(),
        tensor.shape()
    );
    Ok(tensor)
}

impl<K: SpectralKernel> FftEngine<K> {
    /// Engine backed by a caller-supplied kernel.
    pub fn with_kernel(kernel: K) -> Self {
        Self { kernel }
    }

    /// The 1-D spectral kernel in use.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Complex forward DFT of a rank-1 tensor.
    ///
    /// # Errors
    ///
    /// `ArgumentType` if `a` is not a tensor, `ArgumentShape` if it is empty
    /// or not rank 1.
    pub fn fft<A: AsTensor + ?Sized>(&self, a: &A) -> FftResult<Tensor> {
        let tensor = accept("fft", a, Some(1))?;
        self.transform_axis(tensor, TransformRequest::complex(0, Direction::Forward))
    }

    /// Complex inverse DFT of a rank-1 tensor, scaled by 1/n.
    pub fn ifft<A: AsTensor + ?Sized>(&self, a: &A) -> FftResult<Tensor> {
        let tensor = accept("ifft", a, Some(1))?;
        self.transform_axis(tensor, TransformRequest::complex(0, Direction::Inverse))
    }

    /// Complex forward DFT of a rank-2 tensor.
    pub fn fft2<A: AsTensor + ?Sized>(&self, a: &A) -> FftResult<Tensor> {
        let tensor = accept("fft2", a, Some(2))?;
        self.forward_all(tensor)
    }

    /// Complex inverse DFT of a rank-2 tensor.
    pub fn ifft2<A: AsTensor + ?Sized>(&self, a: &A) -> FftResult<Tensor> {
        let tensor = accept("ifft2", a, Some(2))?;
        self.inverse_all(tensor)
    }

    /// Complex forward DFT over every axis.
    pub fn fftn<A: AsTensor + ?Sized>(&self, a: &A) -> FftResult<Tensor> {
        let tensor = accept("fftn", a, None)?;
        self.forward_all(tensor)
    }

    /// Complex inverse DFT over every axis.
    pub fn ifftn<A: AsTensor + ?Sized>(&self, a: &A) -> FftResult<Tensor> {
        let tensor = accept("ifftn", a, None)?;
        self.inverse_all(tensor)
    }

    /// Half-spectrum DFT of a real rank-1 tensor: length `n → n/2+1`.
    ///
    /// # Errors
    ///
    /// In addition to the common checks, `ArgumentType` if `a` is complex.
    pub fn rfft<A: AsTensor + ?Sized>(&self, a: &A) -> FftResult<Tensor> {
        let tensor = accept("rfft", a, Some(1))?;
        self.real_forward_all("rfft", tensor)
    }

    /// Real signal from a rank-1 half-spectrum: length `m → (m-1)*2`.
    ///
    /// The spectrum is assumed to be the output of a real forward transform;
    /// other inputs produce a signal whose spectrum differs from the input.
    ///
    /// # Errors
    ///
    /// In addition to the common checks, `ArgumentShape` if `m < 2`.
    pub fn irfft<A: AsTensor + ?Sized>(&self, a: &A) -> FftResult<Tensor> {
        let tensor = accept("irfft", a, Some(1))?;
        self.real_inverse_all("irfft", tensor)
    }

    /// Half-spectrum DFT of a real rank-2 tensor.
    pub fn rfft2<A: AsTensor + ?Sized>(&self, a: &A) -> FftResult<Tensor> {
        let tensor = accept("rfft2", a, Some(2))?;
        self.real_forward_all("rfft2", tensor)
    }

    /// Real signal from a rank-2 half-spectrum.
    pub fn irfft2<A: AsTensor + ?Sized>(&self, a: &A) -> FftResult<Tensor> {
        let tensor = accept("irfft2", a, Some(2))?;
        self.real_inverse_all("irfft2", tensor)
    }

    /// Half-spectrum DFT over every axis of a real tensor; the last axis is
    /// the halved one.
    pub fn rfftn<A: AsTensor + ?Sized>(&self, a: &A) -> FftResult<Tensor> {
        let tensor = accept("rfftn", a, None)?;
        self.real_forward_all("rfftn", tensor)
    }

    /// Real signal from a half-spectrum over every axis; the last axis is the
    /// expanded one.
    pub fn irfftn<A: AsTensor + ?Sized>(&self, a: &A) -> FftResult<Tensor> {
        let tensor = accept("irfftn", a, None)?;
        self.real_inverse_all("irfftn", tensor)
    }

    pub(crate) fn forward_all(&self, tensor: &Tensor) -> FftResult<Tensor> {
        let last = tensor.rank() - 1;
        let first = self.transform_axis(tensor, TransformRequest::complex(last, Direction::Forward))?;
        if last == 0 {
            return Ok(first);
        }
        (0..last).rev().try_fold(first, |acc, axis| {
            self.transform_axis(&acc, TransformRequest::complex(axis, Direction::Forward))
        })
    }

    pub(crate) fn inverse_all(&self, tensor: &Tensor) -> FftResult<Tensor> {
        let last = tensor.rank() - 1;
        let first = self.transform_axis(tensor, TransformRequest::complex(0, Direction::Inverse))?;
        if last == 0 {
            return Ok(first);
        }
        (1..=last).try_fold(first, |acc, axis| {
            self.transform_axis(&acc, TransformRequest::complex(axis, Direction::Inverse))
        })
    }

    fn real_forward_all(&self, operation: &'static str, tensor: &Tensor) -> FftResult<Tensor> {
        if tensor.domain() != Domain::Real {
            return Err(FftError::argument_type(
                operation,
                "a real tensor",
                "a complex tensor",
            ));
        }
        let last = tensor.rank() - 1;
        let half = self.transform_axis(tensor, TransformRequest::real(last, Direction::Forward))?;
        if last == 0 {
            return Ok(half);
        }
        (0..last).rev().try_fold(half, |acc, axis| {
            self.transform_axis(&acc, TransformRequest::complex(axis, Direction::Forward))
        })
    }

    fn real_inverse_all(&self, operation: &'static str, tensor: &Tensor) -> FftResult<Tensor> {
        let last = tensor.rank() - 1;
        let m = tensor.shape()[last];
        if expanded_len(m) == 0 {
            return Err(FftError::argument_shape(
                operation,
                format!("last axis has length {}, at least 2 is required", m),
            ));
        }

        let spectrum: Cow<'_, Tensor> = if last == 0 {
            Cow::Borrowed(tensor)
        } else {
            let first =
                self.transform_axis(tensor, TransformRequest::complex(0, Direction::Inverse))?;
            Cow::Owned((1..last).try_fold(first, |acc, axis| {
                self.transform_axis(&acc, TransformRequest::complex(axis, Direction::Inverse))
            })?)
        };

        let half = spectrum.to_complex();
        let full = self.expand_half_spectrum(operation, &half, last)?;
        self.transform_axis(
            &Tensor::Complex(full),
            TransformRequest::real(last, Direction::Inverse),
        )
    }
}
