//! # ndfft
//!
//! N-dimensional discrete Fourier transforms built from a 1-D kernel that
//! only understands the trailing axis.
//!
//! ## Overview
//!
//! - **Complex transforms**: [`fft`], [`ifft`], [`fft2`], [`ifft2`], [`fftn`], [`ifftn`]
//! - **Real transforms** (half-spectrum convention): [`rfft`], [`irfft`],
//!   [`rfft2`], [`irfft2`], [`rfftn`], [`irfftn`]
//! - **Convolution**: [`fftconvolve`]
//!
//! Forward transforms are unnormalized; inverse transforms scale by `1/n`
//! per axis. A real forward transform maps the last axis from `n` to
//! `n/2 + 1`; the real inverse maps `m` back to `(m - 1) * 2`, so odd input
//! lengths do not round-trip through `rfft`/`irfft`.
//!
//! ## Quick Start
//!
//! ```
//! use ndfft::prelude::*;
//!
//! let signal = Tensor::from_real_vec(vec![1.0, 2.0, 3.0, 4.0], &[4]).unwrap();
//!
//! let spectrum = fft(&signal).unwrap();
//! assert_eq!(spectrum.domain(), Domain::Complex);
//!
//! let half = rfft(&signal).unwrap();
//! assert_eq!(half.shape(), &[3]);
//!
//! let back = irfft(&half).unwrap();
//! let values = back.as_real().unwrap().to_vec();
//! assert!((values[2] - 3.0).abs() < 1e-12);
//!
//! let conv = fftconvolve(&signal, &signal).unwrap();
//! assert_eq!(conv.shape(), &[7]);
//! ```
//!
//! ## Engines and kernels
//!
//! The free functions share one lazily built [`FftEngine`] backed by
//! [`RustFftKernel`]. Construct an engine explicitly to choose a different
//! [`SpectralKernel`]:
//!
//! ```
//! use ndfft::{FftEngine, NaiveDftKernel, Tensor};
//!
//! let engine = FftEngine::with_kernel(NaiveDftKernel);
//! let a = Tensor::from_real_vec(vec![1.0, 0.0, 0.0], &[3]).unwrap();
//! assert_eq!(engine.fft(&a).unwrap().shape(), &[3]);
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`FftResult`]. Arguments that are not tensors
//! fail with [`FftError::ArgumentType`]; empty tensors, wrong ranks and
//! mismatched convolution operands fail with [`FftError::ArgumentShape`].
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`Domain`], [`Direction`]
//!   and [`TransformRequest`]

mod axis;
mod convolve;
mod engine;
pub mod error;
mod request;
mod spectrum;

#[cfg(test)]
mod property_tests;

use std::sync::OnceLock;

pub use engine::FftEngine;
pub use error::{FftError, FftResult};
pub use ndfft_core::{AsTensor, DenseND, Domain, Tensor};
pub use ndfft_kernels::{KernelError, NaiveDftKernel, RustFftKernel, SpectralKernel};
pub use request::{Direction, TransformRequest};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

fn default_engine() -> &'static FftEngine {
    static ENGINE: OnceLock<FftEngine> = OnceLock::new();
    ENGINE.get_or_init(FftEngine::new)
}

/// Complex forward DFT of a rank-1 tensor. See [`FftEngine::fft`].
pub fn fft<A: AsTensor + ?Sized>(a: &A) -> FftResult<Tensor> {
    default_engine().fft(a)
}

/// Complex inverse DFT of a rank-1 tensor. See [`FftEngine::ifft`].
pub fn ifft<A: AsTensor + ?Sized>(a: &A) -> FftResult<Tensor> {
    default_engine().ifft(a)
}

/// Complex forward DFT of a rank-2 tensor. See [`FftEngine::fft2`].
pub fn fft2<A: AsTensor + ?Sized>(a: &A) -> FftResult<Tensor> {
    default_engine().fft2(a)
}

/// Complex inverse DFT of a rank-2 tensor. See [`FftEngine::ifft2`].
pub fn ifft2<A: AsTensor + ?Sized>(a: &A) -> FftResult<Tensor> {
    default_engine().ifft2(a)
}

/// Complex forward DFT over every axis. See [`FftEngine::fftn`].
pub fn fftn<A: AsTensor + ?Sized>(a: &A) -> FftResult<Tensor> {
    default_engine().fftn(a)
}

/// Complex inverse DFT over every axis. See [`FftEngine::ifftn`].
pub fn ifftn<A: AsTensor + ?Sized>(a: &A) -> FftResult<Tensor> {
    default_engine().ifftn(a)
}

/// Half-spectrum DFT of a real rank-1 tensor. See [`FftEngine::rfft`].
pub fn rfft<A: AsTensor + ?Sized>(a: &A) -> FftResult<Tensor> {
    default_engine().rfft(a)
}

/// Real signal from a rank-1 half-spectrum. See [`FftEngine::irfft`].
pub fn irfft<A: AsTensor + ?Sized>(a: &A) -> FftResult<Tensor> {
    default_engine().irfft(a)
}

/// Half-spectrum DFT of a real rank-2 tensor. See [`FftEngine::rfft2`].
pub fn rfft2<A: AsTensor + ?Sized>(a: &A) -> FftResult<Tensor> {
    default_engine().rfft2(a)
}

/// Real signal from a rank-2 half-spectrum. See [`FftEngine::irfft2`].
pub fn irfft2<A: AsTensor + ?Sized>(a: &A) -> FftResult<Tensor> {
    default_engine().irfft2(a)
}

/// Half-spectrum DFT over every axis of a real tensor. See [`FftEngine::rfftn`].
pub fn rfftn<A: AsTensor + ?Sized>(a: &A) -> FftResult<Tensor> {
    default_engine().rfftn(a)
}

/// Real signal from an N-D half-spectrum. See [`FftEngine::irfftn`].
pub fn irfftn<A: AsTensor + ?Sized>(a: &A) -> FftResult<Tensor> {
    default_engine().irfftn(a)
}

/// Full linear convolution of two tensors of equal rank. See
/// [`FftEngine::fftconvolve`].
pub fn fftconvolve<A, B>(a: &A, b: &B) -> FftResult<Tensor>
where
    A: AsTensor + ?Sized,
    B: AsTensor + ?Sized,
{
    default_engine().fftconvolve(a, b)
}

/// Prelude module for convenient imports
///
/// ```
/// use ndfft::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        fft, fft2, fftconvolve, fftn, ifft, ifft2, ifftn, irfft, irfft2, irfftn, rfft, rfft2,
        rfftn,
    };
    pub use crate::{
        AsTensor, DenseND, Direction, Domain, FftEngine, FftError, FftResult, SpectralKernel,
        Tensor,
    };
}
