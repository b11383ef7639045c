//! # ndfft-kernels
//!
//! One-dimensional spectral primitives for the ndfft engine.
//!
//! Every primitive transforms only the **trailing** axis of an
//! N-dimensional view. Generalizing to other axes (and to several axes) is
//! the engine's job; see the `ndfft` crate.
//!
//! ## Kernels
//!
//! - [`RustFftKernel`] - `rustfft` plans with a shared plan cache (default)
//! - [`NaiveDftKernel`] - direct O(n²) evaluation, used as a test oracle
//!
//! Custom kernels implement [`SpectralKernel::process_batch`] and inherit the
//! four trailing-axis primitives.
//!
//! ## Quick Start
//!
//! ```
//! use ndfft_kernels::{RustFftKernel, SpectralKernel};
//! use scirs2_core::ndarray_ext::{ArrayD, IxDyn};
//! use scirs2_core::numeric::Complex64;
//!
//! let kernel = RustFftKernel::new();
//! let signal = ArrayD::from_shape_vec(IxDyn(&[2, 4]), vec![1.0, 2.0, 3.0, 4.0, 0.0, 1.0, 0.0, -1.0]).unwrap();
//!
//! let half = kernel.forward_real(signal.view()).unwrap();
//! assert_eq!(half.shape(), &[2, 3]);
//!
//! // The real inverse expects a full-length buffer; only the first half is read
//! let mut full = ArrayD::from_elem(IxDyn(&[2, 4]), Complex64::new(0.0, 0.0));
//! for i in 0..2 {
//!     for k in 0..3 {
//!         full[IxDyn(&[i, k])] = half[IxDyn(&[i, k])];
//!     }
//! }
//! let back = kernel.inverse_real(full.view()).unwrap();
//! assert!((back[IxDyn(&[0, 2])] - 3.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod kernel;
pub mod naive;
pub mod rustfft_kernel;

pub use error::{KernelError, KernelResult};
pub use kernel::{Direction, SpectralKernel};
pub use naive::NaiveDftKernel;
pub use rustfft_kernel::RustFftKernel;
