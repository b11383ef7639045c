//! # ndfft-core
//!
//! Dense N-dimensional tensor container used by the ndfft transform engine.
//!
//! ## Overview
//!
//! - [`DenseND<T>`]: owned dense array over scirs2_core's ndarray, with
//!   zero-copy axis swaps, sub-region read/write, origin padding and
//!   element-wise arithmetic
//! - [`Tensor`]: a `DenseND` tagged with its element [`Domain`]
//!   (`f64` or `Complex64`)
//! - [`AsTensor`]: the capability check transform entry points use to
//!   recognize tensor arguments
//!
//! ## Quick Start
//!
//! ```
//! use ndfft_core::{DenseND, Domain, Tensor};
//!
//! let data = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
//!
//! // Zero-copy transpose of the two axes
//! let swapped = data.swapped_axes_view(0, 1).unwrap();
//! assert_eq!(swapped.shape(), &[3, 2]);
//!
//! // Embed into a larger zero-filled buffer
//! let padded = data.zero_padded(&[3, 5]).unwrap();
//! assert_eq!(padded.shape(), &[3, 5]);
//!
//! let tensor = Tensor::from(data);
//! assert_eq!(tensor.domain(), Domain::Real);
//! ```
//!
//! ## Error Handling
//!
//! Container operations return `anyhow::Result`; they fail on shape
//! mismatches, out-of-range axes and out-of-bounds regions.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`Domain`]

pub mod dense;
pub mod types;


pub use types::{AsTensor, Axis, DenseND, Domain, Rank, Tensor};
