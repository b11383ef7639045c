//! Error types for transform and convolution operations
//!
//! Every public operation returns [`FftResult`]. Errors are precondition
//! violations detected before any transform work starts; none are transient.
//!
//! # Examples
//!
//! ```
//! use ndfft::{fft, FftError};
//!
//! let err = fft(&vec![1.0f64, 2.0, 3.0]).unwrap_err();
//! assert!(matches!(err, FftError::ArgumentType { .. }));
//! ```

use ndfft_kernels::KernelError;
use thiserror::Error;

/// Errors raised by ndfft operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FftError {
    /// The argument is not a tensor, or its element domain is not accepted
    #[error("{operation}: expected {expected}, got {found}")]
    ArgumentType {
        operation: &'static str,
        expected: &'static str,
        found: String,
    },

    /// The tensor's shape is not accepted (empty, wrong rank, mismatched operands)
    #[error("{operation}: {reason}")]
    ArgumentShape {
        operation: &'static str,
        reason: String,
    },

    /// Axis index outside `[0, rank)`
    #[error("axis {axis} is out of range for a rank-{rank} tensor")]
    Dimension { axis: usize, rank: usize },

    /// Failure inside the 1-D spectral kernel
    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),

    /// Failure inside a tensor container operation
    #[error("Tensor error: {0}")]
    Tensor(String),
}

/// Result type for ndfft operations
pub type FftResult<T> = Result<T, FftError>;

impl FftError {
    /// Create an argument type error
    pub fn argument_type(
        operation: &'static str,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        FftError::ArgumentType {
            operation,
            expected,
            found: found.into(),
        }
    }

    /// Create an argument shape error
    pub fn argument_shape(operation: &'static str, reason: impl Into<String>) -> Self {
        FftError::ArgumentShape {
            operation,
            reason: reason.into(),
        }
    }
}

impl From<anyhow::Error> for FftError {
    fn from(err: anyhow::Error) -> Self {
        FftError::Tensor(format!("{:#}", err))
    }
}
