//! Error types for spectral kernel operations

use std::fmt;

/// Error type for spectral kernel operations
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Rank-0 input has no trailing axis to transform
    ScalarInput { operation: String },

    /// Input holds no elements
    EmptyInput {
        operation: String,
        shape: Vec<usize>,
    },

    /// Generic operation error with context
    OperationError { operation: String, message: String },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::ScalarInput { operation } => write!(
                f,
                "{}: rank-0 input has no trailing axis to transform",
                operation
            ),

            KernelError::EmptyInput { operation, shape } => write!(
                f,
                "{}: empty input not allowed (shape {:?})",
                operation, shape
            ),

            KernelError::OperationError { operation, message } => {
                write!(f, "{}: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for KernelError {}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

impl KernelError {
    /// Create a scalar input error
    pub fn scalar_input(operation: impl Into<String>) -> Self {
        KernelError::ScalarInput {
            operation: operation.into(),
        }
    }

    /// Create an empty input error
    pub fn empty_input(operation: impl Into<String>, shape: &[usize]) -> Self {
        KernelError::EmptyInput {
            operation: operation.into(),
            shape: shape.to_vec(),
        }
    }

    /// Create a generic operation error
    pub fn operation_error(operation: impl Into<String>, message: impl Into<String>) -> Self {
        KernelError::OperationError {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_input_display() {
        let err = KernelError::scalar_input("forward_complex");
        let msg = format!("{}", err);
        assert!(msg.contains("forward_complex"));
        assert!(msg.contains("rank-0"));
    }

    #[test]
    fn test_empty_input_display() {
        let err = KernelError::empty_input("inverse_real", &[3, 0]);
        let msg = format!("{}", err);
        assert!(msg.contains("inverse_real"));
        assert!(msg.contains("empty input"));
        assert!(msg.contains("[3, 0]"));
    }

    #[test]
    fn test_operation_error_display() {
        let err = KernelError::operation_error("forward_real", "shape rejected");
        assert_eq!(format!("{}", err), "forward_real: shape rejected");
    }
}
