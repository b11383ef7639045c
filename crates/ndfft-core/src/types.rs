//! Core type definitions for ndfft tensors.
//!
//! - Type aliases for axis indices and ranks ([`Axis`], [`Rank`])
//! - The element domain tag ([`Domain`])
//! - The domain-tagged tensor ([`Tensor`])
//! - The capability trait used to recognize tensor arguments ([`AsTensor`])
//!
//! # Examples
//!
//! ```
//! use ndfft_core::{AsTensor, Domain, Tensor};
//!
//! let t = Tensor::from_real_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! assert_eq!(t.domain(), Domain::Real);
//! assert!(t.as_tensor().is_some());
//!
//! let plain: Vec<f64> = vec![1.0, 2.0, 3.0];
//! assert!(plain.as_tensor().is_none());
//! ```

use scirs2_core::numeric::Complex64;
use std::borrow::Cow;
use std::fmt;

pub use crate::dense::DenseND;

/// Zero-based axis index.
pub type Axis = usize;

/// Number of axes of a tensor.
pub type Rank = usize;

/// Element domain of a tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Domain {
    /// `f64` elements
    Real,
    /// `Complex64` elements
    Complex,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Real => write!(f, "real"),
            Domain::Complex => write!(f, "complex"),
        }
    }
}

/// N-dimensional array of real or complex elements.
///
/// Transforms never mutate a `Tensor`; every operation returns a new one.
#[derive(Clone, PartialEq)]
pub enum Tensor {
    /// Real-valued tensor
    Real(DenseND<f64>),
    /// Complex-valued tensor
    Complex(DenseND<Complex64>),
}

impl Tensor {
    /// Real tensor from row-major data.
    pub fn from_real_vec(data: Vec<f64>, shape: &[usize]) -> anyhow::Result<Self> {
        Ok(Tensor::Real(DenseND::from_vec(data, shape)?))
    }

    /// Complex tensor from row-major data.
    pub fn from_complex_vec(data: Vec<Complex64>, shape: &[usize]) -> anyhow::Result<Self> {
        Ok(Tensor::Complex(DenseND::from_vec(data, shape)?))
    }

    /// Element domain tag.
    pub fn domain(&self) -> Domain {
        match self {
            Tensor::Real(_) => Domain::Real,
            Tensor::Complex(_) => Domain::Complex,
        }
    }

    /// Extent of every axis.
    pub fn shape(&self) -> &[usize] {
        match self {
            Tensor::Real(t) => t.shape(),
            Tensor::Complex(t) => t.shape(),
        }
    }

    /// Number of axes.
    pub fn rank(&self) -> Rank {
        self.shape().len()
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        match self {
            Tensor::Real(t) => t.len(),
            Tensor::Complex(t) => t.len(),
        }
    }

    /// True if the tensor holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the real data, if this is a real tensor.
    pub fn as_real(&self) -> Option<&DenseND<f64>> {
        match self {
            Tensor::Real(t) => Some(t),
            Tensor::Complex(_) => None,
        }
    }

    /// Borrow the complex data, if this is a complex tensor.
    pub fn as_complex(&self) -> Option<&DenseND<Complex64>> {
        match self {
            Tensor::Complex(t) => Some(t),
            Tensor::Real(_) => None,
        }
    }

    /// Complex view of the data: borrowed when already complex, promoted
    /// otherwise.
    pub fn to_complex(&self) -> Cow<'_, DenseND<Complex64>> {
        match self {
            Tensor::Complex(t) => Cow::Borrowed(t),
            Tensor::Real(t) => Cow::Owned(t.to_complex()),
        }
    }

    /// Take the real data, if this is a real tensor.
    pub fn into_real(self) -> Option<DenseND<f64>> {
        match self {
            Tensor::Real(t) => Some(t),
            Tensor::Complex(_) => None,
        }
    }

    /// Take the data as complex, promoting real tensors.
    pub fn into_complex(self) -> DenseND<Complex64> {
        match self {
            Tensor::Complex(t) => t,
            Tensor::Real(t) => t.to_complex(),
        }
    }
}

impl From<DenseND<f64>> for Tensor {
    fn from(t: DenseND<f64>) -> Self {
        Tensor::Real(t)
    }
}

impl From<DenseND<Complex64>> for Tensor {
    fn from(t: DenseND<Complex64>) -> Self {
        Tensor::Complex(t)
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tensor::Real(t) => f.debug_tuple("Real").field(t).finish(),
            Tensor::Complex(t) => f.debug_tuple("Complex").field(t).finish(),
        }
    }
}

/// Capability check for tensor arguments.
///
/// [`Tensor`] is the only type that answers `Some`. The other implementations
/// exist so that values a caller might plausibly pass in place of a tensor
/// (nothing, a scalar, a flat list) are rejected with a typed error instead of
/// being coerced.
pub trait AsTensor {
    /// The tensor behind this argument, if there is one.
    fn as_tensor(&self) -> Option<&Tensor>;

    /// Human-readable name of the argument's type for error messages.
    fn type_label(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl AsTensor for Tensor {
    fn as_tensor(&self) -> Option<&Tensor> {
        Some(self)
    }

    fn type_label(&self) -> &'static str {
        "Tensor"
    }
}

impl<A: AsTensor> AsTensor for Option<A> {
    fn as_tensor(&self) -> Option<&Tensor> {
        self.as_ref().and_then(AsTensor::as_tensor)
    }

    fn type_label(&self) -> &'static str {
        match self {
            Some(inner) => inner.type_label(),
            None => "nil",
        }
    }
}

impl<A: AsTensor + ?Sized> AsTensor for &A {
    fn as_tensor(&self) -> Option<&Tensor> {
        (**self).as_tensor()
    }

    fn type_label(&self) -> &'static str {
        (**self).type_label()
    }
}

macro_rules! not_a_tensor {
    ($($ty:ty => $label:expr),* $(,)?) => {
        $(
            impl AsTensor for $ty {
                fn as_tensor(&self) -> Option<&Tensor> {
                    None
                }

                fn type_label(&self) -> &'static str {
                    $label
                }
            }
        )*
    };
}

not_a_tensor! {
    () => "nil",
    f64 => "f64",
    Complex64 => "Complex64",
    [f64] => "[f64]",
    Vec<f64> => "Vec<f64>",
    [Complex64] => "[Complex64]",
    Vec<Complex64> => "Vec<Complex64>",
}
