//! Dense tensor type definition and basic operations
//!
//! This module defines `DenseND<T>` together with its constructors and shape
//! accessors. Region, layout and element-wise operations live in sibling
//! modules.

use scirs2_core::ndarray_ext::{Array, ArrayView, IxDyn};
use scirs2_core::numeric::Num;

/// Dense N-dimensional array backed by scirs2_core's ndarray
///
/// Storage is an owned `Array<T, IxDyn>`. Arrays built through the public
/// constructors are in C-contiguous (row-major) order; arrays adopted through
/// [`DenseND::from_array`] keep whatever layout they arrive with until
/// [`DenseND::into_standard_layout`] is called.
///
/// # Type Parameters
///
/// * `T` - The element type (`f64` or `Complex64` in practice)
///
/// # Examples
///
/// ```
/// use ndfft_core::dense::DenseND;
///
/// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// assert_eq!(tensor.len(), 24);
/// ```
#[derive(Clone, PartialEq)]
pub struct DenseND<T> {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array<T, IxDyn>,
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Adopt an existing ndarray without copying.
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::{Array, IxDyn};
    /// use ndfft_core::dense::DenseND;
    ///
    /// let arr = Array::<f64, _>::zeros(IxDyn(&[2, 3]));
    /// let tensor = DenseND::from_array(arr);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        Self { data: array }
    }

    /// Build a tensor from row-major data and a shape.
    ///
    /// Fails when `vec.len()` differs from the product of `shape`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfft_core::dense::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(tensor[&[1, 0][..]], 4.0);
    ///
    /// assert!(DenseND::from_vec(vec![1.0, 2.0], &[3]).is_err());
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self { data: array })
    }

    /// Tensor of the given shape with every element set to `value`.
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    /// Zero-filled tensor of the given shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfft_core::dense::DenseND;
    /// use scirs2_core::numeric::Complex64;
    ///
    /// let buffer = DenseND::<Complex64>::zeros(&[4, 5]);
    /// assert!(buffer.iter().all(|c| c.re == 0.0 && c.im == 0.0));
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    /// Tensor of the given shape filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Extent of every axis.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Owned copy of the shape.
    pub fn shape_vec(&self) -> Vec<usize> {
        self.data.shape().to_vec()
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if any axis has length zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True if storage is in C-contiguous (row-major) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfft_core::dense::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[3, 4]);
    /// assert!(tensor.is_contiguous());
    /// ```
    pub fn is_contiguous(&self) -> bool {
        self.data.is_standard_layout()
    }

    /// Returns true if both tensors have identical shapes.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }

    /// Read-only view of the whole tensor.
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Element at `index`, or `None` when the index is out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.data.get(IxDyn(index))
    }

    /// Elements in logical row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }

    /// Iterate elements in logical row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}
