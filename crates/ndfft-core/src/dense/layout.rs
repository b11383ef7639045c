//! Axis-permuted views and layout materialization
//!
//! A swapped view reorders strides only; no element is moved until
//! [`DenseND::into_standard_layout`] is called on an owned result.

use super::types::DenseND;
use scirs2_core::ndarray_ext::{ArrayView, IxDyn};
use scirs2_core::numeric::Num;

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Zero-copy view with axes `a` and `b` exchanged.
    ///
    /// # Errors
    ///
    /// Fails if either axis is `>= rank`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfft_core::dense::DenseND;
    ///
    /// let t = DenseND::from_vec((0..6).map(|x| x as f64).collect(), &[2, 3]).unwrap();
    /// let v = t.swapped_axes_view(0, 1).unwrap();
    /// assert_eq!(v.shape(), &[3, 2]);
    /// assert_eq!(v[&[2, 1][..]], t[&[1, 2][..]]);
    /// ```
    pub fn swapped_axes_view(&self, a: usize, b: usize) -> anyhow::Result<ArrayView<'_, T, IxDyn>> {
        let rank = self.rank();
        anyhow::ensure!(
            a < rank && b < rank,
            "Cannot swap axes {} and {} of a rank-{} tensor",
            a,
            b,
            rank
        );
        let mut view = self.data.view();
        view.swap_axes(a, b);
        Ok(view)
    }

    /// Exchange axes `a` and `b` in place by rewriting strides.
    ///
    /// The result is generally not contiguous; pair with
    /// [`DenseND::into_standard_layout`] before handing it to code that
    /// expects canonical order.
    pub fn swap_axes(&mut self, a: usize, b: usize) -> anyhow::Result<()> {
        let rank = self.rank();
        anyhow::ensure!(
            a < rank && b < rank,
            "Cannot swap axes {} and {} of a rank-{} tensor",
            a,
            b,
            rank
        );
        self.data.swap_axes(a, b);
        Ok(())
    }

    /// Copy into C-contiguous order. No-op when already contiguous.
    pub fn into_standard_layout(self) -> Self {
        if self.is_contiguous() {
            return self;
        }
        Self {
            data: self.data.as_standard_layout().into_owned(),
        }
    }
}
