//! Rectangular sub-region access
//!
//! Regions are addressed by one half-open `Range<usize>` per axis.

use super::types::DenseND;
use scirs2_core::numeric::Num;
use std::ops::Range;

fn check_ranges(shape: &[usize], ranges: &[Range<usize>]) -> anyhow::Result<()> {
    anyhow::ensure!(
        ranges.len() == shape.len(),
        "Region has {} ranges but tensor has rank {}",
        ranges.len(),
        shape.len()
    );
    for (axis, (range, &extent)) in ranges.iter().zip(shape).enumerate() {
        anyhow::ensure!(
            range.start <= range.end && range.end <= extent,
            "Range {:?} out of bounds for axis {} with length {}",
            range,
            axis,
            extent
        );
    }
    Ok(())
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Owned copy of the region selected by `ranges`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfft_core::dense::DenseND;
    ///
    /// let t = DenseND::from_vec((0..12).map(|x| x as f64).collect(), &[3, 4]).unwrap();
    /// let r = t.slice_region(&[1..3, 0..2]).unwrap();
    /// assert_eq!(r.shape(), &[2, 2]);
    /// assert_eq!(r.to_vec(), vec![4.0, 5.0, 8.0, 9.0]);
    /// ```
    pub fn slice_region(&self, ranges: &[Range<usize>]) -> anyhow::Result<Self> {
        check_ranges(self.shape(), ranges)?;
        let region = self
            .data
            .slice_each_axis(|desc| ranges[desc.axis.index()].clone().into());
        Ok(Self::from_array(region.to_owned()))
    }

    /// Overwrite the region selected by `ranges` with the contents of `src`.
    ///
    /// The extent of every range must equal the corresponding axis of `src`.
    pub fn assign_region(&mut self, ranges: &[Range<usize>], src: &Self) -> anyhow::Result<()> {
        check_ranges(self.shape(), ranges)?;
        let extents: Vec<usize> = ranges.iter().map(|r| r.end - r.start).collect();
        anyhow::ensure!(
            extents == src.shape(),
            "Region extents {:?} do not match source shape {:?}",
            extents,
            src.shape()
        );
        self.data
            .slice_each_axis_mut(|desc| ranges[desc.axis.index()].clone().into())
            .assign(&src.data);
        Ok(())
    }

    /// Zero-filled tensor of `shape` with `self` copied into its origin corner.
    ///
    /// Every axis of `shape` must be at least as long as the matching axis
    /// of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfft_core::dense::DenseND;
    ///
    /// let t = DenseND::from_vec(vec![1.0, 2.0, 3.0], &[1, 3]).unwrap();
    /// let p = t.zero_padded(&[2, 4]).unwrap();
    /// assert_eq!(p.to_vec(), vec![1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    /// ```
    pub fn zero_padded(&self, shape: &[usize]) -> anyhow::Result<Self> {
        anyhow::ensure!(
            shape.len() == self.rank(),
            "Target rank {} differs from tensor rank {}",
            shape.len(),
            self.rank()
        );
        let mut padded = Self::zeros(shape);
        let ranges: Vec<Range<usize>> = self.shape().iter().map(|&len| 0..len).collect();
        padded.assign_region(&ranges, self)?;
        Ok(padded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iota(shape: &[usize]) -> DenseND<f64> {
        let n: usize = shape.iter().product();
        DenseND::from_vec((0..n).map(|x| x as f64).collect(), shape).unwrap()
    }

    #[test]
    fn test_slice_region_3d() {
        let t = iota(&[2, 3, 4]);
        let r = t.slice_region(&[1..2, 0..3, 2..4]).unwrap();
        assert_eq!(r.shape(), &[1, 3, 2]);
        assert_eq!(r.to_vec(), vec![14.0, 15.0, 18.0, 19.0, 22.0, 23.0]);
    }

    #[test]
    fn test_slice_region_rejects_wrong_rank() {
        let t = iota(&[2, 3]);
        assert!(t.slice_region(&[0..1]).is_err());
    }

    #[test]
    fn test_slice_region_rejects_overrun() {
        let t = iota(&[2, 3]);
        let err = t.slice_region(&[0..2, 1..4]).unwrap_err();
        assert!(err.to_string().contains("axis 1"));
    }

    #[test]
    fn test_assign_region_interior() {
        let mut t = DenseND::<f64>::zeros(&[3, 3]);
        let src = DenseND::from_elem(&[1, 2], 5.0);
        t.assign_region(&[1..2, 1..3], &src).unwrap();
        assert_eq!(
            t.to_vec(),
            vec![0.0, 0.0, 0.0, 0.0, 5.0, 5.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_assign_region_extent_mismatch() {
        let mut t = DenseND::<f64>::zeros(&[3, 3]);
        let src = DenseND::from_elem(&[2, 2], 1.0);
        assert!(t.assign_region(&[0..1, 0..2], &src).is_err());
    }

    #[test]
    fn test_zero_padded_keeps_origin() {
        let t = iota(&[2, 2]);
        let p = t.zero_padded(&[3, 4]).unwrap();
        assert_eq!(p.shape(), &[3, 4]);
        assert_eq!(p[&[0, 1][..]], 1.0);
        assert_eq!(p[&[1, 0][..]], 2.0);
        assert_eq!(p[&[1, 1][..]], 3.0);
        assert_eq!(p.iter().filter(|&&x| x != 0.0).count(), 3);
    }

    #[test]
    fn test_zero_padded_rejects_shrink() {
        let t = iota(&[2, 2]);
        assert!(t.zero_padded(&[1, 2]).is_err());
    }
}
