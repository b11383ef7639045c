//! Element-wise arithmetic and real/complex conversion

use super::types::DenseND;
use scirs2_core::ndarray_ext::Zip;
use scirs2_core::numeric::{Complex64, Num};

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Element-wise (Hadamard) product.
    ///
    /// # Errors
    ///
    /// Fails when the shapes differ; no broadcasting is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfft_core::dense::DenseND;
    ///
    /// let a = DenseND::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
    /// let b = DenseND::from_vec(vec![4.0, 5.0, 6.0], &[3]).unwrap();
    /// assert_eq!(a.hadamard(&b).unwrap().to_vec(), vec![4.0, 10.0, 18.0]);
    /// ```
    pub fn hadamard(&self, other: &Self) -> anyhow::Result<Self> {
        anyhow::ensure!(
            self.same_shape(other),
            "Hadamard product requires equal shapes, got {:?} and {:?}",
            self.shape(),
            other.shape()
        );
        let mut out = self.data.clone();
        Zip::from(&mut out)
            .and(&other.data)
            .for_each(|a, b| *a = a.clone() * b.clone());
        Ok(Self::from_array(out))
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> anyhow::Result<Self> {
        anyhow::ensure!(
            self.same_shape(other),
            "Addition requires equal shapes, got {:?} and {:?}",
            self.shape(),
            other.shape()
        );
        let mut out = self.data.clone();
        Zip::from(&mut out)
            .and(&other.data)
            .for_each(|a, b| *a = a.clone() + b.clone());
        Ok(Self::from_array(out))
    }
}

impl DenseND<f64> {
    /// Promote to complex with zero imaginary parts.
    pub fn to_complex(&self) -> DenseND<Complex64> {
        DenseND::from_array(self.data.mapv(|x| Complex64::new(x, 0.0)))
    }
}

impl DenseND<Complex64> {
    /// Real component of every element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfft_core::dense::DenseND;
    /// use scirs2_core::numeric::Complex64;
    ///
    /// let z = DenseND::from_vec(vec![Complex64::new(1.5, -2.0), Complex64::new(0.0, 3.0)], &[2]).unwrap();
    /// assert_eq!(z.re().to_vec(), vec![1.5, 0.0]);
    /// ```
    pub fn re(&self) -> DenseND<f64> {
        DenseND::from_array(self.data.mapv(|c| c.re))
    }

    /// Imaginary component of every element.
    pub fn im(&self) -> DenseND<f64> {
        DenseND::from_array(self.data.mapv(|c| c.im))
    }
}
