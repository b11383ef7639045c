//! Linear convolution through the frequency domain
//!
//! Both operands are zero-padded to `len(a) + len(b) - 1` on every axis so the
//! circular convolution computed by the DFT equals the linear one.

use crate::engine::{accept, FftEngine};
use crate::error::{FftError, FftResult};
use ndfft_core::{AsTensor, Domain, Tensor};
use ndfft_kernels::SpectralKernel;

impl<K: SpectralKernel> FftEngine<K> {
    /// Full discrete linear convolution of two tensors of equal rank.
    ///
    /// The output has length `len(a, axis) + len(b, axis) - 1` on every axis.
    /// It is real when both inputs are real (the imaginary residue of the
    /// inverse transform is dropped) and complex otherwise.
    ///
    /// # Errors
    ///
    /// `ArgumentType` if either argument is not a tensor, `ArgumentShape` if
    /// either is empty or their ranks differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use ndfft::{FftEngine, Tensor};
    ///
    /// let engine = FftEngine::new();
    /// let a = Tensor::from_real_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
    /// let b = Tensor::from_real_vec(vec![4.0, 5.0], &[2]).unwrap();
    ///
    /// let c = engine.fftconvolve(&a, &b).unwrap();
    /// let values = c.as_real().unwrap().to_vec();
    /// let expected = [4.0, 13.0, 22.0, 15.0];
    /// assert!(values.iter().zip(&expected).all(|(x, y)| (x - y).abs() < 1e-10));
    /// ```
    pub fn fftconvolve<A, B>(&self, a: &A, b: &B) -> FftResult<Tensor>
    where
        A: AsTensor + ?Sized,
        B: AsTensor + ?Sized,
    {
        let a = accept("fftconvolve", a, None)?;
        let b = accept("fftconvolve", b, None)?;
        if a.rank() != b.rank() {
            return Err(FftError::argument_shape(
                "fftconvolve",
                format!(
                    "operands must have equal rank, got {} and {}",
                    a.rank(),
                    b.rank()
                ),
            ));
        }

        let is_unit = |t: &Tensor| t.shape().iter().all(|&len| len == 1);
        if is_unit(a) && is_unit(b) {
            log::debug!("fftconvolve: unit-shaped operands, multiplying directly");
            return Ok(match (a, b) {
                (Tensor::Real(x), Tensor::Real(y)) => Tensor::Real(x.hadamard(y)?),
                _ => Tensor::Complex(a.to_complex().hadamard(&b.to_complex())?),
            });
        }

        let out_shape: Vec<usize> = a
            .shape()
            .iter()
            .zip(b.shape())
            .map(|(&la, &lb)| la + lb - 1)
            .collect();

        let padded_a = a.to_complex().zero_padded(&out_shape)?;
        let padded_b = b.to_complex().zero_padded(&out_shape)?;
        let spectrum_a = self.forward_all(&Tensor::Complex(padded_a))?.into_complex();
        let spectrum_b = self.forward_all(&Tensor::Complex(padded_b))?.into_complex();

        let product = spectrum_a.hadamard(&spectrum_b)?;
        let out = self.inverse_all(&Tensor::Complex(product))?;

        let complex_result = a.domain() == Domain::Complex || b.domain() == Domain::Complex;
        Ok(if complex_result {
            out
        } else {
            Tensor::Real(out.into_complex().re())
        })
    }
}
