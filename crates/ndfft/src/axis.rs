//! Per-axis transform step
//!
//! The kernel only transforms the trailing axis. Any other axis is reached by
//! handing the kernel a view with that axis swapped into the trailing
//! position, then swapping the result back and materializing it once.

use crate::engine::FftEngine;
use crate::error::{FftError, FftResult};
use crate::request::{Direction, TransformRequest};
use ndfft_core::{DenseND, Domain, Tensor};
use ndfft_kernels::{KernelResult, SpectralKernel};
use scirs2_core::ndarray_ext::{ArrayD, ArrayView, IxDyn};
use scirs2_core::numeric::Num;

/// Run `primitive` along `axis` of `input`.
fn along_axis<T, U, F>(input: &DenseND<T>, axis: usize, primitive: F) -> FftResult<DenseND<U>>
where
    T: Clone + Num,
    U: Clone + Num,
    F: FnOnce(ArrayView<'_, T, IxDyn>) -> KernelResult<ArrayD<U>>,
{
    let last = input.rank() - 1;
    if axis == last {
        return Ok(DenseND::from_array(primitive(input.view())?));
    }

    let swapped = input.swapped_axes_view(axis, last)?;
    let mut out = DenseND::from_array(primitive(swapped)?);
    out.swap_axes(axis, last)?;
    Ok(out.into_standard_layout())
}

impl<K: SpectralKernel> FftEngine<K> {
    /// Apply one 1-D transform along `request.axis`, returning a new
    /// canonical-layout tensor.
    pub(crate) fn transform_axis(
        &self,
        tensor: &Tensor,
        request: TransformRequest,
    ) -> FftResult<Tensor> {
        let TransformRequest {
            axis,
            direction,
            domain,
        } = request;
        let rank = tensor.rank();
        if axis >= rank {
            return Err(FftError::Dimension { axis, rank });
        }
        log::trace!(
            "{}: {} {} step on axis {} of {:?}{}",
            self.kernel().name(),
            domain,
            direction,
            axis,
            tensor.shape(),
            if axis + 1 == rank { "" } else { " (swapped view)" }
        );

        let kernel = self.kernel();
        let out = match (domain, direction) {
            (Domain::Complex, Direction::Forward) => {
                let data = tensor.to_complex();
                Tensor::Complex(along_axis(&*data, axis, |v| kernel.forward_complex(v))?)
            }
            (Domain::Complex, Direction::Inverse) => {
                let data = tensor.to_complex();
                Tensor::Complex(along_axis(&*data, axis, |v| kernel.inverse_complex(v))?)
            }
            (Domain::Real, Direction::Forward) => {
                let data = tensor.as_real().ok_or_else(|| {
                    FftError::argument_type("forward_real", "a real tensor", "a complex tensor")
                })?;
                Tensor::Complex(along_axis(data, axis, |v| kernel.forward_real(v))?)
            }
            (Domain::Real, Direction::Inverse) => {
                let data = tensor.to_complex();
                Tensor::Real(along_axis(&*data, axis, |v| kernel.inverse_real(v))?)
            }
        };
        Ok(out)
    }
}
