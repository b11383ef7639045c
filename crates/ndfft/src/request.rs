//! Description of a single per-axis transform step

use ndfft_core::{Axis, Domain};
pub use ndfft_kernels::Direction;

/// One AxisTransform step: which axis, which direction, which domain.
///
/// `Domain::Real` with `Direction::Forward` maps the axis length
/// `n → n/2+1`; with `Direction::Inverse` it expects an already expanded
/// full-length buffer and keeps the length. Complex steps never change the
/// axis length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformRequest {
    pub axis: Axis,
    pub direction: Direction,
    pub domain: Domain,
}

impl TransformRequest {
    pub fn new(axis: Axis, direction: Direction, domain: Domain) -> Self {
        Self {
            axis,
            direction,
            domain,
        }
    }

    /// Complex-domain step on `axis`.
    pub fn complex(axis: Axis, direction: Direction) -> Self {
        Self::new(axis, direction, Domain::Complex)
    }

    /// Real-domain step on `axis`.
    pub fn real(axis: Axis, direction: Direction) -> Self {
        Self::new(axis, direction, Domain::Real)
    }
}
