//! rustfft-backed spectral kernel

use crate::kernel::{Direction, SpectralKernel};
use parking_lot::Mutex;
use rustfft::{Fft, FftPlanner};
use scirs2_core::numeric::Complex64;
use std::collections::HashMap;
use std::sync::Arc;

type PlanCache = HashMap<(usize, Direction), Arc<dyn Fft<f64>>>;

/// Spectral kernel backed by `rustfft`.
///
/// Plans are cached per `(lane length, direction)`, so repeated transforms of
/// the same length reuse their twiddle tables. The cache is the only state
/// shared between calls; the lock is held only while a plan is looked up.
pub struct RustFftKernel {
    plans: Mutex<PlanCache>,
}

impl RustFftKernel {
    /// Create a kernel with an empty plan cache.
    pub fn new() -> Self {
        Self {
            plans: Mutex::new(HashMap::new()),
        }
    }

    /// Number of plans built so far.
    pub fn cached_plans(&self) -> usize {
        self.plans.lock().len()
    }

    fn plan(&self, lane_len: usize, direction: Direction) -> Arc<dyn Fft<f64>> {
        let mut plans = self.plans.lock();
        plans
            .entry((lane_len, direction))
            .or_insert_with(|| {
                log::debug!("rustfft: planning {} transform of length {}", direction, lane_len);
                let mut planner = FftPlanner::<f64>::new();
                match direction {
                    Direction::Forward => planner.plan_fft_forward(lane_len),
                    Direction::Inverse => planner.plan_fft_inverse(lane_len),
                }
            })
            .clone()
    }
}

impl Default for RustFftKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RustFftKernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RustFftKernel")
            .field("cached_plans", &self.cached_plans())
            .finish()
    }
}

impl SpectralKernel for RustFftKernel {
    fn name(&self) -> &'static str {
        "rustfft"
    }

    fn process_batch(&self, buffer: &mut [Complex64], lane_len: usize, direction: Direction) {
        let fft = self.plan(lane_len, direction);
        log::trace!(
            "rustfft: {} {} lane(s) of length {}",
            direction,
            buffer.len() / lane_len.max(1),
            lane_len
        );
        fft.process(buffer);
    }
}
