//! Per-step timing and convergence metrics.
//!
//! [`StepMetrics`] is filled by [`step_with_metrics`](crate::step_with_metrics)
//! for profiling and for watching the pressure solve converge.

use smallvec::SmallVec;

use crate::stage::Stage;

/// Timing and residual data collected during a single step.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default)]
pub struct StepMetrics {
    /// Wall-clock time for the whole step.
    pub total_us: u64,
    /// Per-stage execution times, in execution order.
    pub stage_us: SmallVec<[(Stage, u64); 6]>,
    /// Largest cell divergence left after the pressure solve.
    pub residual: f32,
}

impl StepMetrics {
    /// Time recorded for `stage`, if it ran.
    pub fn stage(&self, stage: Stage) -> Option<u64> {
        self.stage_us
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|&(_, us)| us)
    }
}
