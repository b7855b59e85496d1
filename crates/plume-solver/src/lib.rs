//! Stable-fluids solver stages for Plume.
//!
//! One call to [`step`] advances a [`FluidGrid`](plume_grid::FluidGrid) by
//! a fixed timestep, running six stages in a fixed order:
//!
//! 1. [`integrate`]: add gravity to vertical faces between fluid cells.
//! 2. Reset pressure to zero.
//! 3. [`solve_incompressibility`]: Gauss-Seidel relaxation with
//!    over-relaxation towards a divergence-free velocity field.
//! 4. [`extrapolate`]: copy velocities one layer out across the border.
//! 5. [`advect_velocity`]: semi-Lagrangian transport of `u` and `v`.
//! 6. [`advect_scalar`]: semi-Lagrangian transport of smoke density.
//!
//! Each stage is also exposed on its own so callers and tests can drive
//! the pipeline piecewise. The solver keeps no state between calls; the
//! grid is the only thing that changes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advection;
pub mod boundary;
pub mod diagnostics;
pub mod integrate;
pub mod metrics;
pub mod params;
pub mod projection;
pub mod sampler;
pub mod stage;
pub mod step;

pub use advection::{advect_scalar, advect_velocity};
pub use boundary::extrapolate;
pub use diagnostics::{divergence, fluid_cell_count, max_divergence, total_smoke};
pub use integrate::integrate;
pub use metrics::StepMetrics;
pub use params::StepParams;
pub use projection::{solve_incompressibility, OVER_RELAXATION};
pub use sampler::{sample, sample_field};
pub use stage::Stage;
pub use step::{step, step_with_metrics};
