//! The six stages of a step and their fixed order.

use std::fmt;

use plume_grid::FluidGrid;

use crate::advection::{advect_scalar, advect_velocity};
use crate::boundary::extrapolate;
use crate::integrate::integrate;
use crate::params::StepParams;
use crate::projection::solve_incompressibility;

/// One stage of [`step`](crate::step()).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Add gravity to vertical faces.
    Integrate,
    /// Zero the pressure field.
    ResetPressure,
    /// Gauss-Seidel pressure projection.
    Project,
    /// Copy border velocities outward.
    Extrapolate,
    /// Semi-Lagrangian transport of `u` and `v`.
    AdvectVelocity,
    /// Semi-Lagrangian transport of smoke.
    AdvectScalar,
}

impl Stage {
    /// Execution order. Each stage reads the previous stage's committed output.
    pub const ORDER: [Stage; 6] = [
        Self::Integrate,
        Self::ResetPressure,
        Self::Project,
        Self::Extrapolate,
        Self::AdvectVelocity,
        Self::AdvectScalar,
    ];

    /// Name used in logs and metrics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Integrate => "integrate",
            Self::ResetPressure => "reset_pressure",
            Self::Project => "project",
            Self::Extrapolate => "extrapolate",
            Self::AdvectVelocity => "advect_velocity",
            Self::AdvectScalar => "advect_scalar",
        }
    }

    /// Apply this stage to `grid`.
    pub(crate) fn run(self, grid: &mut FluidGrid, params: &StepParams) {
        match self {
            Self::Integrate => integrate(grid, params.dt, params.gravity),
            Self::ResetPressure => grid.parts_mut().p.fill(0.0),
            Self::Project => solve_incompressibility(grid, params.iterations, params.dt),
            Self::Extrapolate => extrapolate(grid),
            Self::AdvectVelocity => advect_velocity(grid, params.dt),
            Self::AdvectScalar => advect_scalar(grid, params.dt),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
