//! Plume: two-dimensional incompressible fluid simulation.
//!
//! This is the facade crate that re-exports the public API from all Plume
//! sub-crates. The solver is an Eulerian projection method on a staggered
//! (MAC) grid: gravity, Gauss-Seidel pressure projection with
//! over-relaxation, border extrapolation, then semi-Lagrangian advection of
//! velocity and smoke.
//!
//! # Quick start
//!
//! ```rust
//! use plume::prelude::*;
//!
//! // A 16x16 box with solid walls, lightly stirred.
//! let mut grid = FluidGrid::new(&GridConfig::new(1000.0, 16, 16, 1.0 / 16.0)).unwrap();
//! let border = *grid.layout();
//! grid.fill_mask(|i, j| !border.is_border(i, j));
//! grid.u_mut().set(8, 8, 1.0);
//!
//! let params = StepParams::default();
//! for _ in 0..10 {
//!     step(&mut grid, &params);
//! }
//! assert!(grid.p().as_slice().iter().all(|p| p.is_finite()));
//! ```
//!
//! Scenes bundle a grid with presets and an obstacle:
//!
//! ```rust
//! use plume::prelude::*;
//!
//! let mut scene = Scene::with_config(
//!     SceneKind::WindTunnel,
//!     SceneConfig::default().with_resolution(20),
//! ).unwrap();
//! let metrics = scene.simulate().unwrap();
//! assert_eq!(scene.frame(), 1);
//! assert!(metrics.residual.is_finite());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plume-core` | `FieldKind`, `ConfigError` |
//! | [`grid`] | `plume-grid` | `FluidGrid`, `Field2`, `GridConfig`, `GridLayout` |
//! | [`solver`] | `plume-solver` | stages, `step`, `StepParams`, diagnostics |
//! | [`scene`] | `plume-scene` | presets, obstacle, display flags |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Field selectors and the configuration error (`plume-core`).
pub use plume_core as types;

/// Grid storage (`plume-grid`).
///
/// [`grid::FluidGrid`] owns every field; [`grid::Field2`] is the 2D
/// container with `at(i, j)` access.
pub use plume_grid as grid;

/// Solver stages and the full step (`plume-solver`).
///
/// [`solver::step`] runs the six stages in order;
/// [`solver::step_with_metrics`] also reports timings and the residual.
pub use plume_solver as solver;

/// Preset scenes (`plume-scene`).
pub use plume_scene as scene;

/// Common imports for typical Plume usage.
///
/// ```rust
/// use plume::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use plume_core::{ConfigError, FieldKind};

    // Grid
    pub use plume_grid::{Field2, FluidGrid, GridConfig, GridLayout};

    // Solver
    pub use plume_solver::{sample, step, step_with_metrics, Stage, StepMetrics, StepParams};

    // Scene
    pub use plume_scene::{DisplayFlags, Scene, SceneConfig, SceneError, SceneKind};
}
