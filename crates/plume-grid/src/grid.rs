//! [`FluidGrid`]: all solver state for one scene.
//!
//! # Ownership model
//!
//! The caller (usually a scene) owns the grid and passes `&mut FluidGrid`
//! into each solver step. Because a step holds the unique borrow for its
//! whole duration, renderers cannot observe a half-updated grid and obstacle
//! writes cannot interleave with a step; both are rejected at compile time.

use plume_core::{ConfigError, FieldKind};

use crate::config::GridConfig;
use crate::field::Field2;
use crate::layout::GridLayout;

/// Mask value of a solid (no-flow) cell.
pub const SOLID: f32 = 0.0;
/// Mask value of a fluid cell.
pub const FLUID: f32 = 1.0;

// Compile-time assertion: FluidGrid can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<FluidGrid>();
    }
};

/// Staggered MAC grid state: velocities, pressure, mask, smoke, scratch.
///
/// Created once per scene with a fixed resolution. Every field has
/// `num_x * num_y` cells; `m` starts at 1.0 and everything else at 0.0
/// (including the mask, so a fresh grid is entirely solid until the
/// caller paints fluid).
#[derive(Clone, Debug)]
pub struct FluidGrid {
    layout: GridLayout,
    density: f32,
    u: Field2,
    v: Field2,
    p: Field2,
    s: Field2,
    m: Field2,
    new_u: Field2,
    new_v: Field2,
    new_m: Field2,
}

/// Split mutable borrow of a [`FluidGrid`], handed to solver stages.
///
/// The solid mask is shared read-only: the solver never modifies it.
#[derive(Debug)]
pub struct GridParts<'a> {
    /// Grid dimensions and cell size.
    pub layout: GridLayout,
    /// Fluid density.
    pub density: f32,
    /// Horizontal velocity at left faces.
    pub u: &'a mut Field2,
    /// Vertical velocity at bottom faces.
    pub v: &'a mut Field2,
    /// Cell-centred pressure.
    pub p: &'a mut Field2,
    /// Solid mask (read-only).
    pub s: &'a Field2,
    /// Smoke density.
    pub m: &'a mut Field2,
    /// Advection scratch for `u`.
    pub new_u: &'a mut Field2,
    /// Advection scratch for `v`.
    pub new_v: &'a mut Field2,
    /// Advection scratch for `m`.
    pub new_m: &'a mut Field2,
}

impl FluidGrid {
    /// Validate `config` and allocate every field.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`GridConfig::validate()`]; nothing
    /// is allocated when validation fails.
    pub fn new(config: &GridConfig) -> Result<Self, ConfigError> {
        let layout = config.layout()?;
        log::debug!(
            "allocating {}x{} fluid grid (h = {}, density = {})",
            layout.num_x(),
            layout.num_y(),
            layout.h(),
            config.density
        );
        Ok(Self {
            layout,
            density: config.density,
            u: Field2::new(layout, 0.0),
            v: Field2::new(layout, 0.0),
            p: Field2::new(layout, 0.0),
            s: Field2::new(layout, SOLID),
            m: Field2::new(layout, 1.0),
            new_u: Field2::new(layout, 0.0),
            new_v: Field2::new(layout, 0.0),
            new_m: Field2::new(layout, 0.0),
        })
    }

    /// Grid dimensions and cell size.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Stored cells along x, border included.
    pub fn num_x(&self) -> usize {
        self.layout.num_x()
    }

    /// Stored cells along y, border included.
    pub fn num_y(&self) -> usize {
        self.layout.num_y()
    }

    /// Uniform cell size.
    pub fn h(&self) -> f32 {
        self.layout.h()
    }

    /// Fluid density.
    pub fn density(&self) -> f32 {
        self.density
    }

    /// Total stored cells.
    pub fn cell_count(&self) -> usize {
        self.layout.cell_count()
    }

    /// Horizontal velocity at left faces.
    pub fn u(&self) -> &Field2 {
        &self.u
    }

    /// Vertical velocity at bottom faces.
    pub fn v(&self) -> &Field2 {
        &self.v
    }

    /// Pressure from the most recent step.
    pub fn p(&self) -> &Field2 {
        &self.p
    }

    /// Solid mask: exactly [`SOLID`] or [`FLUID`] per cell.
    pub fn s(&self) -> &Field2 {
        &self.s
    }

    /// Smoke density.
    pub fn m(&self) -> &Field2 {
        &self.m
    }

    /// Backing field for a sample kind. `Scalar` maps to smoke density.
    pub fn field(&self, kind: FieldKind) -> &Field2 {
        match kind {
            FieldKind::VelocityX => &self.u,
            FieldKind::VelocityY => &self.v,
            FieldKind::Scalar => &self.m,
        }
    }

    /// Whether cell `(i, j)` is fluid.
    pub fn is_fluid(&self, i: usize, j: usize) -> bool {
        self.s.at(i, j) != SOLID
    }

    // ── Obstacle contract ───────────────────────────────────────

    /// Mark cell `(i, j)` fluid (`fluid = true`) or solid.
    pub fn set_mask(&mut self, i: usize, j: usize, fluid: bool) {
        self.s.set(i, j, if fluid { FLUID } else { SOLID });
    }

    /// Mark cell `(i, j)` solid.
    pub fn set_solid(&mut self, i: usize, j: usize) {
        self.set_mask(i, j, false);
    }

    /// Mark cell `(i, j)` fluid.
    pub fn set_fluid(&mut self, i: usize, j: usize) {
        self.set_mask(i, j, true);
    }

    /// Repaint the whole mask; `is_fluid(i, j)` decides each cell.
    pub fn fill_mask(&mut self, mut is_fluid: impl FnMut(usize, usize) -> bool) {
        for i in 0..self.num_x() {
            for j in 0..self.num_y() {
                self.set_mask(i, j, is_fluid(i, j));
            }
        }
    }

    /// Mutable horizontal velocity, for obstacle and inflow writes.
    pub fn u_mut(&mut self) -> &mut Field2 {
        &mut self.u
    }

    /// Mutable vertical velocity, for obstacle writes.
    pub fn v_mut(&mut self) -> &mut Field2 {
        &mut self.v
    }

    /// Mutable smoke density, for dye injection.
    pub fn m_mut(&mut self) -> &mut Field2 {
        &mut self.m
    }

    /// Split borrow for solver stages.
    pub fn parts_mut(&mut self) -> GridParts<'_> {
        GridParts {
            layout: self.layout,
            density: self.density,
            u: &mut self.u,
            v: &mut self.v,
            p: &mut self.p,
            s: &self.s,
            m: &mut self.m,
            new_u: &mut self.new_u,
            new_v: &mut self.new_v,
            new_m: &mut self.new_m,
        }
    }
}
