//! Body-force integration.

use plume_grid::{FluidGrid, GridParts, SOLID};

/// Add `gravity * dt` to every vertical face that separates two fluid cells.
///
/// Visits `i` in `1..num_x` and `j` in `1..num_y - 1`. The face at the
/// bottom of `(i, j)` is updated only when both `(i, j)` and `(i, j - 1)`
/// are fluid, so no velocity is injected across a solid boundary.
pub fn integrate(grid: &mut FluidGrid, dt: f32, gravity: f32) {
    let GridParts { layout, v, s, .. } = grid.parts_mut();
    let num_x = layout.num_x();
    let num_y = layout.num_y();

    for i in 1..num_x {
        for j in 1..num_y - 1 {
            if s.at(i, j) != SOLID && s.at(i, j - 1) != SOLID {
                v[(i, j)] += gravity * dt;
            }
        }
    }
}
