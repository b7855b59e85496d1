//! Read-only measurements of grid state.

use plume_grid::{FluidGrid, SOLID};

/// Net outflow of cell `(i, j)`: `u[i+1,j] - u[i,j] + v[i,j+1] - v[i,j]`.
///
/// `(i, j)` must not lie on the last row or column.
pub fn divergence(grid: &FluidGrid, i: usize, j: usize) -> f32 {
    let u = grid.u();
    let v = grid.v();
    u.at(i + 1, j) - u.at(i, j) + v.at(i, j + 1) - v.at(i, j)
}

/// Largest `|divergence|` over the cells the projector relaxes.
///
/// Only interior fluid cells with at least one fluid neighbour count;
/// fully enclosed cells cannot be corrected and are ignored.
pub fn max_divergence(grid: &FluidGrid) -> f32 {
    let s = grid.s();
    let mut max = 0.0f32;
    for i in 1..grid.num_x() - 1 {
        for j in 1..grid.num_y() - 1 {
            if s.at(i, j) == SOLID {
                continue;
            }
            let open = s.at(i - 1, j) + s.at(i + 1, j) + s.at(i, j - 1) + s.at(i, j + 1);
            if open == 0.0 {
                continue;
            }
            let d = divergence(grid, i, j).abs();
            // NaN must surface rather than lose every comparison.
            if d.is_nan() {
                return f32::NAN;
            }
            max = max.max(d);
        }
    }
    max
}

/// Sum of smoke density over interior fluid cells.
pub fn total_smoke(grid: &FluidGrid) -> f32 {
    let m = grid.m();
    let mut total = 0.0f32;
    for i in 1..grid.num_x() - 1 {
        for j in 1..grid.num_y() - 1 {
            if grid.is_fluid(i, j) {
                total += m.at(i, j);
            }
        }
    }
    total
}

/// Number of fluid cells in the whole grid, border included.
pub fn fluid_cell_count(grid: &FluidGrid) -> usize {
    grid.s().as_slice().iter().filter(|&&x| x != SOLID).count()
}
