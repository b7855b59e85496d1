//! Pressure projection by Gauss-Seidel relaxation.
//!
//! Each pass walks the interior cells in `i`-major order and removes the
//! local divergence of one cell at a time, spreading the correction over
//! the faces that border fluid. Updates are applied in place, so later
//! cells in the same pass already see earlier corrections. No matrix is
//! built; one pass is O(cells).

use plume_grid::{FluidGrid, GridParts, SOLID};

/// Over-relaxation factor applied to every local correction.
pub const OVER_RELAXATION: f32 = 1.9;

/// Run `iterations` relaxation passes and accumulate pressure into `p`.
///
/// For each fluid cell `(i, j)` with `i` in `1..num_x - 1` and `j` in
/// `1..num_y - 1`:
///
/// ```text
/// s     = s[i-1,j] + s[i+1,j] + s[i,j-1] + s[i,j+1]
/// div   = u[i+1,j] - u[i,j] + v[i,j+1] - v[i,j]
/// delta = -div / s * OVER_RELAXATION
/// p[i,j]   += density * h / dt * delta
/// u[i,j]   -= s[i-1,j] * delta      u[i+1,j] += s[i+1,j] * delta
/// v[i,j]   -= s[i,j-1] * delta      v[i,j+1] += s[i,j+1] * delta
/// ```
///
/// Solid cells and cells whose four neighbours are all solid are skipped.
/// `iterations == 0` leaves the grid untouched.
pub fn solve_incompressibility(grid: &mut FluidGrid, iterations: usize, dt: f32) {
    let GridParts {
        layout,
        density,
        u,
        v,
        p,
        s,
        ..
    } = grid.parts_mut();
    let num_x = layout.num_x();
    let num_y = layout.num_y();
    let cp = density * layout.h() / dt;

    for _ in 0..iterations {
        for i in 1..num_x - 1 {
            for j in 1..num_y - 1 {
                if s.at(i, j) == SOLID {
                    continue;
                }

                let sx0 = s.at(i - 1, j);
                let sx1 = s.at(i + 1, j);
                let sy0 = s.at(i, j - 1);
                let sy1 = s.at(i, j + 1);
                let s_total = sx0 + sx1 + sy0 + sy1;
                if s_total == 0.0 {
                    continue;
                }

                let div = u.at(i + 1, j) - u.at(i, j) + v.at(i, j + 1) - v.at(i, j);
                let delta = -div / s_total * OVER_RELAXATION;
                p[(i, j)] += cp * delta;

                u[(i, j)] -= sx0 * delta;
                u[(i + 1, j)] += sx1 * delta;
                v[(i, j)] -= sy0 * delta;
                v[(i, j + 1)] += sy1 * delta;
            }
        }
    }
}
