//! Semi-Lagrangian advection of velocity and smoke.
//!
//! Both stages are double-buffered: the committed field is copied into its
//! scratch buffer, the sweep reads only committed values and writes only
//! scratch, and the buffers are swapped once the sweep is done. Faces and
//! cells the sweep skips keep their committed value through the copy.

use std::mem;

use plume_core::FieldKind;
use plume_grid::{Field2, FluidGrid, GridParts, SOLID};

use crate::sampler::sample_field;

/// Mean of the four `u` faces around the bottom face of cell `(i, j)`.
#[inline]
fn avg_u(u: &Field2, i: usize, j: usize) -> f32 {
    (u.at(i, j - 1) + u.at(i, j) + u.at(i + 1, j - 1) + u.at(i + 1, j)) * 0.25
}

/// Mean of the four `v` faces around the left face of cell `(i, j)`.
#[inline]
fn avg_v(v: &Field2, i: usize, j: usize) -> f32 {
    (v.at(i - 1, j) + v.at(i, j) + v.at(i - 1, j + 1) + v.at(i, j + 1)) * 0.25
}

/// Transport `u` and `v` along the current velocity field for `dt`.
///
/// A `u` face `(i, j)` is updated when both cells it separates horizontally
/// are fluid and `j < num_y - 1`; a `v` face when both cells it separates
/// vertically are fluid and `i < num_x - 1`. Each face is traced back from
/// its own position by `dt` times the local velocity (its own component plus
/// the four-face average of the other) and resampled there.
pub fn advect_velocity(grid: &mut FluidGrid, dt: f32) {
    let GridParts {
        layout,
        u,
        v,
        s,
        new_u,
        new_v,
        ..
    } = grid.parts_mut();
    new_u.copy_from(u);
    new_v.copy_from(v);

    let num_x = layout.num_x();
    let num_y = layout.num_y();
    let h = layout.h();
    let h2 = 0.5 * h;

    for i in 1..num_x {
        for j in 1..num_y {
            if s.at(i, j) != SOLID && s.at(i - 1, j) != SOLID && j < num_y - 1 {
                let x = i as f32 * h;
                let y = j as f32 * h + h2;
                let u_face = u.at(i, j);
                let v_face = avg_v(v, i, j);
                let x = x - dt * u_face;
                let y = y - dt * v_face;
                new_u[(i, j)] = sample_field(&layout, u, FieldKind::VelocityX, x, y);
            }

            if s.at(i, j) != SOLID && s.at(i, j - 1) != SOLID && i < num_x - 1 {
                let x = i as f32 * h + h2;
                let y = j as f32 * h;
                let u_face = avg_u(u, i, j);
                let v_face = v.at(i, j);
                let x = x - dt * u_face;
                let y = y - dt * v_face;
                new_v[(i, j)] = sample_field(&layout, v, FieldKind::VelocityY, x, y);
            }
        }
    }

    mem::swap(u, new_u);
    mem::swap(v, new_v);
}

/// Transport smoke density along the current velocity field for `dt`.
///
/// Every interior fluid cell traces its centre back by `dt` times the
/// cell-centre velocity (mean of its two `u` faces and its two `v` faces)
/// and resamples `m` there. Solid cells keep their value.
pub fn advect_scalar(grid: &mut FluidGrid, dt: f32) {
    let GridParts {
        layout,
        u,
        v,
        s,
        m,
        new_m,
        ..
    } = grid.parts_mut();
    new_m.copy_from(m);

    let num_x = layout.num_x();
    let num_y = layout.num_y();

    for i in 1..num_x - 1 {
        for j in 1..num_y - 1 {
            if s.at(i, j) == SOLID {
                continue;
            }
            let uc = (u.at(i, j) + u.at(i + 1, j)) * 0.5;
            let vc = (v.at(i, j) + v.at(i, j + 1)) * 0.5;
            let (cx, cy) = layout.cell_center(i, j);
            let x = cx - dt * uc;
            let y = cy - dt * vc;
            new_m[(i, j)] = sample_field(&layout, m, FieldKind::Scalar, x, y);
        }
    }

    mem::swap(m, new_m);
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_test_utils::{assert_close, open_box, seeded_smoke, walled_box};

    #[test]
    fn zero_velocity_leaves_everything_in_place() {
        let mut g = open_box(6, 5, 0.5);
        seeded_smoke(&mut g, 17);
        let before = g.clone();
        advect_velocity(&mut g, 0.1);
        advect_scalar(&mut g, 0.1);
        assert_eq!(g.u(), before.u());
        assert_eq!(g.v(), before.v());
        assert_eq!(g.m(), before.m());
    }

    #[test]
    fn uniform_flow_shifts_smoke_downstream() {
        // h = 1 and u * dt = 1: every cell pulls from its left neighbour.
        let mut g = open_box(6, 3, 1.0);
        g.u_mut().fill(1.0);
        for i in 0..g.num_x() {
            for j in 0..g.num_y() {
                g.m_mut().set(i, j, i as f32);
            }
        }
        advect_scalar(&mut g, 1.0);
        for i in 2..g.num_x() - 1 {
            assert_close(g.m().at(i, 2), (i - 1) as f32, 1e-5);
        }
        // The upstream-most interior cell clamps to the domain's lower edge.
        assert_close(g.m().at(1, 2), 0.5, 1e-5);
    }

    #[test]
    fn uniform_velocity_is_preserved() {
        let mut g = open_box(5, 5, 1.0);
        g.u_mut().fill(0.3);
        g.v_mut().fill(-0.2);
        advect_velocity(&mut g, 0.5);
        for &x in g.u().as_slice() {
            assert_close(x, 0.3, 1e-6);
        }
        for &x in g.v().as_slice() {
            assert_close(x, -0.2, 1e-6);
        }
    }

    #[test]
    fn solid_cells_keep_their_smoke() {
        let mut g = walled_box(4, 4, 1.0);
        g.set_solid(2, 2);
        g.m_mut().set(2, 2, 0.0);
        g.u_mut().fill(1.0);
        advect_scalar(&mut g, 0.5);
        assert_eq!(g.m().at(2, 2), 0.0);
        // Border ring is never swept.
        assert_eq!(g.m().at(0, 3), 1.0);
    }

    #[test]
    fn faces_between_solid_cells_are_not_advected() {
        let mut g = walled_box(3, 3, 1.0);
        g.u_mut().fill(2.0);
        g.v_mut().fill(2.0);
        // Left wall face and floor face each border one solid cell.
        g.u_mut().set(1, 2, 5.0);
        g.v_mut().set(2, 1, 5.0);
        advect_velocity(&mut g, 0.25);
        assert_eq!(g.u().at(1, 2), 5.0);
        assert_eq!(g.v().at(2, 1), 5.0);
    }

    #[test]
    fn sweep_reads_committed_values_only() {
        // A gradient in u sampled with a backward trace: results must not
        // depend on whether earlier faces in the sweep were already rewritten.
        let mut g = open_box(6, 3, 1.0);
        for i in 0..g.num_x() {
            for j in 0..g.num_y() {
                g.u_mut().set(i, j, 0.1 * i as f32);
            }
        }
        let committed = g.u().clone();
        advect_velocity(&mut g, 1.0);
        let layout = *committed.layout();
        for i in 2..g.num_x() {
            let x = i as f32 - committed.at(i, 2);
            let y = 2.5;
            let expected = sample_field(&layout, &committed, FieldKind::VelocityX, x, y);
            assert_close(g.u().at(i, 2), expected, 1e-6);
        }
    }

    #[test]
    fn averages_use_the_four_surrounding_faces() {
        let mut g = open_box(3, 3, 1.0);
        g.u_mut().set(2, 1, 1.0);
        g.u_mut().set(2, 2, 2.0);
        g.u_mut().set(3, 1, 3.0);
        g.u_mut().set(3, 2, 4.0);
        assert_close(avg_u(g.u(), 2, 2), 2.5, 1e-6);

        g.v_mut().set(1, 2, 1.0);
        g.v_mut().set(2, 2, 1.0);
        g.v_mut().set(1, 3, 1.0);
        g.v_mut().set(2, 3, 5.0);
        assert_close(avg_v(g.v(), 2, 2), 2.0, 1e-6);
    }
}
