//! Zero-gradient extrapolation across the outer border.

use plume_grid::{FluidGrid, GridParts};

/// Copy velocities one layer outward at the domain edge.
///
/// For every column `i`, `u` on rows `0` and `num_y - 1` takes the value of
/// the adjacent interior row. For every row `j`, `v` on columns `0` and
/// `num_x - 1` takes the value of the adjacent interior column. Interior
/// faces are not read or written otherwise.
pub fn extrapolate(grid: &mut FluidGrid) {
    let GridParts { layout, u, v, .. } = grid.parts_mut();
    let num_x = layout.num_x();
    let num_y = layout.num_y();

    for i in 0..num_x {
        u[(i, 0)] = u.at(i, 1);
        u[(i, num_y - 1)] = u.at(i, num_y - 2);
    }
    for j in 0..num_y {
        v[(0, j)] = v.at(1, j);
        v[(num_x - 1, j)] = v.at(num_x - 2, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_test_utils::{open_box, seeded_velocity};

    #[test]
    fn edges_copy_their_inner_neighbour() {
        let mut g = open_box(3, 4, 1.0);
        seeded_velocity(&mut g, 7, 2.0);
        extrapolate(&mut g);
        for i in 0..g.num_x() {
            assert_eq!(g.u().at(i, 0), g.u().at(i, 1));
            assert_eq!(g.u().at(i, 5), g.u().at(i, 4));
        }
        for j in 0..g.num_y() {
            assert_eq!(g.v().at(0, j), g.v().at(1, j));
            assert_eq!(g.v().at(4, j), g.v().at(3, j));
        }
    }

    #[test]
    fn interior_faces_unchanged() {
        let mut g = open_box(3, 3, 1.0);
        seeded_velocity(&mut g, 11, 1.0);
        let before = g.clone();
        extrapolate(&mut g);
        for i in 0..g.num_x() {
            for j in 1..g.num_y() - 1 {
                assert_eq!(g.u().at(i, j), before.u().at(i, j));
            }
        }
        for i in 1..g.num_x() - 1 {
            for j in 0..g.num_y() {
                assert_eq!(g.v().at(i, j), before.v().at(i, j));
            }
        }
    }

    #[test]
    fn idempotent() {
        let mut g = open_box(2, 5, 1.0);
        seeded_velocity(&mut g, 5, 1.0);
        extrapolate(&mut g);
        let once = g.clone();
        extrapolate(&mut g);
        assert_eq!(g.u(), once.u());
        assert_eq!(g.v(), once.v());
    }
}
