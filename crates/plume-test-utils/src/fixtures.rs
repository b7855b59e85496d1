//! Reusable grid fixtures.
//!
//! All fixtures use density 1000 and panic on invalid dimensions; they are
//! for tests only.

use plume_grid::{FluidGrid, GridConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DENSITY: f32 = 1000.0;

fn blank(count_x: usize, count_y: usize, h: f32) -> FluidGrid {
    FluidGrid::new(&GridConfig::new(DENSITY, count_x, count_y, h))
        .unwrap_or_else(|e| panic!("fixture grid {count_x}x{count_y} rejected: {e}"))
}

/// Every cell fluid, border included.
pub fn open_box(count_x: usize, count_y: usize, h: f32) -> FluidGrid {
    let mut g = blank(count_x, count_y, h);
    g.fill_mask(|_, _| true);
    g
}

/// Solid border ring around a fluid interior.
pub fn walled_box(count_x: usize, count_y: usize, h: f32) -> FluidGrid {
    let mut g = blank(count_x, count_y, h);
    let layout = *g.layout();
    g.fill_mask(|i, j| !layout.is_border(i, j));
    g
}

/// Solid floor and side walls, open top.
pub fn tank(count_x: usize, count_y: usize, h: f32) -> FluidGrid {
    let mut g = blank(count_x, count_y, h);
    let num_x = g.num_x();
    g.fill_mask(|i, j| !(i == 0 || i == num_x - 1 || j == 0));
    g
}

/// Overwrite every `u` and `v` value with a uniform sample in
/// `[-amplitude, amplitude)`.
pub fn seeded_velocity(grid: &mut FluidGrid, seed: u64, amplitude: f32) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for x in grid.u_mut().as_mut_slice() {
        *x = rng.gen_range(-amplitude..amplitude);
    }
    for x in grid.v_mut().as_mut_slice() {
        *x = rng.gen_range(-amplitude..amplitude);
    }
}

/// Overwrite every smoke value with a uniform sample in `[0, 1)`.
pub fn seeded_smoke(grid: &mut FluidGrid, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for x in grid.m_mut().as_mut_slice() {
        *x = rng.gen::<f32>();
    }
}
