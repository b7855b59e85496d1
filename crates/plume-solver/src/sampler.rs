//! Bilinear sampling of staggered fields at continuous positions.
//!
//! Positions are physical coordinates: cell `(i, j)` spans
//! `[i*h, (i+1)*h) x [j*h, (j+1)*h)`. The query is clamped to
//! `[h, num_x*h] x [h, num_y*h]`, shifted by the field's staggered offset,
//! and blended from the four surrounding stored values.

use plume_core::FieldKind;
use plume_grid::{Field2, FluidGrid, GridLayout};

/// Sample `kind` from `grid` at `(x, y)`.
///
/// `FieldKind::Scalar` reads smoke density.
pub fn sample(grid: &FluidGrid, x: f32, y: f32, kind: FieldKind) -> f32 {
    sample_field(grid.layout(), grid.field(kind), kind, x, y)
}

/// Sample an explicit backing `field` using `kind`'s staggered offset.
///
/// Used by the advection stages, which hold split borrows of the grid and
/// cannot go through [`sample`]. `field` must share `layout`.
pub fn sample_field(layout: &GridLayout, field: &Field2, kind: FieldKind, x: f32, y: f32) -> f32 {
    let h = layout.h();
    let h1 = 1.0 / h;
    let num_x = layout.num_x();
    let num_y = layout.num_y();

    let x = x.min(num_x as f32 * h).max(h);
    let y = y.min(num_y as f32 * h).max(h);

    let (dx, dy) = kind.staggered_offset(h);
    let (x0, tx, x1) = axis_stencil(x - dx, h, h1, num_x);
    let (y0, ty, y1) = axis_stencil(y - dy, h, h1, num_y);

    let sx = 1.0 - tx;
    let sy = 1.0 - ty;

    sx * sy * field.at(x0, y0)
        + tx * sy * field.at(x1, y0)
        + tx * ty * field.at(x1, y1)
        + sx * ty * field.at(x0, y1)
}

/// Lower index, fractional weight, and upper index along one axis.
///
/// Both indices are clamped to `n - 1` so the domain's far edge never
/// reads past the last stored cell.
#[inline]
fn axis_stencil(pos: f32, h: f32, h1: f32, n: usize) -> (usize, f32, usize) {
    let lo = ((pos * h1).floor() as usize).min(n - 1);
    let t = (pos - lo as f32 * h) * h1;
    let hi = (lo + 1).min(n - 1);
    (lo, t, hi)
}
