//! [`Field2`]: a flat `f32` array addressed by `(i, j)`.

use std::ops::{Index, IndexMut};

use crate::layout::GridLayout;

/// One per-cell array of a [`FluidGrid`](crate::FluidGrid).
///
/// Storage is a single `Vec<f32>` in `i * num_y + j` order. Indexed access
/// via [`at`](Self::at) or `field[(i, j)]` asserts bounds in debug builds;
/// [`as_slice`](Self::as_slice) exposes the raw buffer for renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct Field2 {
    layout: GridLayout,
    data: Vec<f32>,
}

impl Field2 {
    /// Allocate a field covering `layout`, every cell set to `fill`.
    pub fn new(layout: GridLayout, fill: f32) -> Self {
        Self {
            layout,
            data: vec![fill; layout.cell_count()],
        }
    }

    /// The layout this field was allocated for.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Value at cell `(i, j)`.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> f32 {
        self.data[self.layout.index(i, j)]
    }

    /// Mutable reference to cell `(i, j)`.
    #[inline]
    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        let idx = self.layout.index(i, j);
        &mut self.data[idx]
    }

    /// Overwrite cell `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        *self.at_mut(i, j) = value;
    }

    /// Flat read-only view, `i * num_y + j` order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Flat mutable view, `i * num_y + j` order.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Number of stored cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: layouts have at least 3x3 cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Copy every cell from `other`, which must share this field's layout.
    pub fn copy_from(&mut self, other: &Field2) {
        debug_assert_eq!(self.layout, other.layout, "layout mismatch in copy_from");
        self.data.copy_from_slice(&other.data);
    }

    /// Iterate `((i, j), value)` over every stored cell.
    pub fn iter_cells(&self) -> impl Iterator<Item = ((usize, usize), f32)> + '_ {
        let layout = self.layout;
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, &v)| (layout.coords(idx), v))
    }
}

impl Index<(usize, usize)> for Field2 {
    type Output = f32;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f32 {
        &self.data[self.layout.index(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Field2 {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f32 {
        let idx = self.layout.index(i, j);
        &mut self.data[idx]
    }
}
