//! Padded grid dimensions and the flat index mapping.

/// Stored grid dimensions and cell size.
///
/// `num_x` and `num_y` include the one-cell border on every side, so a
/// caller asking for `count_x` interior cells gets `num_x = count_x + 2`.
/// Flat storage is column-major in `j`: `index(i, j) = i * num_y + j`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    num_x: usize,
    num_y: usize,
    h: f32,
}

impl GridLayout {
    /// Build a layout from interior cell counts and cell size.
    ///
    /// Inputs are not validated here; `GridConfig::validate()` runs first.
    pub(crate) fn padded(count_x: usize, count_y: usize, h: f32) -> Self {
        Self {
            num_x: count_x + 2,
            num_y: count_y + 2,
            h,
        }
    }

    /// Stored cells along x, border included.
    pub fn num_x(&self) -> usize {
        self.num_x
    }

    /// Stored cells along y, border included.
    pub fn num_y(&self) -> usize {
        self.num_y
    }

    /// Uniform cell size.
    pub fn h(&self) -> f32 {
        self.h
    }

    /// Total stored cells, `num_x * num_y`.
    pub fn cell_count(&self) -> usize {
        self.num_x * self.num_y
    }

    /// Flat index of cell `(i, j)`.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(
            i < self.num_x && j < self.num_y,
            "cell ({i}, {j}) outside {}x{} grid",
            self.num_x,
            self.num_y
        );
        i * self.num_y + j
    }

    /// Inverse of [`index`](Self::index).
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx / self.num_y, idx % self.num_y)
    }

    /// Physical position of the centre of cell `(i, j)`.
    pub fn cell_center(&self, i: usize, j: usize) -> (f32, f32) {
        (
            (i as f32 + 0.5) * self.h,
            (j as f32 + 0.5) * self.h,
        )
    }

    /// Whether `(i, j)` lies on the one-cell padding ring.
    pub fn is_border(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i + 1 == self.num_x || j + 1 == self.num_y
    }
}
