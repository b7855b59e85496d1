//! Grid configuration and validation.

use plume_core::ConfigError;

use crate::layout::GridLayout;

/// Input for constructing a [`FluidGrid`](crate::FluidGrid).
///
/// `count_x` and `count_y` are interior cells; the grid pads one border
/// cell on each side. [`validate()`](Self::validate) runs before any
/// allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Fluid density, used to scale pressure. Default: 1000.
    pub density: f32,
    /// Interior cells along x. Default: 100.
    pub count_x: usize,
    /// Interior cells along y. Default: 100.
    pub count_y: usize,
    /// Uniform cell size. Default: 0.01.
    pub h: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            density: 1000.0,
            count_x: 100,
            count_y: 100,
            h: 0.01,
        }
    }
}

impl GridConfig {
    /// Shorthand constructor mirroring the field order.
    pub fn new(density: f32, count_x: usize, count_y: usize, h: f32) -> Self {
        Self {
            density,
            count_x,
            count_y,
            h,
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidDimension`] if either count is zero.
    /// - [`ConfigError::InvalidCellSize`] if `h` is not finite and positive.
    /// - [`ConfigError::InvalidDensity`] if `density` is not finite and positive.
    /// - [`ConfigError::CellCountOverflow`] if the padded cell count overflows,
    ///   or one field of that many `f32`s would exceed `isize::MAX` bytes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count_x == 0 {
            return Err(ConfigError::InvalidDimension {
                axis: "count_x",
                value: self.count_x,
            });
        }
        if self.count_y == 0 {
            return Err(ConfigError::InvalidDimension {
                axis: "count_y",
                value: self.count_y,
            });
        }
        if !(self.h > 0.0) || !self.h.is_finite() {
            return Err(ConfigError::InvalidCellSize { value: self.h });
        }
        if !(self.density > 0.0) || !self.density.is_finite() {
            return Err(ConfigError::InvalidDensity {
                value: self.density,
            });
        }
        let overflow = || ConfigError::CellCountOverflow {
            count_x: self.count_x,
            count_y: self.count_y,
        };
        let num_x = self.count_x.checked_add(2).ok_or_else(overflow)?;
        let num_y = self.count_y.checked_add(2).ok_or_else(overflow)?;
        let cells = num_x.checked_mul(num_y).ok_or_else(overflow)?;
        let bytes = cells
            .checked_mul(std::mem::size_of::<f32>())
            .ok_or_else(overflow)?;
        if bytes > isize::MAX as usize {
            return Err(overflow());
        }
        Ok(())
    }

    /// Validate and produce the padded layout.
    pub(crate) fn layout(&self) -> Result<GridLayout, ConfigError> {
        self.validate()?;
        Ok(GridLayout::padded(self.count_x, self.count_y, self.h))
    }
}
