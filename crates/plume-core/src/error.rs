//! Error types for the Plume fluid solver.
//!
//! The solver core has a single fatal error class: an invalid grid
//! configuration, rejected at construction before any array is allocated.
//! Everything that can happen during a step is a degenerate-but-valid
//! numeric state and is never reported as an error.

use std::error::Error;
use std::fmt;

/// Invalid grid configuration, detected before allocation.
///
/// Returned by `GridConfig::validate()` and `FluidGrid::new()`.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// An interior cell count is zero.
    InvalidDimension {
        /// Which axis was rejected (`"count_x"` or `"count_y"`).
        axis: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// The cell size `h` is NaN, infinite, zero, or negative.
    InvalidCellSize {
        /// The rejected value.
        value: f32,
    },
    /// The fluid density is NaN, infinite, zero, or negative.
    InvalidDensity {
        /// The rejected value.
        value: f32,
    },
    /// The padded cell count `(count_x + 2) * (count_y + 2)` overflows `usize`,
    /// or a field of that many `f32`s exceeds `isize::MAX` bytes.
    CellCountOverflow {
        /// Requested interior cells along x.
        count_x: usize,
        /// Requested interior cells along y.
        count_y: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { axis, value } => {
                write!(f, "{axis} must be at least 1, got {value}")
            }
            Self::InvalidCellSize { value } => {
                write!(f, "cell size must be finite and positive, got {value}")
            }
            Self::InvalidDensity { value } => {
                write!(f, "density must be finite and positive, got {value}")
            }
            Self::CellCountOverflow { count_x, count_y } => {
                write!(f, "padded grid {count_x}+2 x {count_y}+2 is too large to allocate")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_axis() {
        let e = ConfigError::InvalidDimension {
            axis: "count_y",
            value: 0,
        };
        assert_eq!(e.to_string(), "count_y must be at least 1, got 0");
    }

    #[test]
    fn display_reports_cell_size() {
        let e = ConfigError::InvalidCellSize { value: -0.5 };
        assert!(e.to_string().contains("-0.5"));
    }

    #[test]
    fn is_std_error() {
        let e: Box<dyn Error> = Box::new(ConfigError::InvalidDensity { value: 0.0 });
        assert!(e.source().is_none());
    }
}
