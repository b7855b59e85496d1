//! Field selection for staggered-grid sampling.

/// Which stored field a sample reads from.
///
/// Each kind lives at a different location inside its cell, so sampling
/// shifts the query point by a kind-specific half-cell offset before
/// interpolating:
///
/// | Kind        | Stored at             | Offset `(dx, dy)` |
/// |-------------|-----------------------|-------------------|
/// | `VelocityX` | left face centre      | `(0, h/2)`        |
/// | `VelocityY` | bottom face centre    | `(h/2, 0)`        |
/// | `Scalar`    | cell centre           | `(h/2, h/2)`      |
///
/// `Scalar` always reads the smoke density field, never the solid mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Horizontal velocity `u`.
    VelocityX,
    /// Vertical velocity `v`.
    VelocityY,
    /// Smoke density `m`.
    Scalar,
}

impl FieldKind {
    /// All sampleable kinds, in declaration order.
    pub const ALL: [FieldKind; 3] = [Self::VelocityX, Self::VelocityY, Self::Scalar];

    /// Half-cell offset `(dx, dy)` of the stored sample location for cell size `h`.
    pub fn staggered_offset(self, h: f32) -> (f32, f32) {
        let half = 0.5 * h;
        match self {
            Self::VelocityX => (0.0, half),
            Self::VelocityY => (half, 0.0),
            Self::Scalar => (half, half),
        }
    }

}
