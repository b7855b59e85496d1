//! Scene presets and the display flags they select.

use std::fmt;

/// Built-in scene presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Closed tank under gravity.
    Tank,
    /// Horizontal inflow past a disk, smoke stripe at mid-height.
    WindTunnel,
    /// Weightless canvas painted by dragging the obstacle.
    Paint,
    /// Wind tunnel with a finer timestep and more relaxation passes.
    HiresTunnel,
}

impl SceneKind {
    /// All presets, in key order.
    pub const ALL: [SceneKind; 4] = [
        Self::Tank,
        Self::WindTunnel,
        Self::Paint,
        Self::HiresTunnel,
    ];

    /// Preset bound to number key `index` (0 to 3).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Number key of this preset.
    pub fn index(self) -> usize {
        match self {
            Self::Tank => 0,
            Self::WindTunnel => 1,
            Self::Paint => 2,
            Self::HiresTunnel => 3,
        }
    }

    /// Short name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tank => "tank",
            Self::WindTunnel => "wind_tunnel",
            Self::Paint => "paint",
            Self::HiresTunnel => "hires_tunnel",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which layers a renderer should draw.
///
/// The scene only sets these; nothing in the solver reads them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayFlags {
    /// Draw the obstacle disk.
    pub obstacle: bool,
    /// Draw streamlines.
    pub streamlines: bool,
    /// Draw face velocities.
    pub velocities: bool,
    /// Colour cells by pressure.
    pub pressure: bool,
    /// Shade cells by smoke density.
    pub smoke: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            obstacle: false,
            streamlines: false,
            velocities: false,
            pressure: false,
            smoke: true,
        }
    }
}

impl DisplayFlags {
    /// Flags a preset starts with. The obstacle flag is raised separately
    /// once an obstacle is placed.
    pub fn for_kind(kind: SceneKind) -> Self {
        let (pressure, smoke) = match kind {
            SceneKind::Tank => (true, false),
            SceneKind::WindTunnel | SceneKind::Paint => (false, true),
            SceneKind::HiresTunnel => (true, true),
        };
        Self {
            pressure,
            smoke,
            ..Self::default()
        }
    }
}
