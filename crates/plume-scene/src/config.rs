//! Scene geometry and the grid it derives.

use plume_grid::GridConfig;

use crate::error::SceneError;

/// Geometry shared by every preset.
///
/// The domain is `domain_width() x domain_height` world units, split into
/// square cells of side `domain_height / resolution`.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Interior cells along the vertical axis. Default: 100.
    pub resolution: usize,
    /// Domain height in world units. Default: 1.0.
    pub domain_height: f32,
    /// Width over height. Default: 1280/720.
    pub aspect: f32,
    /// Fluid density. Default: 1000.
    pub density: f32,
    /// Obstacle disk radius. Paint overrides it. Default: 0.15.
    pub obstacle_radius: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            resolution: 100,
            domain_height: 1.0,
            aspect: 1280.0 / 720.0,
            density: 1000.0,
            obstacle_radius: 0.15,
        }
    }
}

impl SceneConfig {
    /// Set the vertical resolution.
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the width-over-height ratio.
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// Set the obstacle radius.
    pub fn with_obstacle_radius(mut self, radius: f32) -> Self {
        self.obstacle_radius = radius;
        self
    }

    /// Domain width in world units.
    pub fn domain_width(&self) -> f32 {
        self.domain_height * self.aspect
    }

    /// Cell side length.
    pub fn cell_size(&self) -> f32 {
        self.domain_height / self.resolution as f32
    }

    /// Check scene parameters, then the grid they derive.
    pub fn validate(&self) -> Result<(), SceneError> {
        self.grid_config().map(|_| ())
    }

    /// The grid configuration for this geometry.
    ///
    /// Interior counts are `floor(domain_width / h)` by
    /// `floor(domain_height / h)`.
    pub fn grid_config(&self) -> Result<GridConfig, SceneError> {
        if self.resolution == 0 {
            return Err(invalid("resolution must be at least 1".into()));
        }
        if !self.domain_height.is_finite() || self.domain_height <= 0.0 {
            return Err(invalid(format!(
                "domain_height must be finite and positive, got {}",
                self.domain_height
            )));
        }
        if !self.aspect.is_finite() || self.aspect <= 0.0 {
            return Err(invalid(format!(
                "aspect must be finite and positive, got {}",
                self.aspect
            )));
        }
        if !self.obstacle_radius.is_finite() || self.obstacle_radius < 0.0 {
            return Err(invalid(format!(
                "obstacle_radius must be finite and non-negative, got {}",
                self.obstacle_radius
            )));
        }

        let h = self.cell_size();
        let count_x = (self.domain_width() / h).floor() as usize;
        let count_y = (self.domain_height / h).floor() as usize;
        let config = GridConfig::new(self.density, count_x, count_y, h);
        config.validate()?;
        Ok(config)
    }

    /// Map a window pixel position (origin top-left) to domain coordinates
    /// (origin bottom-left).
    pub fn window_to_domain(&self, xpos: f32, ypos: f32, width: f32, height: f32) -> (f32, f32) {
        let x = xpos / width * self.domain_width();
        let y = (height - ypos) / height * self.domain_height;
        (x, y)
    }
}

fn invalid(reason: String) -> SceneError {
    SceneError::InvalidParameter { reason }
}
