//! The scene: a grid, its step parameters, and a movable obstacle.

use plume_grid::FluidGrid;
use plume_solver::{step_with_metrics, StepMetrics, StepParams};

use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::kind::{DisplayFlags, SceneKind};

/// Horizontal inflow speed of the tunnel presets.
const TUNNEL_INFLOW: f32 = 2.0;
/// Smoke stripe height as a fraction of `num_y`.
const STRIPE_FRACTION: f32 = 0.1;
const PAINT_OBSTACLE_RADIUS: f32 = 0.1;

/// A running simulation with one of the [`SceneKind`] presets applied.
///
/// The public fields are read on every [`simulate`](Self::simulate) call
/// and may be tuned between frames.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Vertical acceleration passed to each step.
    pub gravity: f32,
    /// Timestep.
    pub dt: f32,
    /// Pressure relaxation passes per step.
    pub iterations: usize,
    /// Over-relaxation factor shown to the user. The solver always uses
    /// [`OVER_RELAXATION`](plume_solver::OVER_RELAXATION).
    pub over_relaxation: f32,
    /// Obstacle disk radius used by [`set_obstacle`](Self::set_obstacle).
    pub obstacle_radius: f32,
    /// Layers the renderer should draw.
    pub flags: DisplayFlags,
    kind: SceneKind,
    config: SceneConfig,
    frame: u64,
    paused: bool,
    obstacle: (f32, f32),
    grid: FluidGrid,
}

impl Scene {
    /// Build `kind` on the default geometry.
    pub fn new(kind: SceneKind) -> Result<Self, SceneError> {
        Self::with_config(kind, SceneConfig::default())
    }

    /// Build `kind` on a custom geometry.
    ///
    /// # Errors
    ///
    /// [`SceneError::InvalidParameter`] for bad geometry, or
    /// [`SceneError::Grid`] if the derived grid is rejected.
    pub fn with_config(kind: SceneKind, config: SceneConfig) -> Result<Self, SceneError> {
        let grid = FluidGrid::new(&config.grid_config()?)?;
        let mut scene = Self {
            gravity: 0.0,
            dt: 1.0 / 60.0,
            iterations: 40,
            over_relaxation: 1.9,
            obstacle_radius: config.obstacle_radius,
            flags: DisplayFlags::default(),
            kind,
            config,
            frame: 0,
            paused: false,
            obstacle: (0.0, 0.0),
            grid,
        };
        scene.apply_preset(kind);
        Ok(scene)
    }

    /// Replace the grid with a fresh one and apply `kind`.
    ///
    /// The frame counter, pause state, and obstacle position carry over.
    pub fn reset(&mut self, kind: SceneKind) -> Result<(), SceneError> {
        self.grid = FluidGrid::new(&self.config.grid_config()?)?;
        self.apply_preset(kind);
        Ok(())
    }

    fn apply_preset(&mut self, kind: SceneKind) {
        self.kind = kind;
        self.obstacle_radius = self.config.obstacle_radius;
        self.over_relaxation = 1.9;
        self.dt = 1.0 / 60.0;
        self.iterations = 40;
        self.flags = DisplayFlags::for_kind(kind);

        let num_x = self.grid.num_x();
        let num_y = self.grid.num_y();
        match kind {
            SceneKind::Tank => {
                self.grid
                    .fill_mask(|i, j| !(i == 0 || i == num_x - 1 || j == 0));
                self.gravity = -9.81;
            }
            SceneKind::WindTunnel | SceneKind::HiresTunnel => {
                self.grid
                    .fill_mask(|i, j| !(i == 0 || j == 0 || j == num_y - 1));
                for j in 0..num_y {
                    self.grid.u_mut().set(1, j, TUNNEL_INFLOW);
                }

                let ny = num_y as f32;
                let half_stripe = 0.5 * STRIPE_FRACTION * ny;
                let min_j = (0.5 * ny - half_stripe).floor() as usize;
                let max_j = (0.5 * ny + half_stripe).floor() as usize;
                for j in min_j..max_j {
                    self.grid.m_mut().set(0, j, 0.0);
                }

                self.set_obstacle(0.4, 0.5, true);
                self.gravity = 0.0;
                if kind == SceneKind::HiresTunnel {
                    self.dt = 1.0 / 120.0;
                    self.iterations = 100;
                }
            }
            SceneKind::Paint => {
                self.gravity = 0.0;
                self.over_relaxation = 1.0;
                self.obstacle_radius = PAINT_OBSTACLE_RADIUS;
            }
        }

        log::debug!(
            "scene {kind}: {}x{} cells, h = {}, dt = {}, {} iterations",
            num_x,
            num_y,
            self.grid.h(),
            self.dt,
            self.iterations
        );
    }

    /// Move the obstacle disk to `(x, y)` in domain coordinates.
    ///
    /// Every cell in `1..num_x-2` by `1..num_y-2` is first reopened to
    /// fluid. Cells whose centre lies strictly inside the disk become
    /// solid, receive fresh smoke, and have their four faces set to the
    /// obstacle velocity: the displacement over `dt`, or zero when `reset`.
    pub fn set_obstacle(&mut self, x: f32, y: f32, reset: bool) {
        let (vx, vy) = if reset {
            (0.0, 0.0)
        } else {
            (
                (x - self.obstacle.0) / self.dt,
                (y - self.obstacle.1) / self.dt,
            )
        };
        self.obstacle = (x, y);

        let r2 = self.obstacle_radius * self.obstacle_radius;
        let layout = *self.grid.layout();
        let smoke = if self.kind == SceneKind::Paint {
            0.5 + 0.5 * (0.1 * self.frame as f32).sin()
        } else {
            1.0
        };

        for i in 1..self.grid.num_x().saturating_sub(2) {
            for j in 1..self.grid.num_y().saturating_sub(2) {
                self.grid.set_fluid(i, j);

                let (cx, cy) = layout.cell_center(i, j);
                let dx = cx - x;
                let dy = cy - y;
                if dx * dx + dy * dy < r2 {
                    self.grid.set_solid(i, j);
                    self.grid.m_mut().set(i, j, smoke);
                    let u = self.grid.u_mut();
                    u.set(i, j, vx);
                    u.set(i + 1, j, vx);
                    let v = self.grid.v_mut();
                    v.set(i, j, vy);
                    v.set(i, j + 1, vy);
                }
            }
        }

        self.flags.obstacle = true;
        if reset {
            log::debug!("obstacle placed at ({x}, {y}) in {}", self.kind);
        }
    }

    /// Parameters for the next step.
    pub fn params(&self) -> StepParams {
        StepParams::new(self.dt, self.gravity, self.iterations)
    }

    /// Advance one frame unless paused.
    ///
    /// Returns the step metrics, or `None` while paused.
    pub fn simulate(&mut self) -> Option<StepMetrics> {
        if self.paused {
            return None;
        }
        let params = self.params();
        let metrics = step_with_metrics(&mut self.grid, &params);
        self.frame += 1;
        Some(metrics)
    }

    /// Flip the pause state and return the new one.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Whether [`simulate`](Self::simulate) is currently a no-op.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Active preset.
    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    /// Current obstacle centre.
    pub fn obstacle(&self) -> (f32, f32) {
        self.obstacle
    }

    /// Geometry the grid was built from.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The simulation state.
    pub fn grid(&self) -> &FluidGrid {
        &self.grid
    }

    /// Mutable simulation state, for custom masks and dye.
    pub fn grid_mut(&mut self) -> &mut FluidGrid {
        &mut self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coarse() -> SceneConfig {
        SceneConfig::default().with_resolution(50)
    }

    #[test]
    fn default_scene_dimensions() {
        let s = Scene::new(SceneKind::Tank).unwrap();
        assert_eq!(s.grid().num_x(), 179);
        assert_eq!(s.grid().num_y(), 102);
    }

    #[test]
    fn tank_has_floor_and_side_walls() {
        let s = Scene::with_config(SceneKind::Tank, coarse()).unwrap();
        let g = s.grid();
        let (nx, ny) = (g.num_x(), g.num_y());
        assert!(!g.is_fluid(0, 10));
        assert!(!g.is_fluid(nx - 1, 10));
        assert!(!g.is_fluid(10, 0));
        assert!(g.is_fluid(10, ny - 1), "tank is open at the top");
        assert!(g.is_fluid(10, 10));
        assert_eq!(s.gravity, -9.81);
        assert!(s.flags.pressure && !s.flags.smoke && !s.flags.obstacle);
    }

    #[test]
    fn tunnel_inflow_and_smoke_stripe() {
        let s = Scene::with_config(SceneKind::WindTunnel, coarse()).unwrap();
        let g = s.grid();
        let ny = g.num_y();
        assert_eq!(ny, 52);
        for j in 0..ny {
            assert_eq!(g.u().at(1, j), TUNNEL_INFLOW);
        }
        // pipe height 5.2 around 26: rows 23..28.
        for j in 0..ny {
            let expected = if (23..28).contains(&j) { 0.0 } else { 1.0 };
            assert_eq!(g.m().at(0, j), expected, "m(0, {j})");
        }
        assert!(!g.is_fluid(0, 5));
        assert!(!g.is_fluid(5, 0));
        assert!(!g.is_fluid(5, ny - 1));
    }

    #[test]
    fn tunnel_places_obstacle() {
        let s = Scene::with_config(SceneKind::WindTunnel, coarse()).unwrap();
        assert_eq!(s.obstacle(), (0.4, 0.5));
        assert!(s.flags.obstacle);
        // Cell (19, 24) has centre (0.39, 0.49).
        assert!(!s.grid().is_fluid(19, 24));
        assert_eq!(s.grid().u().at(19, 24), 0.0);
        assert_eq!(s.gravity, 0.0);
        assert_eq!(s.iterations, 40);
    }

    #[test]
    fn hires_tunnel_settings() {
        let s = Scene::with_config(SceneKind::HiresTunnel, coarse()).unwrap();
        assert_eq!(s.iterations, 100);
        assert!((s.dt - 1.0 / 120.0).abs() < 1e-9);
        assert!(s.flags.pressure && s.flags.smoke);
        assert_eq!(s.grid().u().at(1, 10), TUNNEL_INFLOW);
    }

    #[test]
    fn paint_starts_closed_and_opens_on_first_stroke() {
        let mut s = Scene::with_config(SceneKind::Paint, coarse()).unwrap();
        assert_eq!(s.obstacle_radius, PAINT_OBSTACLE_RADIUS);
        assert_eq!(s.over_relaxation, 1.0);
        assert!(!s.grid().is_fluid(10, 10));

        s.set_obstacle(0.5, 0.5, true);
        let g = s.grid();
        assert!(g.is_fluid(10, 10));
        // Cell (24, 24) centre (0.49, 0.49) lies in the disk.
        assert!(!g.is_fluid(24, 24));
        assert_eq!(g.m().at(24, 24), 0.5);
        // The last two columns are outside the reopened band.
        assert!(!g.is_fluid(g.num_x() - 2, 10));
    }

    #[test]
    fn dragging_sets_obstacle_velocity() {
        let mut s = Scene::with_config(SceneKind::WindTunnel, coarse()).unwrap();
        s.set_obstacle(0.42, 0.5, false);
        let expected = 0.02 / s.dt;
        // Cell (20, 24) centre (0.41, 0.49) is inside the moved disk.
        let g = s.grid();
        assert!(!g.is_fluid(20, 24));
        assert!((g.u().at(20, 24) - expected).abs() < 1e-3);
        assert!((g.u().at(21, 24) - expected).abs() < 1e-3);
        assert!(g.v().at(20, 24).abs() < 1e-3);
    }

    #[test]
    fn moving_obstacle_reopens_old_cells() {
        let mut s = Scene::with_config(SceneKind::WindTunnel, coarse()).unwrap();
        assert!(!s.grid().is_fluid(19, 24));
        s.set_obstacle(1.2, 0.5, true);
        assert!(s.grid().is_fluid(19, 24));
        assert!(!s.grid().is_fluid(59, 24));
    }

    #[test]
    fn pause_stops_frames() {
        let mut s = Scene::with_config(SceneKind::Tank, coarse()).unwrap();
        assert!(s.simulate().is_some());
        assert_eq!(s.frame(), 1);
        assert!(s.toggle_pause());
        assert!(s.simulate().is_none());
        assert_eq!(s.frame(), 1);
        assert!(!s.toggle_pause());
        s.simulate();
        assert_eq!(s.frame(), 2);
    }

    #[test]
    fn reset_switches_preset_and_keeps_frame() {
        let mut s = Scene::with_config(SceneKind::Tank, coarse()).unwrap();
        s.simulate();
        s.reset(SceneKind::WindTunnel).unwrap();
        assert_eq!(s.kind(), SceneKind::WindTunnel);
        assert_eq!(s.frame(), 1);
        assert_eq!(s.grid().u().at(1, 10), TUNNEL_INFLOW);
        assert_eq!(s.grid().p().as_slice().iter().sum::<f32>(), 0.0);
    }

    #[test]
    fn params_follow_public_fields() {
        let mut s = Scene::with_config(SceneKind::Tank, coarse()).unwrap();
        s.iterations = 7;
        s.gravity = -1.0;
        assert_eq!(s.params(), StepParams::new(s.dt, -1.0, 7));
    }
}
