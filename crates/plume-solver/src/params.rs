//! Per-step inputs.

/// Inputs for one [`step`](crate::step()).
///
/// Values are taken as given: the solver does not bound `dt` or `gravity`,
/// and `iterations == 0` simply disables pressure projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    /// Timestep. Default: 1/60.
    pub dt: f32,
    /// Vertical acceleration (negative pulls down). Default: -9.81.
    pub gravity: f32,
    /// Relaxation passes in the pressure solve. Default: 40.
    pub iterations: usize,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            gravity: -9.81,
            iterations: 40,
        }
    }
}

impl StepParams {
    /// Construct from explicit values.
    pub fn new(dt: f32, gravity: f32, iterations: usize) -> Self {
        Self {
            dt,
            gravity,
            iterations,
        }
    }

    /// Replace the timestep.
    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    /// Replace the gravity.
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Replace the relaxation pass count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}
