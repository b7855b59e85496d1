//! Benchmark profiles for the Plume fluid solver.
//!
//! - [`reference_profile`]: the default 177x100 wind tunnel
//! - [`stress_profile`]: the same tunnel at four times the resolution
//! - [`warm_up`]: advance a scene until the wake has formed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plume_scene::{Scene, SceneConfig, SceneError, SceneKind};

/// Default wind tunnel: 177x100 interior cells, 40 iterations.
pub fn reference_profile() -> Result<Scene, SceneError> {
    Scene::new(SceneKind::WindTunnel)
}

/// Wind tunnel at resolution 400 (711x400, ~280K cells).
pub fn stress_profile() -> Result<Scene, SceneError> {
    Scene::with_config(
        SceneKind::WindTunnel,
        SceneConfig::default().with_resolution(400),
    )
}

/// Run `frames` unpaused frames so benchmarks start from a developed flow.
pub fn warm_up(scene: &mut Scene, frames: usize) {
    for _ in 0..frames {
        scene.simulate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_builds() {
        let s = reference_profile().unwrap();
        assert_eq!(s.grid().num_x(), 179);
        assert_eq!(s.grid().num_y(), 102);
    }

    #[test]
    fn warm_up_advances_frames() {
        let mut s = Scene::with_config(
            SceneKind::Tank,
            SceneConfig::default().with_resolution(10),
        )
        .unwrap();
        warm_up(&mut s, 3);
        assert_eq!(s.frame(), 3);
    }
}
