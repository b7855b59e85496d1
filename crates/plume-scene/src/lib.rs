//! Preset scenes driving the Plume fluid solver.
//!
//! A [`Scene`] owns a [`FluidGrid`](plume_grid::FluidGrid) together with the
//! per-step parameters, a movable circular obstacle, and the display flags a
//! renderer reads. Four presets are available through [`SceneKind`]:
//!
//! | Preset | Walls | Gravity | Notes |
//! |--------|-------|---------|-------|
//! | [`Tank`](SceneKind::Tank) | floor and sides | -9.81 | pressure view |
//! | [`WindTunnel`](SceneKind::WindTunnel) | left, floor, ceiling | 0 | inflow, smoke stripe, obstacle |
//! | [`Paint`](SceneKind::Paint) | closed until the obstacle moves | 0 | colour cycles with frame |
//! | [`HiresTunnel`](SceneKind::HiresTunnel) | as wind tunnel | 0 | dt 1/120, 100 iterations |
//!
//! The scene performs no rendering or input handling. Callers map pointer
//! positions with [`SceneConfig::window_to_domain`] and feed them to
//! [`Scene::set_obstacle`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod kind;
pub mod scene;

pub use config::SceneConfig;
pub use error::SceneError;
pub use kind::{DisplayFlags, SceneKind};
pub use scene::Scene;
