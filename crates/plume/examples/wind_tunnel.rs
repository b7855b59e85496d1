//! Plume wind tunnel: vortex shedding behind a disk, drawn as ASCII.
//!
//! Demonstrates:
//!   1. Building the wind tunnel preset
//!   2. Dragging the obstacle between frames
//!   3. Pausing and resuming
//!   4. Reading the smoke field for display
//!
//! Run with:
//!   cargo run --example wind_tunnel

use plume::prelude::*;
use plume::solver::total_smoke;

const SHADES: &[u8] = b" .:-=+*#%@";

fn render(grid: &FluidGrid) -> String {
    let mut out = String::new();
    for j in (1..grid.num_y() - 1).rev().step_by(2) {
        for i in 1..grid.num_x() - 1 {
            let c = if !grid.is_fluid(i, j) {
                'O'
            } else {
                let m = grid.m().at(i, j).clamp(0.0, 1.0);
                let k = (m * (SHADES.len() - 1) as f32).round() as usize;
                SHADES[k] as char
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Plume wind tunnel ===\n");

    let mut scene = Scene::with_config(
        SceneKind::WindTunnel,
        SceneConfig::default().with_resolution(30),
    )?;

    for _ in 0..90 {
        scene.simulate();
    }
    println!("after 90 frames (smoke {:.1}):", total_smoke(scene.grid()));
    println!("{}", render(scene.grid()));

    // Drag the obstacle upward over ten frames.
    let (x, y) = scene.obstacle();
    for k in 1..=10 {
        scene.set_obstacle(x, y + 0.01 * k as f32, false);
        scene.simulate();
    }

    scene.toggle_pause();
    assert!(scene.simulate().is_none());
    scene.toggle_pause();

    for _ in 0..60 {
        scene.simulate();
    }
    println!("after dragging, frame {}:", scene.frame());
    println!("{}", render(scene.grid()));
    Ok(())
}
