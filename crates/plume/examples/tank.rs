//! Plume tank: fluid settling under gravity in an open-topped box.
//!
//! Prints the residual divergence and the pressure profile down the
//! centre column as the tank settles.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example tank

use plume::prelude::*;
use plume::solver::max_divergence;

const FRAMES: u64 = 120;
const REPORT_EVERY: u64 = 30;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Plume tank ===\n");

    let mut scene = Scene::with_config(SceneKind::Tank, SceneConfig::default().with_resolution(50))?;
    let g = scene.grid();
    println!(
        "grid {}x{} (h = {}), gravity {}, {} iterations",
        g.num_x(),
        g.num_y(),
        g.h(),
        scene.gravity,
        scene.iterations
    );

    while scene.frame() < FRAMES {
        let Some(metrics) = scene.simulate() else {
            break;
        };
        if scene.frame() % REPORT_EVERY == 0 {
            println!(
                "frame {:4}: {:6}us, project {:6}us, residual {:.3e}",
                scene.frame(),
                metrics.total_us,
                metrics.stage(Stage::Project).unwrap_or(0),
                metrics.residual
            );
        }
    }

    let g = scene.grid();
    let mid = g.num_x() / 2;
    println!("\npressure down the centre column:");
    for j in (1..g.num_y() - 1).rev().step_by(5) {
        println!("  j = {j:3}: {:10.2}", g.p().at(mid, j));
    }
    println!("\nfinal max divergence {:.3e}", max_divergence(g));
    log::info!("tank finished after {} frames", scene.frame());
    Ok(())
}
