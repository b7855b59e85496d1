//! Multi-frame runs of each preset.

use plume_scene::{Scene, SceneConfig, SceneKind};
use plume_solver::{max_divergence, total_smoke};
use plume_test_utils::assert_close;

fn coarse(kind: SceneKind) -> Scene {
    Scene::with_config(kind, SceneConfig::default().with_resolution(40)).unwrap()
}

#[test]
fn tunnel_draws_in_the_smoke_stripe() {
    let mut scene = coarse(SceneKind::WindTunnel);
    let before = total_smoke(scene.grid());

    for _ in 0..30 {
        scene.simulate().unwrap();
    }

    let g = scene.grid();
    assert!(total_smoke(g) < before, "stripe never entered the domain");
    assert!(g
        .m()
        .as_slice()
        .iter()
        .all(|&m| (-1e-5..=1.0 + 1e-5).contains(&m)));
    assert_eq!(scene.frame(), 30);
}

#[test]
fn every_preset_runs_finite() {
    for kind in SceneKind::ALL {
        let mut scene = coarse(kind);
        if kind == SceneKind::Paint {
            scene.set_obstacle(0.5, 0.5, true);
        }
        for f in 0..20 {
            if kind == SceneKind::Paint {
                scene.set_obstacle(0.5 + 0.01 * f as f32, 0.5, false);
            }
            let metrics = scene.simulate().unwrap();
            assert!(metrics.residual.is_finite(), "{kind} frame {f}");
        }
        let g = scene.grid();
        assert!(g.u().as_slice().iter().all(|x| x.is_finite()), "{kind}");
        assert!(g.v().as_slice().iter().all(|x| x.is_finite()), "{kind}");
        assert!(max_divergence(g).is_finite(), "{kind}");
    }
}

#[test]
fn tank_pressure_grows_with_depth() {
    let mut scene = coarse(SceneKind::Tank);
    scene.simulate().unwrap();
    let g = scene.grid();
    let mid = g.num_x() / 2;
    let deep = g.p().at(mid, 2);
    let shallow = g.p().at(mid, g.num_y() - 3);
    assert!(deep > shallow, "p at floor {deep} vs near top {shallow}");
}

#[test]
fn paint_colour_follows_frame() {
    let mut scene = coarse(SceneKind::Paint);
    scene.set_obstacle(0.5, 0.5, true);
    for _ in 0..5 {
        scene.simulate();
    }
    scene.set_obstacle(0.5, 0.5, true);

    let h = scene.grid().h();
    let (i, j) = ((0.5 / h) as usize, (0.5 / h) as usize);
    assert!(!scene.grid().is_fluid(i, j));
    assert_close(scene.grid().m().at(i, j), 0.5 + 0.5 * 0.5f32.sin(), 1e-6);
}
