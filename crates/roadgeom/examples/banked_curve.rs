//! Print frame and mesh summaries for a banked left-hand curve.
//!
//! Usage:
//!   cargo run -p roadgeom --example banked_curve -- [step]

use roadgeom::prelude::*;
use std::sync::Arc;

fn main() {
    let step: f64 = std::env::args()
        .nth(1)
        .and_then(|a| a.parse().ok())
        .unwrap_or(1.0);

    let mut rl = RefLine::new(80.0);
    rl.add_geometry(RefGeometry::line(0.0, 0.0, 0.0, 0.0, 20.0));
    rl.add_geometry(RefGeometry::arc(20.0, 20.0, 0.0, 0.0, 60.0, 0.025));
    let mut road = match Road::new(80.0, RoadId(1), None, Arc::new(rl)) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    // flat straight, then bank ramps up through the curve
    road.superelevation.insert(0.0, Poly3::constant(0.0));
    road.superelevation.insert(20.0, Poly3::new(0.0, 0.002, 0.0, 0.0));

    for s in [0.0, 20.0, 50.0, 80.0] {
        let left = road.get_xyz(s, 3.5, 0.0);
        println!(
            "s={s:5.1}  left edge=({:8.3}, {:8.3}, {:6.3})",
            left.x, left.y, left.z
        );
    }

    let cfg = SampleCfg {
        step,
        ..SampleCfg::default()
    };
    match road.surface_mesh(-3.5, 3.5, &cfg) {
        Ok(mesh) => println!(
            "surface: V={}, T={} (raw samples {})",
            mesh.vertices.len(),
            mesh.num_triangles(),
            road.sample_s_values(step).len()
        ),
        Err(e) => eprintln!("{e}"),
    }
}
