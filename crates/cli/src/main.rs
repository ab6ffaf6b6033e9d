use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use roadgeom::prelude::{Road, SampleCfg, Vec2};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use input::{load_road, LoadedRoad};
use provenance::{write_sidecar, Provenance};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Sample, mesh and inspect road geometry")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sample positions at constant (t, z) into a CSV or Parquet table
    Sample {
        #[arg(long)]
        road: String,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        t: f64,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        z: f64,
        #[arg(long)]
        step: Option<f64>,
        #[arg(long)]
        out: String,
    },
    /// Stitch the road surface between two lateral offsets into an OBJ mesh
    Mesh {
        #[arg(long)]
        road: String,
        #[arg(long, allow_hyphen_values = true)]
        t_inner: f64,
        #[arg(long, allow_hyphen_values = true)]
        t_outer: f64,
        #[arg(long)]
        step: Option<f64>,
        #[arg(long)]
        eps: Option<f64>,
        #[arg(long)]
        out: String,
    },
    /// Print the plan-view bounding box as JSON
    Bounds {
        #[arg(long)]
        road: String,
        #[arg(long)]
        step: Option<f64>,
    },
    /// Project a world point onto the road and report (s, t, lane)
    Locate {
        #[arg(long)]
        road: String,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Sample {
            road,
            t,
            z,
            step,
            out,
        } => sample(&road, t, z, cfg_with(step, None), &out, cmd.tag),
        Action::Mesh {
            road,
            t_inner,
            t_outer,
            step,
            eps,
            out,
        } => mesh(&road, t_inner, t_outer, cfg_with(step, eps), &out, cmd.tag),
        Action::Bounds { road, step } => bounds(&road, cfg_with(step, None)),
        Action::Locate { road, x, y } => locate(&road, x, y),
        Action::Report => report(cmd.tag),
    }
}

fn cfg_with(step: Option<f64>, eps: Option<f64>) -> SampleCfg {
    let base = SampleCfg::default();
    SampleCfg {
        step: step.unwrap_or(base.step),
        simplify_eps: eps.unwrap_or(base.simplify_eps),
        ..base
    }
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Sampled positions as a table with columns `s, x, y, z`.
fn sample_table(road: &Road, t: f64, z: f64, step: f64) -> Result<DataFrame> {
    let s = road.sample_s_values(step);
    let pts = road.border_line(t, z, &s);
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let zs: Vec<f64> = pts.iter().map(|p| p.z).collect();
    Ok(df!(
        "s" => s.as_slice(),
        "x" => xs.as_slice(),
        "y" => ys.as_slice(),
        "z" => zs.as_slice()
    )?)
}

fn write_table(df: &mut DataFrame, out: &Path) -> Result<()> {
    ensure_parent(out)?;
    let mut file =
        std::fs::File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match out.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(&mut file).finish(df)?;
        }
        _ => {
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
    }
    Ok(())
}

fn sample(path: &str, t: f64, z: f64, cfg: SampleCfg, out: &str, tag: Option<String>) -> Result<()> {
    let LoadedRoad { road, .. } = load_road(path)?;
    tracing::info!(road = road.id().0, t, z, step = cfg.step, out, "sample");
    let mut df = sample_table(&road, t, z, cfg.step)?;
    tracing::info!(rows = df.height(), cols = df.width(), "sample_table_shape");

    let out_path = Path::new(out);
    write_table(&mut df, out_path)?;
    let params = serde_json::json!({ "input": path, "t": t, "z": z, "step": cfg.step });
    write_sidecar(out_path, Provenance::new("sample", tag, params).with_road(road.id().0))?;
    Ok(())
}

fn mesh(
    path: &str,
    t_inner: f64,
    t_outer: f64,
    cfg: SampleCfg,
    out: &str,
    tag: Option<String>,
) -> Result<()> {
    let LoadedRoad { road, .. } = load_road(path)?;
    tracing::info!(road = road.id().0, t_inner, t_outer, out, "mesh");
    let mesh = road.surface_mesh(t_inner, t_outer, &cfg)?;
    tracing::info!(
        vertices = mesh.vertices.len(),
        triangles = mesh.num_triangles(),
        "mesh_built"
    );

    let out_path = Path::new(out);
    ensure_parent(out_path)?;
    std::fs::write(out_path, mesh.to_obj()).with_context(|| format!("writing {out}"))?;
    let params = serde_json::json!({
        "input": path,
        "t_inner": t_inner,
        "t_outer": t_outer,
        "step": cfg.step,
        "simplify_eps": cfg.simplify_eps
    });
    write_sidecar(out_path, Provenance::new("mesh", tag, params).with_road(road.id().0))?;
    Ok(())
}

fn bounds(path: &str, cfg: SampleCfg) -> Result<()> {
    let LoadedRoad { road, .. } = load_road(path)?;
    let b = road.bbox(&cfg)?;
    let obj = serde_json::json!({
        "road": road.id().0,
        "min": [b.min.x, b.min.y],
        "max": [b.max.x, b.max.y],
        "center": [b.center.x, b.center.y],
        "width": b.width,
        "height": b.height
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Road coordinates of the plan-view point `(x, y)`: `s` by golden-section
/// projection onto the reference line, `t` such that `get_xyz(s, t, 0)` has the
/// same plan-view offset from the centre line. On banked roads the lateral axis
/// is tilted, so `t` is measured along its plan-view shadow.
fn project(loaded: &LoadedRoad, x: f64, y: f64, tol: f64) -> (f64, f64) {
    let road = &loaded.road;
    let s = loaded.ref_line.match_point(x, y, tol);
    let e_t = road.get_transformation_matrix(s).column(1).xy();
    let base = road.get_xyz(s, 0.0, 0.0);
    let d = Vec2::new(x - base.x, y - base.y);
    let plan = e_t.norm_squared();
    if plan <= f64::EPSILON {
        // lateral axis is vertical: every t maps onto the centre line
        return (s, 0.0);
    }
    (s, d.dot(&e_t) / plan)
}

fn locate(path: &str, x: f64, y: f64) -> Result<()> {
    let loaded = load_road(path)?;
    let (s, t) = project(&loaded, x, y, SampleCfg::default().search_tol);
    let lane = loaded.road.get_lane(s, t)?.map(|l| l.id);
    tracing::info!(x, y, s, t, lane = ?lane, "locate");
    let obj = serde_json::json!({ "road": loaded.road.id().0, "s": s, "t": t, "lane": lane });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let prov = Provenance::new("report", tag, serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}
