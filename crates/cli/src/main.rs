use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use geohull::hull::ring_area;
use geohull::sample::{draw_points, points_feature_collection, ReplayToken, SampleCfg, VertexCount};
use geohull::{ConvexOptions, HullCfg, Point};
use geojson::{GeoJson, Geometry, Value};
use polars::prelude::*;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::Run;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull polygons from GeoJSON or CSV point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull polygon feature (or `null`) and write it as GeoJSON
    Hull {
        /// GeoJSON file, CSV file with `x`,`y` columns, or `-` for GeoJSON on stdin
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Keep points lying exactly on hull edges
        #[arg(long)]
        keep_collinear: bool,
    },
    /// Write a reproducible random point cloud as a FeatureCollection
    Sample {
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 100)]
        interior: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            keep_collinear,
        } => hull(input, out, keep_collinear),
        Action::Sample {
            vertices,
            interior,
            seed,
            index,
            out,
        } => sample(vertices, interior, ReplayToken { seed, index }, out),
        Action::Report => report(),
    }
}

fn hull(input: String, out: String, keep_collinear: bool) -> Result<()> {
    tracing::info!(input, out, keep_collinear, "hull");
    let gj = if input.ends_with(".csv") {
        let points = read_csv_points(&input)?;
        let coords = points.iter().map(|p| vec![p.x, p.y]).collect();
        GeoJson::Geometry(Geometry::new(Value::MultiPoint(coords)))
    } else {
        read_geojson(&input)?
    };
    let opts = ConvexOptions {
        hull: if keep_collinear {
            HullCfg::keep_collinear()
        } else {
            HullCfg::default()
        },
        properties: None,
    };
    let feature = geohull::convex(&gj, &opts).with_context(|| format!("hull of {input}"))?;
    let points = geohull::extract::count_coords(&gj);
    let ring = feature
        .as_ref()
        .map(geohull::extract::extract_points)
        .transpose()?;
    let vertices = ring.as_ref().map(|r| r.len() - 1);
    let area = ring.as_deref().map(ring_area);
    tracing::info!(points, vertices = ?vertices, area = ?area, "hull_done");

    write_json(&out, &serde_json::to_vec_pretty(&feature)?)?;
    Run::Hull {
        input,
        keep_collinear,
        points,
        vertices,
        area,
    }
    .record(Path::new(&out))?;
    Ok(())
}

fn sample(vertices: usize, interior: usize, tok: ReplayToken, out: String) -> Result<()> {
    tracing::info!(vertices, interior, seed = tok.seed, index = tok.index, out, "sample");
    let cfg = SampleCfg {
        vertex_count: VertexCount::Fixed(vertices),
        interior,
        ..SampleCfg::default()
    };
    let fc = points_feature_collection(&draw_points(cfg, tok));
    write_json(&out, &serde_json::to_vec_pretty(&fc)?)?;
    Run::Sample {
        tok,
        vertices,
        interior,
    }
    .record(Path::new(&out))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::code_rev(),
        "version": geohull::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn read_geojson(input: &str) -> Result<GeoJson> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {input}"))?
    };
    text.parse::<GeoJson>()
        .with_context(|| format!("parsing GeoJSON from {input}"))
}

/// Points from a CSV with numeric `x` and `y` columns; any null cell is an error.
fn read_csv_points(input: &str) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {input}"))?;
    tracing::info!(rows = df.height(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("{input}: row {row} has a missing or non-numeric x/y"),
        })
        .collect()
}

fn write_json(out: &str, bytes: &[u8]) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, bytes).with_context(|| format!("writing {out}"))
}
