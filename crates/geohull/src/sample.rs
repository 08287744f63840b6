//! Deterministic random point clouds (radial jitter + replay tokens).
//!
//! Model
//! - Boundary: `n` roughly equally spaced angles on [0, 2π) with bounded angular
//!   and radial jitter around `base_radius`.
//! - Interior: random convex combinations of three distinct boundary points,
//!   so they never extend the hull.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Used by benches, property tests and the `cli sample` subcommand.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::hull::Point;

/// How many points the cloud puts on its outer boundary (never fewer than 3).
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    /// Inclusive range, drawn once per cloud.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn draw<R: Rng>(self, rng: &mut R) -> usize {
        let n = match self {
            VertexCount::Fixed(n) => n,
            VertexCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        };
        n.max(3)
    }
}

/// Point cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub vertex_count: VertexCount,
    /// Boundary angle noise, as a fraction of the even spacing `2π/n` (clamped to 0.49).
    pub angle_jitter_frac: f64,
    /// Boundary radius noise: each radius is `base_radius` scaled by up to `1 ± radial_jitter`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Number of extra points strictly inside the boundary polygon.
    pub interior: usize,
    pub center: Point,
}
impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            interior: 100,
            center: Point::zeros(),
        }
    }
}

/// Names one point cloud: the same `(seed, index)` always yields the same points,
/// and neighbouring indices under one seed give independent clouds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let stream = splitmix64(self.index.wrapping_add(0x9e3779b97f4a7c15));
        StdRng::seed_from_u64(splitmix64(self.seed ^ stream))
    }
}

/// SplitMix64 finalizer.
#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Draw boundary points (first, in angular order) followed by interior points.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut points: Vec<Point> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            cfg.center + Point::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    points.reserve(cfg.interior);
    for _ in 0..cfg.interior {
        let tri = index::sample(&mut rng, n, 3).into_vec();
        // Weights bounded away from zero keep the point off the triangle's edges.
        let w: [f64; 3] = [
            rng.gen_range(0.05..1.0),
            rng.gen_range(0.05..1.0),
            rng.gen_range(0.05..1.0),
        ];
        let total = w[0] + w[1] + w[2];
        let p = (points[tri[0]] * w[0] + points[tri[1]] * w[1] + points[tri[2]] * w[2]) / total;
        points.push(p);
    }
    points
}

/// Points as a FeatureCollection of Point features with empty properties.
pub fn points_feature_collection(points: &[Point]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: points
            .iter()
            .map(|p| Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![p.x, p.y]))),
                id: None,
                properties: Some(JsonObject::new()),
                foreign_members: None,
            })
            .collect(),
        foreign_members: None,
    }
}
