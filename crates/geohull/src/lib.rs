//! Convex hull polygons from GeoJSON.
//!
//! Layout
//! - `extract`: visitor over GeoJSON objects producing (x, y) points.
//! - `hull`: monotone-chain convex hull over point slices (the core).
//! - `ring`: closed rings and the output polygon feature.
//! - `convex`: the end-to-end pipeline (`convex`, `convex_str`).
//! - `sample`: reproducible point clouds for tests, benches and the CLI.
//!
//! Every call is a pure function of its input; nothing is cached.

pub mod convex;
pub mod error;
pub mod extract;
pub mod hull;
pub mod ring;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use convex::{convex, convex_str, ConvexOptions};
pub use error::{Error, Result};
pub use hull::{CollinearPolicy, Degenerate, HullCfg, HullEdge, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::convex::{convex, convex_str, ConvexOptions};
    pub use crate::extract::{extract_points, CoordEach};
    pub use crate::hull::{
        contains_eps, convex_hull, hull_edges, hull_indices, ring_area, HullCfg, Point,
    };
    pub use crate::ring::{close_ring, polygon_feature};
    pub use crate::sample::{draw_points, ReplayToken, SampleCfg, VertexCount};
    pub use nalgebra::Vector2 as Vec2;
}
