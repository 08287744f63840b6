//! Planar convex hull engine (monotone chain).
//!
//! Purpose
//! - Given an unordered point set, return the boundary of its convex region in
//!   counterclockwise order, or `Degenerate` when no polygon exists.
//! - Output is fully deterministic: ties on equal coordinates are broken by the
//!   original index and exact duplicates collapse onto the lowest index.
//!
//! Numerics
//! - Turn tests use the plain floating-point cross product, no tolerance. The
//!   default policy drops points lying exactly on an edge (`CollinearPolicy::Drop`).
//!
//! Code cross-refs: `ring::{close_ring, ring_from_edges}`, `convex::convex`

mod chain;
mod metrics;
mod types;

pub use chain::{convex_hull, cross, hull_edges, hull_indices, is_degenerate};
pub use metrics::{contains_eps, ring_area};
pub use types::{CollinearPolicy, Degenerate, HullCfg, HullEdge, Point};
