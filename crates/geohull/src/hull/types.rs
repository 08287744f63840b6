//! Basic types for the hull engine.
//!
//! - `Point`: planar point, alias for `nalgebra::Vector2<f64>`.
//! - `HullCfg`: collinear-point policy.
//! - `HullEdge`: directed boundary edge between two input indices.
//! - `Degenerate`: marker returned when no polygon exists.

use nalgebra::Vector2;

/// Planar point `(x, y)`. Coordinates are expected to be finite.
pub type Point = Vector2<f64>;

/// What to do with input points lying exactly on a hull edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollinearPolicy {
    /// Strictly convex hull: on-edge points are dropped.
    #[default]
    Drop,
    /// Keep on-edge points as extra (straight-angle) vertices.
    Keep,
}

/// Hull engine configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCfg {
    pub collinear: CollinearPolicy,
}

impl HullCfg {
    #[inline]
    pub fn keep_collinear() -> Self {
        Self {
            collinear: CollinearPolicy::Keep,
        }
    }
}

/// Directed hull edge `from → to`, both indices into the input point set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HullEdge {
    pub from: usize,
    pub to: usize,
}

/// Fewer than 3 distinct, non-collinear points: the hull is not a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("degenerate point set: fewer than 3 distinct non-collinear points")]
pub struct Degenerate;
