//! Andrew's monotone chain over index arrays.
//!
//! Points are never copied or reordered in place: the engine sorts a vector of
//! indices and builds the two chains as index stacks. This keeps the output
//! addressable by original position (`HullEdge`) and makes tie-breaking on
//! equal coordinates explicit.

use std::cmp::Ordering;

use super::types::{CollinearPolicy, Degenerate, HullCfg, HullEdge, Point};

/// Signed turn of `a → b → c`: `> 0` counterclockwise, `< 0` clockwise, `0` collinear.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

// Adding +0.0 folds -0.0 into +0.0 so both sort as the same coordinate.
#[inline]
fn key(v: f64) -> f64 {
    v + 0.0
}

#[inline]
fn lex_cmp(points: &[Point], i: usize, j: usize) -> Ordering {
    let (a, b) = (points[i], points[j]);
    key(a.x)
        .total_cmp(&key(b.x))
        .then_with(|| key(a.y).total_cmp(&key(b.y)))
        .then(i.cmp(&j))
}

/// Indices sorted by (x, y, index) with exact duplicates collapsed onto the lowest index.
fn canonical_order(points: &[Point]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| lex_cmp(points, i, j));
    order.dedup_by(|later, kept| points[*later] == points[*kept]);
    order
}

/// One monotone half-chain. Pops while the last turn is not counterclockwise
/// (`<= 0`), or strictly clockwise (`< 0`) when collinear points are kept.
fn half_chain<I>(points: &[Point], order: I, policy: CollinearPolicy, cap: usize) -> Vec<usize>
where
    I: Iterator<Item = usize>,
{
    let mut stack: Vec<usize> = Vec::with_capacity(cap);
    for k in order {
        while stack.len() >= 2 {
            let turn = cross(
                points[stack[stack.len() - 2]],
                points[stack[stack.len() - 1]],
                points[k],
            );
            let pop = match policy {
                CollinearPolicy::Drop => turn <= 0.0,
                CollinearPolicy::Keep => turn < 0.0,
            };
            if !pop {
                break;
            }
            stack.pop();
        }
        stack.push(k);
    }
    stack
}

/// Lower chain followed by the upper chain, shared endpoints dropped.
fn monotone_chain(points: &[Point], order: &[usize], policy: CollinearPolicy) -> Vec<usize> {
    let cap = order.len();
    let mut lower = half_chain(points, order.iter().copied(), policy, cap);
    let mut upper = half_chain(points, order.iter().rev().copied(), policy, cap);
    // Each chain ends where the other begins.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// True if `points` cannot form a polygon: the strict hull has fewer than 3 vertices.
///
/// Same decision `hull_indices` makes, for either collinear policy.
pub fn is_degenerate(points: &[Point]) -> bool {
    hull_indices(points, HullCfg::default()).is_err()
}

/// Hull vertices as indices into `points`, counterclockwise, starting at the
/// lexicographically smallest point. No index is repeated.
///
/// Degeneracy is always decided by the strict chain, so near-collinear float
/// input is rejected or accepted the same way under both policies.
pub fn hull_indices(points: &[Point], cfg: HullCfg) -> Result<Vec<usize>, Degenerate> {
    let order = canonical_order(points);
    if order.len() < 3 {
        return Err(Degenerate);
    }
    let strict = monotone_chain(points, &order, CollinearPolicy::Drop);
    if strict.len() < 3 {
        return Err(Degenerate);
    }
    let hull = match cfg.collinear {
        CollinearPolicy::Drop => strict,
        CollinearPolicy::Keep => monotone_chain(points, &order, CollinearPolicy::Keep),
    };
    tracing::trace!(n = points.len(), h = hull.len(), "monotone chain");
    Ok(hull)
}

/// Hull as a closed cycle of directed edges; the last edge returns to the first vertex.
pub fn hull_edges(points: &[Point], cfg: HullCfg) -> Result<Vec<HullEdge>, Degenerate> {
    let idx = hull_indices(points, cfg)?;
    Ok((0..idx.len())
        .map(|k| HullEdge {
            from: idx[k],
            to: idx[(k + 1) % idx.len()],
        })
        .collect())
}

/// Hull vertices (counterclockwise, open: the first point is not repeated).
pub fn convex_hull(points: &[Point], cfg: HullCfg) -> Result<Vec<Point>, Degenerate> {
    Ok(hull_indices(points, cfg)?
        .into_iter()
        .map(|k| points[k])
        .collect())
}
