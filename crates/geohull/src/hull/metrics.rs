//! Small measurements on hull outputs.

use super::chain::cross;
use super::types::Point;

/// Signed shoelace area; positive for counterclockwise vertex order.
///
/// Accepts open or closed rings: a repeated closing vertex contributes nothing.
pub fn ring_area(ring: &[Point]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for k in 0..ring.len() {
        let p = ring[k];
        let q = ring[(k + 1) % ring.len()];
        a += p.x * q.y - q.x * p.y;
    }
    0.5 * a
}

/// Membership in a counterclockwise convex polygon, boundary included.
///
/// `eps` is the slack on each edge's turn test: `eps > 0` is permissive, `eps < 0` strict.
pub fn contains_eps(hull: &[Point], p: Point, eps: f64) -> bool {
    if hull.len() < 3 {
        return false;
    }
    (0..hull.len()).all(|k| cross(hull[k], hull[(k + 1) % hull.len()], p) >= -eps)
}
