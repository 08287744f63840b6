//! Closed rings and the output polygon feature.

use geojson::{Feature, Geometry, JsonObject, Value};

use crate::hull::{HullEdge, Point};

/// Close an open hull by repeating its first vertex. `None` below 3 vertices.
pub fn close_ring(hull: &[Point]) -> Option<Vec<Point>> {
    if hull.len() < 3 {
        return None;
    }
    let mut ring = Vec::with_capacity(hull.len() + 1);
    ring.extend_from_slice(hull);
    ring.push(hull[0]);
    Some(ring)
}

/// Ring from a hull edge cycle: each edge's start, then the last edge's end.
pub fn ring_from_edges(points: &[Point], edges: &[HullEdge]) -> Option<Vec<Point>> {
    let last = edges.last()?;
    if edges.len() < 3 {
        return None;
    }
    let mut ring: Vec<Point> = edges.iter().map(|e| points[e.from]).collect();
    ring.push(points[last.to]);
    Some(ring)
}

/// Single-ring polygon feature; properties default to an empty object.
pub fn polygon_feature(ring: &[Point], properties: Option<JsonObject>) -> Feature {
    let positions: Vec<Vec<f64>> = ring.iter().map(|p| vec![p.x, p.y]).collect();
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![positions]))),
        id: None,
        properties: Some(properties.unwrap_or_default()),
        foreign_members: None,
    }
}
