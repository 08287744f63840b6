//! Coordinate extraction from GeoJSON.
//!
//! `CoordEach` is a visitor over the GeoJSON object tree: every implementation
//! matches its own variants exhaustively and forwards each raw position to the
//! callback in document order. Polygon rings are walked in full, closing
//! coordinates and holes included. Features without geometry contribute nothing.
//!
//! `extract_points` validates positions and drops any dimension past (x, y).

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value};

use crate::error::{Error, Result};
use crate::hull::Point;

/// Visit every raw position of a GeoJSON object, stopping at the first callback error.
pub trait CoordEach {
    fn coord_each(&self, f: &mut dyn FnMut(&[f64]) -> Result<()>) -> Result<()>;
}

fn each_in(positions: &[Vec<f64>], f: &mut dyn FnMut(&[f64]) -> Result<()>) -> Result<()> {
    positions.iter().try_for_each(|p| f(p.as_slice()))
}

impl CoordEach for Value {
    fn coord_each(&self, f: &mut dyn FnMut(&[f64]) -> Result<()>) -> Result<()> {
        match self {
            Value::Point(p) => f(p.as_slice()),
            Value::MultiPoint(ps) | Value::LineString(ps) => each_in(ps, f),
            Value::MultiLineString(lines) | Value::Polygon(lines) => {
                lines.iter().try_for_each(|line| each_in(line, f))
            }
            Value::MultiPolygon(polys) => polys
                .iter()
                .flatten()
                .try_for_each(|ring| each_in(ring, f)),
            Value::GeometryCollection(geoms) => geoms.iter().try_for_each(|g| g.coord_each(f)),
        }
    }
}

impl CoordEach for Geometry {
    fn coord_each(&self, f: &mut dyn FnMut(&[f64]) -> Result<()>) -> Result<()> {
        self.value.coord_each(f)
    }
}

impl CoordEach for Feature {
    fn coord_each(&self, f: &mut dyn FnMut(&[f64]) -> Result<()>) -> Result<()> {
        match &self.geometry {
            Some(g) => g.coord_each(f),
            None => Ok(()),
        }
    }
}

impl CoordEach for FeatureCollection {
    fn coord_each(&self, f: &mut dyn FnMut(&[f64]) -> Result<()>) -> Result<()> {
        self.features.iter().try_for_each(|feat| feat.coord_each(f))
    }
}

impl CoordEach for GeoJson {
    fn coord_each(&self, f: &mut dyn FnMut(&[f64]) -> Result<()>) -> Result<()> {
        match self {
            GeoJson::Geometry(g) => g.coord_each(f),
            GeoJson::Feature(feat) => feat.coord_each(f),
            GeoJson::FeatureCollection(fc) => fc.coord_each(f),
        }
    }
}

fn to_point(index: usize, pos: &[f64]) -> Result<Point> {
    let invalid = |reason: &str| Error::InvalidGeometry {
        index,
        reason: reason.to_string(),
    };
    match pos {
        [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Point::new(*x, *y)),
        [_, _, ..] => Err(invalid("non-finite x/y")),
        _ => Err(invalid(&format!("expected at least 2 values, got {}", pos.len()))),
    }
}

/// All (x, y) pairs of `input` in traversal order. No deduplication.
pub fn extract_points<T: CoordEach + ?Sized>(input: &T) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    input.coord_each(&mut |pos| {
        points.push(to_point(points.len(), pos)?);
        Ok(())
    })?;
    Ok(points)
}

/// Number of positions in `input`, valid or not.
pub fn count_coords<T: CoordEach + ?Sized>(input: &T) -> usize {
    let mut n = 0usize;
    let walked = input.coord_each(&mut |_| {
        n += 1;
        Ok(())
    });
    walked.map_or(n, |()| n)
}
