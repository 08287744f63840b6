//! GeoJSON in, hull polygon feature out.
//!
//! Pipeline: `extract_points` → `hull_edges` → `ring_from_edges` → `polygon_feature`.
//! Degenerate input (fewer than 3 distinct, non-collinear points) yields `Ok(None)`.

use geojson::{Feature, GeoJson, JsonObject};

use crate::error::Result;
use crate::extract::{extract_points, CoordEach};
use crate::hull::{hull_edges, HullCfg};
use crate::ring::{polygon_feature, ring_from_edges};

/// Options for `convex`.
#[derive(Clone, Debug, Default)]
pub struct ConvexOptions {
    pub hull: HullCfg,
    /// Properties of the output feature (empty object if `None`).
    pub properties: Option<JsonObject>,
}

/// Convex hull of every coordinate in `input` as a single-ring polygon feature.
pub fn convex<T: CoordEach + ?Sized>(input: &T, opts: &ConvexOptions) -> Result<Option<Feature>> {
    let points = extract_points(input)?;
    let edges = match hull_edges(&points, opts.hull) {
        Ok(edges) => edges,
        Err(degenerate) => {
            tracing::debug!(points = points.len(), "{degenerate}");
            return Ok(None);
        }
    };
    tracing::debug!(points = points.len(), vertices = edges.len(), "convex hull");
    Ok(ring_from_edges(&points, &edges).map(|ring| polygon_feature(&ring, opts.properties.clone())))
}

/// Parse GeoJSON text, then `convex`.
pub fn convex_str(text: &str, opts: &ConvexOptions) -> Result<Option<Feature>> {
    let gj: GeoJson = text.parse()?;
    convex(&gj, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use geojson::Value;

    const PISA: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[10.195312,43.755225]}},
        {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[10.404052,43.8424511]}},
        {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[10.579833,43.659924]}},
        {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[10.360107,43.516688]}},
        {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[10.14038,43.588348]}},
        {"type":"Feature","properties":{},"geometry":{"type":"Point","coordinates":[10.195312,43.755225]}}
    ]}"#;

    fn only_ring(feature: &Feature) -> Vec<Vec<f64>> {
        match &feature.geometry.as_ref().unwrap().value {
            Value::Polygon(rings) => {
                assert_eq!(rings.len(), 1);
                rings[0].clone()
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn pisa_feature_collection() {
        let feature = convex_str(PISA, &ConvexOptions::default()).unwrap().unwrap();
        assert_eq!(
            only_ring(&feature),
            vec![
                vec![10.14038, 43.588348],
                vec![10.360107, 43.516688],
                vec![10.579833, 43.659924],
                vec![10.404052, 43.8424511],
                vec![10.195312, 43.755225],
                vec![10.14038, 43.588348],
            ]
        );
        assert_eq!(feature.properties, Some(JsonObject::new()));
    }

    #[test]
    fn polygon_with_elevation_and_hole() {
        let text = r#"{"type":"Feature","properties":{"name":"lot"},"geometry":{"type":"Polygon","coordinates":[
            [[0,0,10],[6,0,10],[6,6,10],[0,6,10],[0,0,10]],
            [[2,2,10],[3,2,10],[3,3,10],[2,2,10]]
        ]}}"#;
        let feature = convex_str(text, &ConvexOptions::default()).unwrap().unwrap();
        let ring = only_ring(&feature);
        assert_eq!(ring.len(), 5);
        assert!(ring.iter().all(|p| p.len() == 2));
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn degenerate_inputs_yield_none() {
        for text in [
            r#"{"type":"FeatureCollection","features":[]}"#,
            r#"{"type":"Point","coordinates":[1,2]}"#,
            r#"{"type":"MultiPoint","coordinates":[[1,2],[1,2],[1,2]]}"#,
            r#"{"type":"LineString","coordinates":[[0,0],[1,1],[2,2],[3,3]]}"#,
        ] {
            assert!(convex_str(text, &ConvexOptions::default()).unwrap().is_none());
        }
    }

    #[test]
    fn custom_properties_are_attached() {
        let mut props = JsonObject::new();
        props.insert("kind".into(), serde_json::json!("hull"));
        let opts = ConvexOptions {
            properties: Some(props.clone()),
            ..ConvexOptions::default()
        };
        let feature = convex_str(PISA, &opts).unwrap().unwrap();
        assert_eq!(feature.properties, Some(props));
    }

    #[test]
    fn keep_collinear_retains_edge_points() {
        let text = r#"{"type":"MultiPoint","coordinates":[[0,0],[1,0],[2,0],[1,1]]}"#;
        let strict = convex_str(text, &ConvexOptions::default()).unwrap().unwrap();
        assert_eq!(only_ring(&strict).len(), 4);
        let opts = ConvexOptions {
            hull: HullCfg::keep_collinear(),
            ..ConvexOptions::default()
        };
        let kept = convex_str(text, &opts).unwrap().unwrap();
        assert_eq!(only_ring(&kept).len(), 5);
    }

    #[test]
    fn malformed_input_errors() {
        assert!(matches!(
            convex_str("{not json", &ConvexOptions::default()),
            Err(Error::Parse(_))
        ));
        let g = geojson::Geometry::new(Value::LineString(vec![vec![0.0, 0.0], vec![]]));
        assert!(matches!(
            convex(&g, &ConvexOptions::default()),
            Err(Error::InvalidGeometry { index: 1, .. })
        ));
    }
}
