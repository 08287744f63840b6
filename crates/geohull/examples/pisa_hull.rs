//! Hull of a handful of points around Pisa, printed as a GeoJSON feature.
//!
//! Usage:
//!   cargo run -p geohull --example pisa_hull

use geohull::prelude::*;
use geojson::GeoJson;
use geohull::sample::points_feature_collection;

fn main() -> geohull::Result<()> {
    let points = vec![
        Vec2::new(10.195312, 43.755225),
        Vec2::new(10.404052, 43.8424511),
        Vec2::new(10.579833, 43.659924),
        Vec2::new(10.360107, 43.516688),
        Vec2::new(10.14038, 43.588348),
        Vec2::new(10.195312, 43.755225),
    ];
    let fc = points_feature_collection(&points);
    match convex(&fc, &ConvexOptions::default())? {
        Some(hull) => println!("{}", GeoJson::Feature(hull)),
        None => println!("null"),
    }
    Ok(())
}
