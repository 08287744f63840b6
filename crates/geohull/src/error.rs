//! Library error type.
//!
//! Degenerate hulls are not errors: they surface as `Ok(None)` from
//! `convex::convex` and as `Err(hull::Degenerate)` from the raw engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A coordinate entry lacks a finite numeric x or y.
    #[error("invalid geometry at coordinate #{index}: {reason}")]
    InvalidGeometry { index: usize, reason: String },
    /// Input text is not valid GeoJSON.
    #[error("malformed GeoJSON: {0}")]
    Parse(#[from] geojson::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
