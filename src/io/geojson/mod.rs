//! Map decoded geometries and row attributes onto the [`geojson`] crate's types.
//!
//! Positions are written as `[x, y]` or `[x, y, z]`. GeoJSON has no measure ordinate, so M values
//! are dropped.

mod feature;
mod geometry;

pub use feature::{to_feature, to_feature_collection};
pub use geojson::{Feature, FeatureCollection};
pub use geometry::geometry_to_geojson;
