//! Decoding of WKB and GeoPackage geometry blobs, plus conversion of the results to `geo` and
//! GeoJSON.

pub mod geo;
pub mod geojson;
pub mod gpkg;
pub mod wkb;
