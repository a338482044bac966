//! Recursive-descent decoding of WKB records into owned [`Geometry`](crate::geometry::Geometry)
//! values.

mod coord;
mod cursor;
mod geometry;
mod geometry_collection;
mod header;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use cursor::{Endianness, WkbCursor};
pub(crate) use geometry::GeometryReader;
pub use header::WkbHeader;
