//! Owned, strongly-typed geometries produced by the WKB decoder.

use enum_as_inner::EnumAsInner;

use crate::datatypes::Dimension;
use crate::io::wkb::WkbGeometryType;

pub use coord::Coord;
pub use collection::GeometryCollection;
pub use linestring::{LineString, LinearRing};
pub use multi::{MultiLineString, MultiPoint, MultiPolygon};
pub use point::Point;
pub use polygon::Polygon;

mod collection;
mod coord;
mod linestring;
mod multi;
mod point;
mod polygon;

/// Any decoded geometry.
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn dimension(&self) -> Dimension {
        use Geometry::*;
        match self {
            Point(g) => g.dimension(),
            LineString(g) => g.dimension(),
            Polygon(g) => g.dimension(),
            MultiPoint(g) => g.dimension(),
            MultiLineString(g) => g.dimension(),
            MultiPolygon(g) => g.dimension(),
            GeometryCollection(g) => g.dimension(),
        }
    }

    /// The base WKB shape of this geometry.
    pub fn geometry_type(&self) -> WkbGeometryType {
        use Geometry::*;
        match self {
            Point(_) => WkbGeometryType::Point,
            LineString(_) => WkbGeometryType::LineString,
            Polygon(_) => WkbGeometryType::Polygon,
            MultiPoint(_) => WkbGeometryType::MultiPoint,
            MultiLineString(_) => WkbGeometryType::MultiLineString,
            MultiPolygon(_) => WkbGeometryType::MultiPolygon,
            GeometryCollection(_) => WkbGeometryType::GeometryCollection,
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::GeometryCollection(value)
    }
}
