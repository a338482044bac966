use crate::error::WkbResult;
use crate::geometry::*;
use crate::io::wkb::{from_wkb_with_options, FromWKB, WkbReaderOptions};

/// Convert a coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo(coord: &Coord) -> geo::Coord {
    geo::Coord {
        x: coord.x,
        y: coord.y,
    }
}

/// Convert a Point to a [`geo::Point`].
///
/// Only the first two dimensions will be kept. An empty point becomes a point of NaN ordinates.
pub fn point_to_geo(point: &Point) -> geo::Point {
    geo::Point(coord_to_geo(point.coord()))
}

/// Convert a LineString to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &LineString) -> geo::LineString {
    geo::LineString::new(line_string.coords().iter().map(coord_to_geo).collect())
}

/// Convert a LinearRing to a [`geo::LineString`].
pub fn linear_ring_to_geo(ring: &LinearRing) -> geo::LineString {
    geo::LineString::new(ring.coords().iter().map(coord_to_geo).collect())
}

/// Convert a Polygon to a [`geo::Polygon`].
///
/// Only the first two dimensions will be kept. [`geo::Polygon::new`] closes any open ring.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = polygon
        .exterior()
        .map(linear_ring_to_geo)
        .unwrap_or_else(|| geo::LineString::new(vec![]));
    let interiors = polygon.interiors().iter().map(linear_ring_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a MultiPoint to a [`geo::MultiPoint`].
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> geo::MultiPoint {
    geo::MultiPoint::new(multi_point.points().iter().map(point_to_geo).collect())
}

/// Convert a MultiLineString to a [`geo::MultiLineString`].
pub fn multi_line_string_to_geo(multi_line_string: &MultiLineString) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .line_strings()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

/// Convert a MultiPolygon to a [`geo::MultiPolygon`].
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> geo::MultiPolygon {
    geo::MultiPolygon::new(multi_polygon.polygons().iter().map(polygon_to_geo).collect())
}

/// Convert a GeometryCollection to a [`geo::GeometryCollection`].
pub fn geometry_collection_to_geo(collection: &GeometryCollection) -> geo::GeometryCollection {
    geo::GeometryCollection(collection.geometries().iter().map(geometry_to_geo).collect())
}

/// Convert any Geometry to a [`geo::Geometry`].
pub fn geometry_to_geo(geometry: &Geometry) -> geo::Geometry {
    match geometry {
        Geometry::Point(g) => geo::Geometry::Point(point_to_geo(g)),
        Geometry::LineString(g) => geo::Geometry::LineString(line_string_to_geo(g)),
        Geometry::Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(multi_point_to_geo(g)),
        Geometry::MultiLineString(g) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(g))
        }
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(g)),
        Geometry::GeometryCollection(g) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(g))
        }
    }
}

impl From<&Geometry> for geo::Geometry {
    fn from(value: &Geometry) -> Self {
        geometry_to_geo(value)
    }
}

impl FromWKB for geo::Geometry {
    fn from_wkb(buf: &[u8], options: &WkbReaderOptions) -> WkbResult<Self> {
        from_wkb_with_options(buf, options).map(|geom| geometry_to_geo(&geom))
    }
}
