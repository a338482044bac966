use geojson::{JsonObject, LineStringType, PointType, PolygonType};
use serde::{Serialize, Serializer};

use crate::geometry::*;

fn position(coord: &Coord) -> PointType {
    match coord.z {
        Some(z) => vec![coord.x, coord.y, z],
        None => vec![coord.x, coord.y],
    }
}

fn positions(coords: &[Coord]) -> LineStringType {
    coords.iter().map(position).collect()
}

fn polygon_coordinates(polygon: &Polygon) -> PolygonType {
    polygon
        .rings()
        .iter()
        .map(|ring| positions(ring.coords()))
        .collect()
}

impl From<&Geometry> for geojson::Value {
    fn from(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Point(point) if point.is_empty() => geojson::Value::Point(vec![]),
            Geometry::Point(point) => geojson::Value::Point(position(point.coord())),
            Geometry::LineString(line_string) => {
                geojson::Value::LineString(positions(line_string.coords()))
            }
            Geometry::Polygon(polygon) => geojson::Value::Polygon(polygon_coordinates(polygon)),
            // A GeoJSON position cannot be empty, so empty members are left out.
            Geometry::MultiPoint(multi_point) => geojson::Value::MultiPoint(
                multi_point
                    .points()
                    .iter()
                    .filter(|point| !point.is_empty())
                    .map(|point| position(point.coord()))
                    .collect(),
            ),
            Geometry::MultiLineString(multi_line_string) => geojson::Value::MultiLineString(
                multi_line_string
                    .line_strings()
                    .iter()
                    .map(|line_string| positions(line_string.coords()))
                    .collect(),
            ),
            Geometry::MultiPolygon(multi_polygon) => geojson::Value::MultiPolygon(
                multi_polygon
                    .polygons()
                    .iter()
                    .map(polygon_coordinates)
                    .collect(),
            ),
            Geometry::GeometryCollection(collection) => geojson::Value::GeometryCollection(
                collection
                    .geometries()
                    .iter()
                    .map(geometry_to_geojson)
                    .collect(),
            ),
        }
    }
}

// `From<&Geometry> for geojson::Geometry` is provided by geojson's blanket
// `impl<V: Into<geojson::Value>> From<V> for geojson::Geometry`.

/// Convert a Geometry to a GeoJSON geometry object.
///
/// An empty point is written with an empty `coordinates` array. Empty points inside a
/// MultiPoint are skipped.
pub fn geometry_to_geojson(geometry: &Geometry) -> geojson::Geometry {
    geometry.into()
}

impl Geometry {
    /// This geometry as a GeoJSON geometry object.
    pub fn to_geojson(&self) -> geojson::Geometry {
        geometry_to_geojson(self)
    }

    /// This geometry as a GeoJSON geometry object in a [`serde_json::Value`].
    pub fn to_geojson_value(&self) -> serde_json::Value {
        serde_json::Value::Object(JsonObject::from(&self.to_geojson()))
    }
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        geometry_to_geojson(self).serialize(serializer)
    }
}
