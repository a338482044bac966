use crate::datatypes::Dimension;
use crate::error::WkbResult;
use crate::geometry::MultiPolygon;
use crate::io::wkb::common::WkbGeometryType;
use crate::io::wkb::reader::cursor::WkbCursor;
use crate::io::wkb::reader::geometry::GeometryReader;
use crate::io::wkb::reader::polygon::read_polygon;

/// Read the body of a MultiPolygon: a count, then that many complete Polygon records.
pub(super) fn read_multi_polygon(
    reader: &GeometryReader,
    cursor: &mut WkbCursor<'_>,
    dim: Dimension,
    depth: usize,
) -> WkbResult<MultiPolygon> {
    let num_polygons = cursor.read_count(WkbGeometryType::Polygon.min_record_bytes())?;
    let mut polygons = Vec::with_capacity(num_polygons);
    for _ in 0..num_polygons {
        let header =
            reader.read_member_header(cursor, depth + 1, dim, Some(WkbGeometryType::Polygon))?;
        polygons.push(read_polygon(cursor, header.dimension())?);
    }
    Ok(MultiPolygon::new(dim, polygons))
}
