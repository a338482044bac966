use crate::datatypes::Dimension;
use crate::error::WkbResult;
use crate::geometry::MultiPoint;
use crate::io::wkb::common::WkbGeometryType;
use crate::io::wkb::reader::cursor::WkbCursor;
use crate::io::wkb::reader::geometry::GeometryReader;
use crate::io::wkb::reader::point::read_point;

/// Read the body of a MultiPoint: a count, then that many complete Point records.
pub(super) fn read_multi_point(
    reader: &GeometryReader,
    cursor: &mut WkbCursor<'_>,
    dim: Dimension,
    depth: usize,
) -> WkbResult<MultiPoint> {
    let num_points = cursor.read_count(WkbGeometryType::Point.min_record_bytes())?;
    let mut points = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        let header =
            reader.read_member_header(cursor, depth + 1, dim, Some(WkbGeometryType::Point))?;
        points.push(read_point(cursor, header.dimension())?);
    }
    Ok(MultiPoint::new(dim, points))
}
