use crate::datatypes::Dimension;
use crate::error::WkbResult;
use crate::geometry::GeometryCollection;
use crate::io::wkb::common::MIN_RECORD_BYTES;
use crate::io::wkb::reader::cursor::WkbCursor;
use crate::io::wkb::reader::geometry::GeometryReader;

/// Read the body of a GeometryCollection: a count, then that many complete records of any shape.
pub(super) fn read_geometry_collection(
    reader: &GeometryReader,
    cursor: &mut WkbCursor<'_>,
    dim: Dimension,
    depth: usize,
) -> WkbResult<GeometryCollection> {
    let num_geometries = cursor.read_count(MIN_RECORD_BYTES)?;
    let mut geometries = Vec::with_capacity(num_geometries);
    for _ in 0..num_geometries {
        let header = reader.read_member_header(cursor, depth + 1, dim, None)?;
        geometries.push(reader.read_body(cursor, &header, depth + 1)?);
    }
    Ok(GeometryCollection::new(dim, geometries))
}
