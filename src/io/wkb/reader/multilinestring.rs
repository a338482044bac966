use crate::datatypes::Dimension;
use crate::error::WkbResult;
use crate::geometry::MultiLineString;
use crate::io::wkb::common::WkbGeometryType;
use crate::io::wkb::reader::cursor::WkbCursor;
use crate::io::wkb::reader::geometry::GeometryReader;
use crate::io::wkb::reader::linestring::read_line_string;

/// Read the body of a MultiLineString: a count, then that many complete LineString records.
pub(super) fn read_multi_line_string(
    reader: &GeometryReader,
    cursor: &mut WkbCursor<'_>,
    dim: Dimension,
    depth: usize,
) -> WkbResult<MultiLineString> {
    let num_line_strings = cursor.read_count(WkbGeometryType::LineString.min_record_bytes())?;
    let mut line_strings = Vec::with_capacity(num_line_strings);
    for _ in 0..num_line_strings {
        let header =
            reader.read_member_header(cursor, depth + 1, dim, Some(WkbGeometryType::LineString))?;
        line_strings.push(read_line_string(cursor, header.dimension())?);
    }
    Ok(MultiLineString::new(dim, line_strings))
}
