use crate::datatypes::Dimension;
use crate::error::WkbResult;
use crate::geometry::LineString;
use crate::io::wkb::reader::coord::read_coords;
use crate::io::wkb::reader::cursor::WkbCursor;

/// Read the body of a LineString: a point count and that many coordinates.
pub(super) fn read_line_string(
    cursor: &mut WkbCursor<'_>,
    dim: Dimension,
) -> WkbResult<LineString> {
    read_coords(cursor, dim).map(|coords| LineString::new(dim, coords))
}
