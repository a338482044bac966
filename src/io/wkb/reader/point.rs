use crate::datatypes::Dimension;
use crate::error::WkbResult;
use crate::geometry::Point;
use crate::io::wkb::reader::coord::read_coord;
use crate::io::wkb::reader::cursor::WkbCursor;

/// Read the body of a Point: a single coordinate.
///
/// See page 66 of <https://portal.ogc.org/files/?artifact_id=25355>.
pub(super) fn read_point(cursor: &mut WkbCursor<'_>, dim: Dimension) -> WkbResult<Point> {
    read_coord(cursor, dim).map(Point::new)
}
