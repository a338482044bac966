use crate::datatypes::Dimension;
use crate::error::WkbResult;
use crate::geometry::Coord;
use crate::io::wkb::reader::cursor::WkbCursor;

/// Read one coordinate of `dim` ordinates, in X, Y, Z, M order.
pub(super) fn read_coord(cursor: &mut WkbCursor<'_>, dim: Dimension) -> WkbResult<Coord> {
    let x = cursor.read_f64()?;
    let y = cursor.read_f64()?;
    let z = if dim.has_z() {
        Some(cursor.read_f64()?)
    } else {
        None
    };
    let m = if dim.has_m() {
        Some(cursor.read_f64()?)
    } else {
        None
    };
    Ok(Coord { x, y, z, m })
}

/// Read a `u32` point count followed by that many coordinates.
pub(super) fn read_coords(cursor: &mut WkbCursor<'_>, dim: Dimension) -> WkbResult<Vec<Coord>> {
    let num_coords = cursor.read_count(dim.coord_size())?;
    (0..num_coords).map(|_| read_coord(cursor, dim)).collect()
}
