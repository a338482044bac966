use crate::datatypes::Dimension;
use crate::error::WkbResult;
use crate::geometry::{LinearRing, Polygon};
use crate::io::wkb::reader::coord::read_coords;
use crate::io::wkb::reader::cursor::WkbCursor;

/// A ring is at least its 4-byte point count.
const MIN_RING_BYTES: usize = 4;

/// Read the body of a Polygon: a ring count, then a point count and coordinates per ring.
pub(super) fn read_polygon(cursor: &mut WkbCursor<'_>, dim: Dimension) -> WkbResult<Polygon> {
    let num_rings = cursor.read_count(MIN_RING_BYTES)?;
    let rings = (0..num_rings)
        .map(|_| read_coords(cursor, dim).map(LinearRing::new))
        .collect::<WkbResult<Vec<_>>>()?;
    Ok(Polygon::new(dim, rings))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::reader::WkbHeader;
    use crate::test::encoder::WkbWriter;
    use crate::test::polygon::{p0, p1, p_empty};

    #[test]
    fn polygon_round_trip() {
        for writer in WkbWriter::all() {
            for geom in [p0(), p1(), p_empty()] {
                let buf = writer.write(&geom.clone().into());
                let mut cursor = WkbCursor::new(&buf);
                let header = WkbHeader::read(&mut cursor).unwrap();
                let decoded = read_polygon(&mut cursor, header.dimension()).unwrap();
                assert_eq!(decoded, geom);
                assert_eq!(cursor.remaining(), 0);
            }
        }
    }

    #[test]
    fn holes_in_order() {
        let geom = p1();
        let buf = WkbWriter::default().write(&geom.clone().into());
        let mut cursor = WkbCursor::new(&buf);
        let header = WkbHeader::read(&mut cursor).unwrap();
        let decoded = read_polygon(&mut cursor, header.dimension()).unwrap();
        assert_eq!(decoded.exterior(), geom.exterior());
        assert_eq!(decoded.interiors(), geom.interiors());
        assert!(decoded.rings().iter().all(|ring| ring.is_closed()));
    }
}
