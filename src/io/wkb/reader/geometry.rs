use crate::datatypes::Dimension;
use crate::error::{WkbError, WkbResult};
use crate::geometry::Geometry;
use crate::io::wkb::common::WkbGeometryType;
use crate::io::wkb::reader::cursor::WkbCursor;
use crate::io::wkb::reader::geometry_collection::read_geometry_collection;
use crate::io::wkb::reader::header::WkbHeader;
use crate::io::wkb::reader::linestring::read_line_string;
use crate::io::wkb::reader::multilinestring::read_multi_line_string;
use crate::io::wkb::reader::multipoint::read_multi_point;
use crate::io::wkb::reader::multipolygon::read_multi_polygon;
use crate::io::wkb::reader::point::read_point;
use crate::io::wkb::reader::polygon::read_polygon;

/// Decodes complete WKB records, recursing into Multi* and GeometryCollection members.
///
/// The top-level record is at depth `0`; each nested record is one level deeper than its
/// container. Records deeper than `max_depth` are rejected.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GeometryReader {
    max_depth: usize,
}

impl GeometryReader {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Read one complete top-level record.
    pub fn read(&self, cursor: &mut WkbCursor<'_>) -> WkbResult<(WkbHeader, Geometry)> {
        let header = WkbHeader::read(cursor)?;
        let geometry = self.read_body(cursor, &header, 0)?;
        Ok((header, geometry))
    }

    /// Read the header of a record nested inside a container at `depth - 1`.
    ///
    /// The member must share the container's dimension, and must have shape `expected` when one
    /// is given. Any SRID on the member is discarded.
    pub(super) fn read_member_header(
        &self,
        cursor: &mut WkbCursor<'_>,
        depth: usize,
        dim: Dimension,
        expected: Option<WkbGeometryType>,
    ) -> WkbResult<WkbHeader> {
        let offset = cursor.position();
        if depth > self.max_depth {
            return Err(WkbError::MaxDepthExceeded {
                offset,
                max_depth: self.max_depth,
            });
        }

        let header = WkbHeader::read(cursor)?;
        if let Some(expected) = expected {
            if header.geometry_type() != expected {
                return Err(WkbError::UnexpectedSubgeometryType {
                    offset,
                    expected,
                    actual: header.geometry_type(),
                });
            }
        }
        if header.dimension() != dim {
            return Err(WkbError::MixedDimensions {
                offset,
                expected: dim,
                actual: header.dimension(),
            });
        }
        Ok(header)
    }

    /// Decode the body that follows `header`.
    pub(super) fn read_body(
        &self,
        cursor: &mut WkbCursor<'_>,
        header: &WkbHeader,
        depth: usize,
    ) -> WkbResult<Geometry> {
        let dim = header.dimension();

        let geometry: Geometry = match header.geometry_type() {
            WkbGeometryType::Point => read_point(cursor, dim)?.into(),
            WkbGeometryType::LineString => read_line_string(cursor, dim)?.into(),
            WkbGeometryType::Polygon => read_polygon(cursor, dim)?.into(),
            WkbGeometryType::MultiPoint => read_multi_point(self, cursor, dim, depth)?.into(),
            WkbGeometryType::MultiLineString => {
                read_multi_line_string(self, cursor, dim, depth)?.into()
            }
            WkbGeometryType::MultiPolygon => read_multi_polygon(self, cursor, dim, depth)?.into(),
            WkbGeometryType::GeometryCollection => {
                read_geometry_collection(self, cursor, dim, depth)?.into()
            }
        };
        Ok(geometry)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{Coord, Point};
    use crate::io::wkb::reader::Endianness;

    fn read(buf: &[u8], max_depth: usize) -> WkbResult<Geometry> {
        let mut cursor = WkbCursor::new(buf);
        GeometryReader::new(max_depth)
            .read(&mut cursor)
            .map(|(_, geom)| geom)
    }

    #[test]
    fn little_endian_point() {
        let buf = [
            0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x14, 0x40, 0x00,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x24, 0x40,
        ];
        let geom = read(&buf, 0).unwrap();
        assert_eq!(geom, Geometry::Point(Coord::xy(5.0, 10.0).into()));
    }

    #[test]
    fn big_endian_point() {
        let mut buf = vec![0x00, 0x00, 0x00, 0x00, 0x01];
        buf.extend_from_slice(&5.0f64.to_be_bytes());
        buf.extend_from_slice(&10.0f64.to_be_bytes());
        let mut cursor = WkbCursor::new(&buf);
        let (header, geom) = GeometryReader::new(0).read(&mut cursor).unwrap();
        assert_eq!(header.byte_order, Endianness::BigEndian);
        assert_eq!(geom, Geometry::Point(Coord::xy(5.0, 10.0).into()));
    }

    #[test]
    fn multi_point_member_of_wrong_shape() {
        // MultiPoint with one LineString member
        let mut buf = vec![0x01];
        buf.extend_from_slice(&4u32.to_le_bytes());
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.push(0x01);
        buf.extend_from_slice(&2u32.to_le_bytes());
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&[0; 16]);

        assert_eq!(
            read(&buf, 8).unwrap_err(),
            WkbError::UnexpectedSubgeometryType {
                offset: 9,
                expected: WkbGeometryType::Point,
                actual: WkbGeometryType::LineString
            }
        );
    }

    #[test]
    fn member_with_other_dimension() {
        // MultiPoint Z with one 2D Point member
        let mut buf = vec![0x01];
        buf.extend_from_slice(&1004u32.to_le_bytes());
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.push(0x01);
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&[0; 16]);

        assert_eq!(
            read(&buf, 8).unwrap_err(),
            WkbError::MixedDimensions {
                offset: 9,
                expected: Dimension::XYZ,
                actual: Dimension::XY
            }
        );
    }

    #[test]
    fn member_with_other_byte_order() {
        // Little endian MultiPoint holding a big endian Point
        let mut buf = vec![0x01];
        buf.extend_from_slice(&4u32.to_le_bytes());
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.push(0x00);
        buf.extend_from_slice(&1u32.to_be_bytes());
        buf.extend_from_slice(&1.5f64.to_be_bytes());
        buf.extend_from_slice(&(-2.5f64).to_be_bytes());

        let geom = read(&buf, 8).unwrap();
        let multi_point = geom.as_multi_point().unwrap();
        assert_eq!(multi_point.points(), &[Point::new(Coord::xy(1.5, -2.5))]);
    }
}
