use crate::datatypes::Dimension;
use crate::error::{WkbError, WkbResult};
use crate::io::wkb::common::{WkbGeometryType, WkbType};
use crate::io::wkb::reader::cursor::{Endianness, WkbCursor};

/// The fixed leading fields of one WKB record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WkbHeader {
    /// Offset of the byte order marker that starts this record.
    pub offset: usize,
    pub byte_order: Endianness,
    pub wkb_type: WkbType,
    /// The SRID embedded through the EWKB SRID flag.
    pub srid: Option<i32>,
    /// Offset of the first byte after the header fields.
    pub body_offset: usize,
}

impl WkbHeader {
    /// Read the byte order, the type code and, if flagged, the SRID.
    ///
    /// Leaves the cursor at the first byte of the geometry body, using the record's byte order.
    pub fn read(cursor: &mut WkbCursor<'_>) -> WkbResult<Self> {
        let offset = cursor.position();
        let byte_order = cursor.read_byte_order()?;

        let type_offset = cursor.position();
        let type_code = cursor.read_u32()?;
        let wkb_type = WkbType::from_code(type_code).ok_or(WkbError::UnknownGeometryType {
            offset: type_offset,
            type_code,
        })?;

        let srid = if wkb_type.has_srid {
            Some(cursor.read_i32()?)
        } else {
            None
        };

        Ok(Self {
            offset,
            byte_order,
            wkb_type,
            srid,
            body_offset: cursor.position(),
        })
    }

    pub fn geometry_type(&self) -> WkbGeometryType {
        self.wkb_type.geometry_type
    }

    pub fn dimension(&self) -> Dimension {
        self.wkb_type.dimension
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkb::common::{EWKB_SRID_FLAG, EWKB_Z_FLAG};

    #[test]
    fn reads_ewkb_srid() {
        let mut buf = vec![0];
        buf.extend_from_slice(&(1 | EWKB_Z_FLAG | EWKB_SRID_FLAG).to_be_bytes());
        buf.extend_from_slice(&4326i32.to_be_bytes());

        let mut cursor = WkbCursor::new(&buf);
        let header = WkbHeader::read(&mut cursor).unwrap();
        assert_eq!(header.byte_order, Endianness::BigEndian);
        assert_eq!(header.geometry_type(), WkbGeometryType::Point);
        assert_eq!(header.dimension(), Dimension::XYZ);
        assert_eq!(header.srid, Some(4326));
        assert_eq!(header.body_offset, 9);
        assert_eq!(cursor.position(), 9);
    }

    #[test]
    fn unknown_type_reports_code_offset() {
        let mut buf = vec![1];
        buf.extend_from_slice(&8u32.to_le_bytes());
        let mut cursor = WkbCursor::new(&buf);
        assert_eq!(
            WkbHeader::read(&mut cursor).unwrap_err(),
            WkbError::UnknownGeometryType {
                offset: 1,
                type_code: 8
            }
        );
    }

    #[test]
    fn truncated_srid() {
        let mut buf = vec![1];
        buf.extend_from_slice(&(2 | EWKB_SRID_FLAG).to_le_bytes());
        buf.extend_from_slice(&[0xe6, 0x10]);
        let mut cursor = WkbCursor::new(&buf);
        assert!(matches!(
            WkbHeader::read(&mut cursor),
            Err(WkbError::BufferUnderflow { offset: 5, .. })
        ));
    }
}
