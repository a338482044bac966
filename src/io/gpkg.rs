//! Reading the geometry column of a GeoPackage table.
//!
//! GeoPackage wraps each WKB geometry in a `StandardGeoPackageBinary` header:
//!
//! ```text
//! magic    2 bytes  "GP"
//! version  1 byte   0 for GeoPackage 1.x
//! flags    1 byte   bit 0: header byte order (1 = little endian)
//!                   bits 1-3: envelope contents indicator
//!                   bit 4: empty geometry
//!                   bit 5: extended GeoPackageBinary type
//! srs_id   4 bytes  i32 in the header byte order
//! envelope 0, 32, 48 or 64 bytes of f64
//! WKB      the rest of the blob
//! ```
//!
//! See <https://www.geopackage.org/spec/#gpb_format>.

use crate::error::{WkbError, WkbResult};
use crate::geometry::Geometry;
use crate::io::wkb::{read_wkb, Endianness, WkbCursor, WkbReaderOptions};

const MAGIC: &[u8; 2] = b"GP";

const BYTE_ORDER_BIT: u8 = 0b0000_0001;
const ENVELOPE_BITS: u8 = 0b0000_1110;
const EMPTY_BIT: u8 = 0b0001_0000;
const EXTENDED_BIT: u8 = 0b0010_0000;

/// The bounding box stored in a GeoPackage geometry header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    /// `(min_z, max_z)`
    pub z: Option<(f64, f64)>,
    /// `(min_m, max_m)`
    pub m: Option<(f64, f64)>,
}

/// A parsed GeoPackage geometry header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpkgHeader {
    pub version: u8,
    /// Byte order of the header fields. The WKB that follows declares its own.
    pub byte_order: Endianness,
    pub srs_id: i32,
    pub envelope: Option<Envelope>,
    pub is_empty: bool,
    /// Offset of the first WKB byte.
    pub wkb_offset: usize,
}

/// A decoded GeoPackage geometry blob.
#[derive(Debug, Clone, PartialEq)]
pub struct GpkgGeometry {
    pub header: GpkgHeader,
    /// `None` when the blob is flagged empty and carries no WKB.
    pub geometry: Option<Geometry>,
}

/// Whether `buf` starts with the GeoPackage binary magic.
pub fn is_gpkg_blob(buf: &[u8]) -> bool {
    buf.starts_with(MAGIC)
}

fn invalid(msg: impl Into<String>) -> WkbError {
    WkbError::InvalidGeoPackageHeader(msg.into())
}

fn read_range(cursor: &mut WkbCursor<'_>) -> WkbResult<(f64, f64)> {
    Ok((cursor.read_f64()?, cursor.read_f64()?))
}

fn read_envelope(cursor: &mut WkbCursor<'_>, indicator: u8) -> WkbResult<Option<Envelope>> {
    let (has_z, has_m) = match indicator {
        0 => return Ok(None),
        1 => (false, false),
        2 => (true, false),
        3 => (false, true),
        4 => (true, true),
        _ => return Err(invalid(format!("invalid envelope indicator {indicator}"))),
    };

    let (min_x, max_x) = read_range(cursor)?;
    let (min_y, max_y) = read_range(cursor)?;
    let z = if has_z {
        Some(read_range(cursor)?)
    } else {
        None
    };
    let m = if has_m {
        Some(read_range(cursor)?)
    } else {
        None
    };
    Ok(Some(Envelope {
        min_x,
        max_x,
        min_y,
        max_y,
        z,
        m,
    }))
}

fn read_header(cursor: &mut WkbCursor<'_>) -> WkbResult<GpkgHeader> {
    let magic = cursor.read_bytes(2)?;
    if magic != MAGIC {
        return Err(invalid(format!("bad magic {magic:02x?}")));
    }

    let version = cursor.read_u8()?;
    if version != 0 {
        return Err(invalid(format!("unsupported version {version}")));
    }

    let flags = cursor.read_u8()?;
    if flags & EXTENDED_BIT != 0 {
        return Err(invalid("extended GeoPackageBinary geometries are not supported"));
    }
    let byte_order = if flags & BYTE_ORDER_BIT != 0 {
        Endianness::LittleEndian
    } else {
        Endianness::BigEndian
    };
    cursor.set_byte_order(byte_order);

    let srs_id = cursor.read_i32()?;
    let envelope = read_envelope(cursor, (flags & ENVELOPE_BITS) >> 1)?;

    Ok(GpkgHeader {
        version,
        byte_order,
        srs_id,
        envelope,
        is_empty: flags & EMPTY_BIT != 0,
        wkb_offset: cursor.position(),
    })
}

/// Parse the GeoPackage header of a geometry blob.
pub fn parse_gpkg_header(buf: &[u8]) -> WkbResult<GpkgHeader> {
    read_header(&mut WkbCursor::new(buf))
}

/// Decode a GeoPackage geometry blob: the header and the WKB geometry that follows it.
///
/// Offsets in errors are relative to the start of the blob.
pub fn from_gpkg(buf: &[u8], options: &WkbReaderOptions) -> WkbResult<GpkgGeometry> {
    let mut cursor = WkbCursor::new(buf);
    let header = read_header(&mut cursor)?;

    if header.is_empty && cursor.remaining() == 0 {
        return Ok(GpkgGeometry {
            header,
            geometry: None,
        });
    }

    let (_, geometry) = read_wkb(&mut cursor, options)?;
    Ok(GpkgGeometry {
        header,
        geometry: Some(geometry),
    })
}
