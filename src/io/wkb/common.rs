//! Decomposition of WKB type codes into a base shape, a dimension and an SRID flag.
//!
//! Two conventions are recognised and may be mixed:
//!
//! - ISO WKB adds `1000` (Z), `2000` (M) or `3000` (ZM) to the base code.
//! - Extended WKB (PostGIS and others) sets high bits: `0x80000000` for Z, `0x40000000` for M and
//!   `0x20000000` when a 4-byte SRID follows the type code.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::datatypes::Dimension;

/// EWKB flag for the presence of Z ordinates.
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;
/// EWKB flag for the presence of M ordinates.
pub const EWKB_M_FLAG: u32 = 0x4000_0000;
/// EWKB flag for an embedded SRID.
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;

const EWKB_FLAGS_MASK: u32 = EWKB_Z_FLAG | EWKB_M_FLAG | EWKB_SRID_FLAG;

/// Byte order marker (1 byte) plus type code (4 bytes).
pub(crate) const HEADER_BYTES: usize = 1 + 4;

/// The smallest possible complete WKB record of any type: a header and a zero count.
pub(crate) const MIN_RECORD_BYTES: usize = HEADER_BYTES + 4;

/// The base shape of a WKB geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WkbGeometryType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

impl WkbGeometryType {
    /// The shape every element of this Multi* container must have.
    ///
    /// `None` for single geometries and for GeometryCollection, which accepts any shape.
    pub fn element_type(&self) -> Option<WkbGeometryType> {
        match self {
            WkbGeometryType::MultiPoint => Some(WkbGeometryType::Point),
            WkbGeometryType::MultiLineString => Some(WkbGeometryType::LineString),
            WkbGeometryType::MultiPolygon => Some(WkbGeometryType::Polygon),
            _ => None,
        }
    }

    /// The minimum number of bytes a complete record of this shape occupies in 2D.
    pub(crate) fn min_record_bytes(&self) -> usize {
        match self {
            WkbGeometryType::Point => HEADER_BYTES + Dimension::XY.coord_size(),
            _ => MIN_RECORD_BYTES,
        }
    }
}

/// A fully resolved WKB type code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WkbType {
    pub geometry_type: WkbGeometryType,
    pub dimension: Dimension,
    /// Whether a 4-byte SRID follows the type code.
    pub has_srid: bool,
}

impl WkbType {
    pub fn new(geometry_type: WkbGeometryType, dimension: Dimension, has_srid: bool) -> Self {
        Self {
            geometry_type,
            dimension,
            has_srid,
        }
    }

    /// Resolve a raw type code, or `None` when the base shape or dimension band is unknown.
    pub fn from_code(code: u32) -> Option<Self> {
        let flags = code & EWKB_FLAGS_MASK;
        let iso_code = code & !EWKB_FLAGS_MASK;

        let (iso_z, iso_m) = match iso_code / 1000 {
            0 => (false, false),
            1 => (true, false),
            2 => (false, true),
            3 => (true, true),
            _ => return None,
        };
        let geometry_type = WkbGeometryType::try_from_primitive(iso_code % 1000).ok()?;

        let has_z = iso_z || flags & EWKB_Z_FLAG != 0;
        let has_m = iso_m || flags & EWKB_M_FLAG != 0;
        let has_srid = flags & EWKB_SRID_FLAG != 0;

        Some(Self::new(
            geometry_type,
            Dimension::from_flags(has_z, has_m),
            has_srid,
        ))
    }

    /// The ISO type code for this shape and dimension, without any EWKB flags.
    pub fn iso_code(&self) -> u32 {
        let offset = match self.dimension {
            Dimension::XY => 0,
            Dimension::XYZ => 1000,
            Dimension::XYM => 2000,
            Dimension::XYZM => 3000,
        };
        u32::from(self.geometry_type) + offset
    }

    /// The EWKB type code for this shape, dimension and SRID flag.
    pub fn ewkb_code(&self) -> u32 {
        let mut code = u32::from(self.geometry_type);
        if self.dimension.has_z() {
            code |= EWKB_Z_FLAG;
        }
        if self.dimension.has_m() {
            code |= EWKB_M_FLAG;
        }
        if self.has_srid {
            code |= EWKB_SRID_FLAG;
        }
        code
    }
}
