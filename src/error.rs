//! Defines [`WkbError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::datatypes::Dimension;
use crate::io::wkb::WkbGeometryType;

/// Enum with all errors in this crate.
///
/// Every variant carries the byte offset into the input buffer at which the problem was detected,
/// so that a caller decoding many rows can report and skip the offending one.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WkbError {
    /// Fewer bytes remain than a field requires.
    #[error("Buffer underflow at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    BufferUnderflow {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// The byte order marker is neither `0` (big endian) nor `1` (little endian).
    #[error("Invalid byte order marker {value:#04x} at offset {offset}")]
    InvalidByteOrder { offset: usize, value: u8 },

    /// The base shape of a type code is outside the known set, or the dimension band is invalid.
    #[error("Unknown WKB geometry type code {type_code} at offset {offset}")]
    UnknownGeometryType { offset: usize, type_code: u32 },

    /// An element of a Multi* geometry is not of the element shape of its container.
    #[error("Unexpected sub-geometry at offset {offset}: expected {expected:?}, found {actual:?}")]
    UnexpectedSubgeometryType {
        offset: usize,
        expected: WkbGeometryType,
        actual: WkbGeometryType,
    },

    /// A declared count cannot possibly fit in the rest of the buffer.
    #[error(
        "Count {count} at offset {offset} needs at least {element_size} bytes per element, \
         only {remaining} bytes remaining"
    )]
    CountOverflow {
        offset: usize,
        count: u32,
        element_size: usize,
        remaining: usize,
    },

    /// Geometry collections are nested deeper than the configured maximum.
    #[error("Geometry nesting at offset {offset} exceeds maximum depth of {max_depth}")]
    MaxDepthExceeded { offset: usize, max_depth: usize },

    /// A nested geometry does not share the dimension of its container.
    #[error("Mixed dimensions at offset {offset}: expected {expected:?}, found {actual:?}")]
    MixedDimensions {
        offset: usize,
        expected: Dimension,
        actual: Dimension,
    },

    /// Bytes are left over after the top-level geometry.
    #[error("{remaining} trailing bytes after geometry ending at offset {offset}")]
    TrailingBytes { offset: usize, remaining: usize },

    /// The GeoPackage binary header is malformed or unsupported.
    #[error("Invalid GeoPackage geometry header: {0}")]
    InvalidGeoPackageHeader(String),
}

impl WkbError {
    /// The byte offset at which this error was detected, if it relates to a specific position.
    pub fn offset(&self) -> Option<usize> {
        use WkbError::*;
        match self {
            BufferUnderflow { offset, .. }
            | InvalidByteOrder { offset, .. }
            | UnknownGeometryType { offset, .. }
            | UnexpectedSubgeometryType { offset, .. }
            | CountOverflow { offset, .. }
            | MaxDepthExceeded { offset, .. }
            | MixedDimensions { offset, .. }
            | TrailingBytes { offset, .. } => Some(*offset),
            InvalidGeoPackageHeader(_) => None,
        }
    }

    /// Whether this error means the input ended before the geometry it declares.
    ///
    /// A cut inside a fixed-size field surfaces as [`WkbError::BufferUnderflow`]; a cut after a
    /// declared count is caught earlier by the count check as [`WkbError::CountOverflow`].
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            WkbError::BufferUnderflow { .. } | WkbError::CountOverflow { .. }
        )
    }
}

/// Crate-specific result type.
pub type WkbResult<T> = std::result::Result<T, WkbError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_includes_offset() {
        let err = WkbError::InvalidByteOrder {
            offset: 0,
            value: 0x47,
        };
        assert_eq!(err.to_string(), "Invalid byte order marker 0x47 at offset 0");
        assert_eq!(err.offset(), Some(0));
    }

    #[test]
    fn truncation_kinds() {
        let underflow = WkbError::BufferUnderflow {
            offset: 5,
            needed: 8,
            remaining: 3,
        };
        let header = WkbError::InvalidGeoPackageHeader("bad magic".to_string());
        assert!(underflow.is_truncation());
        assert!(!header.is_truncation());
        assert_eq!(header.offset(), None);
    }
}
