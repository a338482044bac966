//! A decoder for the Well-Known Binary (WKB) geometries that spatial databases such as
//! GeoPackage store in their geometry columns.
//!
//! Each blob is decoded independently into an owned, strongly-typed [`Geometry`]. Both byte
//! orders, ISO and extended (EWKB) type codes, Z/M ordinates and embedded SRIDs are supported.
//! Malformed input never panics; every failure is a [`WkbError`] carrying the offending offset.
//!
//! ```
//! use geopackage_wkb::io::wkb::from_wkb;
//!
//! // LINESTRING (0 0, 1 1)
//! let mut buf = vec![0x01, 0x02, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00];
//! for v in [0.0f64, 0.0, 1.0, 1.0] {
//!     buf.extend_from_slice(&v.to_le_bytes());
//! }
//! let geometry = from_wkb(&buf).unwrap();
//! assert_eq!(geometry.as_line_string().unwrap().num_coords(), 2);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use datatypes::Dimension;
pub use error::{WkbError, WkbResult};
pub use geometry::Geometry;

pub mod datatypes;
pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
