//! A decoder for ISO-flavored and extended (EWKB) WKB-encoded geometries.

mod api;
mod common;
pub(crate) mod reader;

pub use api::{
    decode_batch, from_wkb, from_wkb_with_options, read_wkb_header, FromWKB, WkbReaderOptions,
};
pub(crate) use api::read_wkb;
pub use common::{WkbGeometryType, WkbType, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG};
pub use reader::{Endianness, WkbCursor, WkbHeader};
