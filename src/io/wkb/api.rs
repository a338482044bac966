#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::{WkbError, WkbResult};
use crate::geometry::Geometry;
use crate::io::wkb::reader::{GeometryReader, WkbCursor, WkbHeader};

/// Options for the WKB reader.
#[derive(Debug, Clone)]
pub struct WkbReaderOptions {
    /// The deepest level of nested records accepted.
    ///
    /// The top-level record is level 0, members of a Multi* or GeometryCollection are level 1,
    /// members of a collection inside a collection are level 2, and so on.
    pub max_depth: usize,

    /// If `true`, bytes left after the top-level record are ignored instead of rejected.
    pub allow_trailing_bytes: bool,
}

impl WkbReaderOptions {
    pub fn new(max_depth: usize, allow_trailing_bytes: bool) -> Self {
        Self {
            max_depth,
            allow_trailing_bytes,
        }
    }
}

impl Default for WkbReaderOptions {
    fn default() -> Self {
        Self::new(32, false)
    }
}

/// A type that can be decoded from a single WKB buffer.
pub trait FromWKB: Sized {
    fn from_wkb(buf: &[u8], options: &WkbReaderOptions) -> WkbResult<Self>;
}

impl FromWKB for Geometry {
    fn from_wkb(buf: &[u8], options: &WkbReaderOptions) -> WkbResult<Self> {
        from_wkb_with_options(buf, options)
    }
}

/// Decode one WKB or EWKB buffer, in either byte order, with default options.
///
/// ```
/// use geopackage_wkb::io::wkb::from_wkb;
///
/// let buf = [
///     0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x14, 0x40, 0x00, 0x00,
///     0x00, 0x00, 0x00, 0x00, 0x24, 0x40,
/// ];
/// let geometry = from_wkb(&buf).unwrap();
/// let point = geometry.as_point().unwrap();
/// assert_eq!((point.x(), point.y()), (5.0, 10.0));
/// ```
pub fn from_wkb(buf: &[u8]) -> WkbResult<Geometry> {
    from_wkb_with_options(buf, &Default::default())
}

/// Decode one WKB or EWKB buffer.
pub fn from_wkb_with_options(buf: &[u8], options: &WkbReaderOptions) -> WkbResult<Geometry> {
    let mut cursor = WkbCursor::new(buf);
    read_wkb(&mut cursor, options).map(|(_, geometry)| geometry)
}

/// Decode the record under `cursor`, enforcing the trailing bytes option.
pub(crate) fn read_wkb(
    cursor: &mut WkbCursor<'_>,
    options: &WkbReaderOptions,
) -> WkbResult<(WkbHeader, Geometry)> {
    let (header, geometry) = GeometryReader::new(options.max_depth).read(cursor)?;
    if !options.allow_trailing_bytes && cursor.remaining() > 0 {
        return Err(WkbError::TrailingBytes {
            offset: cursor.position(),
            remaining: cursor.remaining(),
        });
    }
    Ok((header, geometry))
}

/// Read the header of a WKB buffer without decoding the geometry body.
pub fn read_wkb_header(buf: &[u8]) -> WkbResult<WkbHeader> {
    WkbHeader::read(&mut WkbCursor::new(buf))
}

/// Decode many independent buffers, returning one result per buffer in input order.
///
/// A failure in one buffer does not affect any other. With the `rayon` feature, buffers are
/// decoded in parallel.
pub fn decode_batch<B: AsRef<[u8]> + Sync>(
    bufs: &[B],
    options: &WkbReaderOptions,
) -> Vec<WkbResult<Geometry>> {
    #[cfg(feature = "rayon")]
    {
        let mut output_vec = Vec::with_capacity(bufs.len());
        bufs.par_iter()
            .map(|buf| from_wkb_with_options(buf.as_ref(), options))
            .collect_into_vec(&mut output_vec);
        output_vec
    }

    #[cfg(not(feature = "rayon"))]
    {
        bufs.iter()
            .map(|buf| from_wkb_with_options(buf.as_ref(), options))
            .collect()
    }
}
