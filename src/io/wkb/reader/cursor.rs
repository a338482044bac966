use byteorder::{BigEndian, ByteOrder, LittleEndian};
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{WkbError, WkbResult};

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Endianness {
    BigEndian = 0,
    LittleEndian = 1,
}

/// A sequential, bounds-checked reader over a borrowed byte buffer.
///
/// Multi-byte reads use the cursor's current byte order, which is set by
/// [`WkbCursor::read_byte_order`] at the start of every WKB record. The position only moves
/// forward and never passes the end of the buffer.
#[derive(Debug, Clone)]
pub struct WkbCursor<'a> {
    buf: &'a [u8],
    position: usize,
    byte_order: Endianness,
}

impl<'a> WkbCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            position: 0,
            byte_order: Endianness::LittleEndian,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    pub fn set_byte_order(&mut self, byte_order: Endianness) {
        self.byte_order = byte_order;
    }

    /// Consume the next `n` bytes.
    pub fn read_bytes(&mut self, n: usize) -> WkbResult<&'a [u8]> {
        let remaining = self.remaining();
        if remaining < n {
            return Err(WkbError::BufferUnderflow {
                offset: self.position,
                needed: n,
                remaining,
            });
        }
        let bytes = &self.buf[self.position..self.position + n];
        self.position += n;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> WkbResult<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u32(&mut self) -> WkbResult<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(match self.byte_order {
            Endianness::BigEndian => BigEndian::read_u32(bytes),
            Endianness::LittleEndian => LittleEndian::read_u32(bytes),
        })
    }

    pub fn read_i32(&mut self) -> WkbResult<i32> {
        let bytes = self.read_bytes(4)?;
        Ok(match self.byte_order {
            Endianness::BigEndian => BigEndian::read_i32(bytes),
            Endianness::LittleEndian => LittleEndian::read_i32(bytes),
        })
    }

    pub fn read_f64(&mut self) -> WkbResult<f64> {
        let bytes = self.read_bytes(8)?;
        Ok(match self.byte_order {
            Endianness::BigEndian => BigEndian::read_f64(bytes),
            Endianness::LittleEndian => LittleEndian::read_f64(bytes),
        })
    }

    /// Read a byte order marker and switch the cursor to it.
    pub fn read_byte_order(&mut self) -> WkbResult<Endianness> {
        let offset = self.position;
        let value = self.read_u8()?;
        let byte_order = Endianness::try_from_primitive(value)
            .map_err(|_| WkbError::InvalidByteOrder { offset, value })?;
        self.byte_order = byte_order;
        Ok(byte_order)
    }

    /// Read a `u32` element count and check that `count` elements of at least
    /// `min_element_size` bytes each can fit in the rest of the buffer.
    pub fn read_count(&mut self, min_element_size: usize) -> WkbResult<usize> {
        let offset = self.position;
        let count = self.read_u32()?;
        let remaining = self.remaining();
        let fits = usize::try_from(count)
            .ok()
            .and_then(|n| n.checked_mul(min_element_size).map(|size| (n, size)))
            .filter(|(_, size)| *size <= remaining);
        match fits {
            Some((n, _)) => Ok(n),
            None => Err(WkbError::CountOverflow {
                offset,
                count,
                element_size: min_element_size,
                remaining,
            }),
        }
    }
}
