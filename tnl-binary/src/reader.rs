//! Binary data reader for container and texture buffers

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::Cursor;
use tnl_core::{Result, TnlError};

/// Byte order for reading binary data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Big endian (container header fields)
    Big,
    /// Little endian (RGB565 texture samples)
    #[default]
    Little,
}

/// Bounds-checked reader over a byte slice
pub struct BinaryReader<'a> {
    cursor: Cursor<&'a [u8]>,
    byte_order: ByteOrder,
}

impl<'a> BinaryReader<'a> {
    /// Create a new binary reader from byte slice
    pub fn new(data: &'a [u8], byte_order: ByteOrder) -> Self {
        Self {
            cursor: Cursor::new(data),
            byte_order,
        }
    }

    /// Get current position in the stream
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// Set position in the stream
    pub fn set_position(&mut self, pos: u64) {
        self.cursor.set_position(pos);
    }

    /// Get the total length of the data
    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    /// Check if the reader is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get remaining bytes from current position
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position() as usize)
    }

    /// Check if we have at least `count` bytes remaining
    pub fn has_bytes(&self, count: usize) -> bool {
        self.remaining() >= count
    }

    /// Read an unsigned 16-bit integer
    pub fn read_u16(&mut self) -> Result<u16> {
        if !self.has_bytes(2) {
            return Err(TnlError::not_enough_data(2, self.remaining()));
        }
        match self.byte_order {
            ByteOrder::Big => Ok(self.cursor.read_u16::<BigEndian>()?),
            ByteOrder::Little => Ok(self.cursor.read_u16::<LittleEndian>()?),
        }
    }

    /// Read an unsigned 32-bit integer
    pub fn read_u32(&mut self) -> Result<u32> {
        if !self.has_bytes(4) {
            return Err(TnlError::not_enough_data(4, self.remaining()));
        }
        match self.byte_order {
            ByteOrder::Big => Ok(self.cursor.read_u32::<BigEndian>()?),
            ByteOrder::Little => Ok(self.cursor.read_u32::<LittleEndian>()?),
        }
    }

    /// Read an unsigned 16-bit integer at an absolute offset
    pub fn read_u16_at(&mut self, offset: usize) -> Result<u16> {
        self.set_position(offset as u64);
        self.read_u16()
    }

    /// Borrow `count` bytes and advance past them
    pub fn read_slice(&mut self, count: usize) -> Result<&'a [u8]> {
        if !self.has_bytes(count) {
            return Err(TnlError::not_enough_data(count, self.remaining()));
        }
        let start = self.position() as usize;
        let data: &'a [u8] = *self.cursor.get_ref();
        self.set_position((start + count) as u64);
        Ok(&data[start..start + count])
    }
}
