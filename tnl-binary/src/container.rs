//! TNL container framing
//!
//! A TNL file is exactly [`TNL_SIZE`] bytes:
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 4 | CRC-32 (big endian) of bytes `[4, TNL_SIZE)` |
//! | 4 | 4 | payload length `L` (big endian) |
//! | 8 | L | JPEG bytes |
//! | 8+L | rest | zero padding |

use crate::reader::{BinaryReader, ByteOrder};
use byteorder::{BigEndian, WriteBytesExt};
use tnl_core::{
    Result, TNL_HEADER_SIZE, TNL_JPEG_MAX_SIZE, TNL_LENGTH_OFFSET, TNL_SIZE, TnlError,
};
use tracing::warn;

/// Checksum and payload length of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TnlHeader {
    pub checksum: u32,
    pub length: u32,
}

impl TnlHeader {
    /// Read the 8-byte header
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < TNL_HEADER_SIZE {
            return Err(TnlError::format(format!(
                "TNL header needs {} bytes, got {}",
                TNL_HEADER_SIZE,
                data.len()
            )));
        }
        let mut reader = BinaryReader::new(data, ByteOrder::Big);
        let checksum = reader.read_u32()?;
        let length = reader.read_u32()?;
        Ok(Self { checksum, length })
    }

    /// End of the payload, checked against the buffer length
    fn payload_end(&self, available: usize) -> Result<usize> {
        usize::try_from(self.length)
            .ok()
            .and_then(|length| TNL_HEADER_SIZE.checked_add(length))
            .filter(|&end| end <= available)
            .ok_or_else(|| {
                TnlError::format(format!(
                    "TNL payload length {} exceeds buffer of {} bytes",
                    self.length, available
                ))
            })
    }
}

/// CRC-32 (ISO-HDLC) of `data`
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Extract the JPEG payload of a container
pub fn decode_container(data: &[u8]) -> Result<Vec<u8>> {
    let header = TnlHeader::parse(data)?;
    let end = header.payload_end(data.len())?;
    if data.len() == TNL_SIZE && header.checksum != crc32(&data[TNL_LENGTH_OFFSET..]) {
        warn!(
            "TNL checksum mismatch (stored {:#010x}), extracting payload anyway",
            header.checksum
        );
    }
    let mut reader = BinaryReader::new(data, ByteOrder::Big);
    reader.set_position(TNL_HEADER_SIZE as u64);
    Ok(reader.read_slice(end - TNL_HEADER_SIZE)?.to_vec())
}

/// Frame a JPEG payload into a checksummed, zero-padded container
pub fn encode_container(jpeg: &[u8]) -> Result<Vec<u8>> {
    if jpeg.len() > TNL_JPEG_MAX_SIZE {
        return Err(TnlError::format(format!(
            "JPEG of {} bytes exceeds the TNL limit of {} bytes",
            jpeg.len(),
            TNL_JPEG_MAX_SIZE
        )));
    }

    let mut payload = Vec::with_capacity(TNL_SIZE - TNL_LENGTH_OFFSET);
    payload.write_u32::<BigEndian>(jpeg.len() as u32)?;
    payload.extend_from_slice(jpeg);
    payload.resize(TNL_SIZE - TNL_LENGTH_OFFSET, 0);

    let mut tnl = Vec::with_capacity(TNL_SIZE);
    tnl.write_u32::<BigEndian>(crc32(&payload))?;
    tnl.extend_from_slice(&payload);
    Ok(tnl)
}

/// Whether `data` is a full-size container whose stored checksum is correct
pub fn verify_checksum(data: &[u8]) -> bool {
    if data.len() != TNL_SIZE {
        return false;
    }
    match TnlHeader::parse(data) {
        Ok(header) => header.checksum == crc32(&data[TNL_LENGTH_OFFSET..]),
        Err(_) => false,
    }
}

/// A TNL container held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TnlFile {
    header: TnlHeader,
    data: Vec<u8>,
}

impl TnlFile {
    /// Wrap container bytes after validating the header
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let header = TnlHeader::parse(&data)?;
        header.payload_end(data.len())?;
        Ok(Self { header, data })
    }

    /// Build a container around a JPEG payload
    pub fn from_jpeg(jpeg: &[u8]) -> Result<Self> {
        Self::from_bytes(encode_container(jpeg)?)
    }

    pub fn header(&self) -> TnlHeader {
        self.header
    }

    /// Borrow the JPEG payload
    pub fn jpeg(&self) -> &[u8] {
        let length = self.header.length as usize;
        &self.data[TNL_HEADER_SIZE..TNL_HEADER_SIZE + length]
    }

    pub fn is_checksum_valid(&self) -> bool {
        verify_checksum(&self.data)
    }

    /// Run the broken-encoder heuristic on the payload
    pub fn is_broken(&self) -> bool {
        crate::detector::is_broken(self.jpeg())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}
