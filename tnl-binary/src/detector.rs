//! Detection of thumbnails written by a known broken encoder
//!
//! The faulty encoder fills most of its output with the word `0xA2800A28`.
//! A JPEG is considered broken when more than half of its bytes belong to
//! that word, counted over non-overlapping big-endian 4-byte words. A
//! trailing partial word is not read.

use byteorder::{BigEndian, ByteOrder};
use tnl_core::{BROKEN_RATIO, BROKEN_SENTINEL};

/// Number of aligned sentinel words in `jpeg`
pub fn sentinel_count(jpeg: &[u8]) -> usize {
    jpeg.chunks_exact(4)
        .filter(|word| BigEndian::read_u32(word) == BROKEN_SENTINEL)
        .count()
}

/// Fraction of `jpeg` made of sentinel words; 0 for an empty buffer
pub fn sentinel_ratio(jpeg: &[u8]) -> f64 {
    if jpeg.is_empty() {
        return 0.0;
    }
    (sentinel_count(jpeg) * 4) as f64 / jpeg.len() as f64
}

/// Whether a JPEG carries the broken-encoder fingerprint
pub fn is_broken(jpeg: &[u8]) -> bool {
    sentinel_ratio(jpeg) > BROKEN_RATIO
}

/// Run the detector on the payload of a TNL container
pub fn is_broken_tnl(container: &[u8]) -> tnl_core::Result<bool> {
    let jpeg = crate::container::decode_container(container)?;
    Ok(is_broken(&jpeg))
}
