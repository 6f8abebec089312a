//! RGB565 <-> RGBA8 pixel conversion
//!
//! Expansion shifts each channel up without replicating high bits, so the
//! low bits of every decoded channel are zero. Encoding keeps the top 5/6/5
//! bits, which makes `encode(decode(v)) == v` for every 16-bit sample.

use image::Rgba;

/// Expand an RGB565 sample to opaque RGBA8
pub fn rgb565_to_rgba(v: u16) -> Rgba<u8> {
    let r = ((v >> 11) & 0x1F) as u8;
    let g = ((v >> 5) & 0x3F) as u8;
    let b = (v & 0x1F) as u8;
    Rgba([r << 3, g << 2, b << 3, 0xFF])
}

/// Pack RGBA8 as `0xRRGGBBAA`
pub fn pack_rgba(pixel: Rgba<u8>) -> u32 {
    u32::from_be_bytes(pixel.0)
}

/// Truncate a packed `0xRRGGBBAA` colour to RGB565; alpha is dropped
pub fn packed_to_rgb565(color: u32) -> u16 {
    let r5 = ((color >> 24) & 0xFF) >> 3;
    let g6 = ((color >> 16) & 0xFF) >> 2;
    let b5 = ((color >> 8) & 0xFF) >> 3;
    ((r5 << 11) | (g6 << 5) | b5) as u16
}

/// Truncate an RGBA8 pixel to RGB565
pub fn rgba_to_rgb565(pixel: Rgba<u8>) -> u16 {
    packed_to_rgb565(pack_rgba(pixel))
}
