//! Raw tiled texture codec
//!
//! A raw buffer holds two RGB565 canvases addressed through
//! [`TileRegion`]. Decoding walks each canvas and yields images in canvas
//! orientation (168x216 and 32x240). Encoding takes images in screen
//! orientation (216x168 and 240x32) and maps every canvas pixel `(x, y)` to
//! screen pixel `(y, width - 1 - x)`.

use super::helpers::ImageOps;
use super::pixel::{rgb565_to_rgba, rgba_to_rgb565};
use super::swizzle::TileRegion;
use crate::reader::{BinaryReader, ByteOrder};
use image::RgbaImage;
use tnl_core::{RAW_TEXTURE_SIZE, Result, TnlError};
use tracing::debug;

/// Both canvases of a raw texture buffer
#[derive(Debug, Clone, PartialEq)]
pub struct RawTexture {
    /// Region A, canvas orientation
    pub tall: RgbaImage,
    /// Region B, canvas orientation
    pub strip: RgbaImage,
}

impl RawTexture {
    /// Decode a raw buffer; it must hold at least [`RAW_TEXTURE_SIZE`] bytes
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < RAW_TEXTURE_SIZE {
            return Err(TnlError::not_enough_data(RAW_TEXTURE_SIZE, data.len()));
        }
        let mut reader = BinaryReader::new(data, ByteOrder::Little);
        let tall = decode_region(&mut reader, TileRegion::TALL)?;
        let strip = decode_region(&mut reader, TileRegion::STRIP)?;
        Ok(Self { tall, strip })
    }

    /// Encode screen-oriented images into a fresh raw buffer
    pub fn encode(tall: &RgbaImage, strip: &RgbaImage) -> Vec<u8> {
        let mut buffer = vec![0u8; RAW_TEXTURE_SIZE];
        encode_region(&mut buffer, tall, TileRegion::TALL);
        encode_region(&mut buffer, strip, TileRegion::STRIP);
        buffer
    }
}

/// Decode both regions of a raw buffer as `(tall, strip)`
pub fn decode_raw_texture(data: &[u8]) -> Result<(RgbaImage, RgbaImage)> {
    let texture = RawTexture::decode(data)?;
    Ok((texture.tall, texture.strip))
}

/// Encode screen-oriented `tall` and `strip` images into a raw buffer
pub fn encode_raw_texture(tall: &RgbaImage, strip: &RgbaImage) -> Vec<u8> {
    RawTexture::encode(tall, strip)
}

fn decode_region(reader: &mut BinaryReader<'_>, region: TileRegion) -> Result<RgbaImage> {
    let mut image = RgbaImage::new(region.width, region.height);
    for y in 0..region.height {
        for x in 0..region.width {
            let sample = reader.read_u16_at(region.offset(x, y))?;
            image.put_pixel(x, y, rgb565_to_rgba(sample));
        }
    }
    Ok(image)
}

fn encode_region(buffer: &mut [u8], image: &RgbaImage, region: TileRegion) {
    let (sw, sh) = region.screen_dimensions();
    let letterboxed;
    let screen = if image.dimensions() == (sw, sh) {
        image
    } else {
        debug!(
            "Letterboxing {}x{} image into {}x{} region",
            image.width(),
            image.height(),
            sw,
            sh
        );
        letterboxed = ImageOps::contain(image, sw, sh);
        &letterboxed
    };

    for y in 0..region.height {
        for x in 0..region.width {
            let (sx, sy) = region.screen_coord(x, y);
            let sample = rgba_to_rgb565(*screen.get_pixel(sx, sy));
            let offset = region.offset(x, y);
            buffer[offset..offset + 2].copy_from_slice(&sample.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::swizzle::{from_screen, to_screen};
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            let v = ((x * 7 + y * 13) & 0xFFFF) as u16;
            rgb565_to_rgba(v)
        })
    }

    #[test]
    fn test_decode_dimensions() {
        let data = vec![0u8; RAW_TEXTURE_SIZE];
        let (tall, strip) = decode_raw_texture(&data).unwrap();
        assert_eq!(tall.dimensions(), (168, 216));
        assert_eq!(strip.dimensions(), (32, 240));
        assert!(tall.pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn test_decode_rejects_short_buffer() {
        let data = vec![0u8; RAW_TEXTURE_SIZE - 1];
        assert!(matches!(
            decode_raw_texture(&data),
            Err(TnlError::NotEnoughData { expected: RAW_TEXTURE_SIZE, .. })
        ));
    }

    #[test]
    fn test_decode_reads_swizzled_sample() {
        let mut data = vec![0u8; RAW_TEXTURE_SIZE];
        let offset = TileRegion::TALL.offset(9, 3);
        data[offset..offset + 2].copy_from_slice(&0xF800u16.to_le_bytes());
        let offset = TileRegion::STRIP.offset(31, 239);
        data[offset..offset + 2].copy_from_slice(&0x001Fu16.to_le_bytes());

        let (tall, strip) = decode_raw_texture(&data).unwrap();
        assert_eq!(*tall.get_pixel(9, 3), Rgba([0xF8, 0, 0, 0xFF]));
        assert_eq!(*strip.get_pixel(31, 239), Rgba([0, 0, 0xF8, 0xFF]));
    }

    #[test]
    fn test_encode_decode_through_screen() {
        let tall = gradient(168, 216);
        let strip = gradient(32, 240);
        let buffer = encode_raw_texture(&to_screen(&tall), &to_screen(&strip));
        assert_eq!(buffer.len(), RAW_TEXTURE_SIZE);

        let (decoded_tall, decoded_strip) = decode_raw_texture(&buffer).unwrap();
        assert_eq!(decoded_tall, tall);
        assert_eq!(decoded_strip, strip);
    }

    #[test]
    fn test_encode_applies_rotation() {
        // screen pixel (0, 0) lands on canvas pixel (width - 1, 0)
        let mut screen = RgbaImage::from_pixel(216, 168, Rgba([0, 0, 0, 255]));
        screen.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        let strip = RgbaImage::from_pixel(240, 32, Rgba([0, 0, 0, 255]));
        let buffer = encode_raw_texture(&screen, &strip);

        let offset = TileRegion::TALL.offset(167, 0);
        assert_eq!(&buffer[offset..offset + 2], &[0xFF, 0xFF]);
        let (tall, _) = decode_raw_texture(&buffer).unwrap();
        assert_eq!(
            from_screen(&screen).get_pixel(167, 0),
            &Rgba([255, 255, 255, 255])
        );
        assert_eq!(tall.get_pixel(167, 0), &Rgba([0xF8, 0xFC, 0xF8, 0xFF]));
    }

    #[test]
    fn test_encode_letterboxes_other_sizes() {
        let tall = RgbaImage::from_pixel(100, 100, Rgba([255, 255, 255, 255]));
        let strip = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
        let buffer = encode_raw_texture(&tall, &strip);
        assert_eq!(buffer.len(), RAW_TEXTURE_SIZE);
        // padding beyond the regions stays zero
        assert!(buffer[TileRegion::STRIP.end_offset()..].iter().all(|&b| b == 0));
    }
}
