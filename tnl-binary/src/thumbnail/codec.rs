//! JPEG codec used by the fitter
//!
//! The fitter only needs to decode a source image and encode an RGBA canvas
//! at a given quality; anything implementing [`JpegCodec`] can stand in for
//! the default `image`-crate backed codec.

use crate::texture::helpers::TextureExporter;
use image::RgbaImage;
use tnl_core::{Result, TnlError};

/// Image decoder / JPEG encoder collaborator
pub trait JpegCodec {
    /// Decode any supported image format to RGBA
    fn decode(&self, data: &[u8]) -> Result<RgbaImage>;

    /// Encode as JPEG; `quality` 0 is treated as the lowest quality the encoder supports
    fn encode(&self, image: &RgbaImage, quality: u8) -> Result<Vec<u8>>;
}

/// Codec backed by the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageJpegCodec;

impl JpegCodec for ImageJpegCodec {
    fn decode(&self, data: &[u8]) -> Result<RgbaImage> {
        image::load_from_memory(data)
            .map(|image| image.to_rgba8())
            .map_err(|e| TnlError::decode(format!("Failed to decode source image: {}", e)))
    }

    fn encode(&self, image: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
        TextureExporter::encode_jpeg(image, quality)
    }
}

impl<C: JpegCodec + ?Sized> JpegCodec for &C {
    fn decode(&self, data: &[u8]) -> Result<RgbaImage> {
        (**self).decode(data)
    }

    fn encode(&self, image: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
        (**self).encode(image, quality)
    }
}
