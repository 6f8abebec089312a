//! Image export utilities
//!
//! Encodes decoded textures to in-memory buffers or files. JPEG output drops
//! the alpha channel.

use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use tnl_core::{Result, TnlError};

/// Image exporter utility
pub struct TextureExporter;

impl TextureExporter {
    /// Encode as baseline JPEG at `quality` (clamped to 1..=100)
    pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
        let rgb_image = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
        let mut output = Vec::new();
        let mut encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut output, quality.clamp(1, 100));
        encoder
            .encode_image(&rgb_image)
            .map_err(|e| TnlError::decode(format!("Failed to encode JPEG: {}", e)))?;
        Ok(output)
    }

    /// Encode with a non-JPEG format into memory
    pub fn encode_with_format(image: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>> {
        let mut output = Cursor::new(Vec::new());
        image.write_to(&mut output, format).map_err(|e| {
            TnlError::decode(format!("Failed to encode image as {:?}: {}", format, e))
        })?;
        Ok(output.into_inner())
    }

    /// Encode choosing the format from a file extension; unknown extensions produce PNG
    pub fn encode_for_extension(
        image: &RgbaImage,
        extension: &str,
        quality: u8,
    ) -> Result<Vec<u8>> {
        match extension.to_lowercase().as_str() {
            "jpg" | "jpeg" => Self::encode_jpeg(image, quality),
            "bmp" => Self::encode_with_format(image, ImageFormat::Bmp),
            _ => Self::encode_with_format(image, ImageFormat::Png),
        }
    }

    /// Export with automatic format detection based on file extension
    pub fn export_auto<P: AsRef<Path>>(image: &RgbaImage, path: P, quality: u8) -> Result<()> {
        let path_ref = path.as_ref();
        let extension = path_ref
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        let bytes = Self::encode_for_extension(image, extension, quality)?;
        std::fs::write(path_ref, bytes)?;
        Ok(())
    }
}
