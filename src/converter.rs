//! File-level conversions
//!
//! [`Converter`] wires the in-memory codecs of `tnl-binary` to the file
//! system: it reads inputs, runs a conversion and writes the result.

use image::{ImageFormat, RgbaImage};
use std::fmt;
use std::fs;
use std::path::Path;
use tnl_binary::texture::{ImageOps, TextureExporter, to_screen};
use tnl_binary::{
    FittedThumbnail, ImageJpegCodec, JpegCodec, JpegFitter, RawTexture, TnlFile,
    decode_container, encode_container,
};
use tnl_core::{ConverterConfig, Result, TNL_SIZE, TnlError};
use tracing::{info, warn};

/// Kind of thumbnail inspected by [`Converter::check`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailKind {
    Tnl,
    Jpeg,
}

/// Outcome of inspecting a thumbnail file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub kind: ThumbnailKind,
    /// JPEG payload size in bytes
    pub jpeg_len: usize,
    /// Stored checksum matches, for TNL files
    pub checksum_valid: Option<bool>,
    /// Broken-encoder fingerprint found
    pub broken: bool,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ThumbnailKind::Tnl => "TNL",
            ThumbnailKind::Jpeg => "JPEG",
        };
        write!(f, "{} with {} byte JPEG payload", kind, self.jpeg_len)?;
        if let Some(valid) = self.checksum_valid {
            write!(f, ", checksum {}", if valid { "ok" } else { "MISMATCH" })?;
        }
        write!(f, ", {}", if self.broken { "BROKEN" } else { "not broken" })
    }
}

/// Converts thumbnails and raw textures between files
pub struct Converter<C: JpegCodec = ImageJpegCodec> {
    config: ConverterConfig,
    codec: C,
}

impl Converter<ImageJpegCodec> {
    pub fn new(config: ConverterConfig) -> Self {
        Self::with_codec(config, ImageJpegCodec)
    }
}

impl Default for Converter<ImageJpegCodec> {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl<C: JpegCodec> Converter<C> {
    pub fn with_codec(config: ConverterConfig, codec: C) -> Self {
        Self { config, codec }
    }

    /// Fit any image file into a TNL container
    pub fn jpeg_to_tnl<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<FittedThumbnail> {
        let source = fs::read(input.as_ref())?;
        let fitter = JpegFitter::with_codec(self.config.fit, &self.codec);
        let fitted = fitter.fit_bytes(&source)?;
        let tnl = encode_container(&fitted.jpeg)?;
        fs::write(output.as_ref(), tnl)?;
        info!(
            "Wrote {} ({}, {} byte JPEG)",
            output.as_ref().display(),
            fitted.profile,
            fitted.jpeg.len()
        );
        Ok(fitted)
    }

    /// Extract the JPEG payload of a TNL file; returns the payload size
    pub fn tnl_to_jpeg<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<usize> {
        let data = fs::read(input.as_ref())?;
        let jpeg = decode_container(&data)?;
        if tnl_binary::is_broken(&jpeg) {
            warn!(
                "{} looks like output of the broken encoder",
                input.as_ref().display()
            );
        }
        fs::write(output.as_ref(), &jpeg)?;
        info!("Wrote {} ({} bytes)", output.as_ref().display(), jpeg.len());
        Ok(jpeg.len())
    }

    /// Decode a raw texture and export both regions in screen orientation
    pub fn raw_to_images<P, Q, R>(&self, input: P, tall_output: Q, strip_output: R) -> Result<()>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        R: AsRef<Path>,
    {
        let data = fs::read(input.as_ref())?;
        let texture = RawTexture::decode(&data)?;
        for (image, path) in [
            (&texture.tall, tall_output.as_ref()),
            (&texture.strip, strip_output.as_ref()),
        ] {
            let mut screen = to_screen(image);
            if self.config.export_autocrop {
                screen = ImageOps::autocrop(&screen);
            }
            TextureExporter::export_auto(&screen, path, self.config.export_quality)?;
            info!(
                "Wrote {} ({}x{})",
                path.display(),
                screen.width(),
                screen.height()
            );
        }
        Ok(())
    }

    /// Encode two screen-oriented image files into a raw texture
    pub fn images_to_raw<P, Q, R>(&self, tall_input: P, strip_input: Q, output: R) -> Result<()>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        R: AsRef<Path>,
    {
        let tall = self.read_image(tall_input.as_ref())?;
        let strip = self.read_image(strip_input.as_ref())?;
        let buffer = RawTexture::encode(&tall, &strip);
        fs::write(output.as_ref(), &buffer)?;
        info!(
            "Wrote {} ({} bytes)",
            output.as_ref().display(),
            buffer.len()
        );
        Ok(())
    }

    /// Inspect a TNL or JPEG file for the broken-encoder fingerprint
    pub fn check<P: AsRef<Path>>(&self, input: P) -> Result<CheckReport> {
        let data = fs::read(input.as_ref())?;
        if looks_like_tnl(&data) {
            let file = TnlFile::from_bytes(data)?;
            Ok(CheckReport {
                kind: ThumbnailKind::Tnl,
                jpeg_len: file.jpeg().len(),
                checksum_valid: Some(file.is_checksum_valid()),
                broken: file.is_broken(),
            })
        } else {
            Ok(CheckReport {
                kind: ThumbnailKind::Jpeg,
                jpeg_len: data.len(),
                checksum_valid: None,
                broken: tnl_binary::is_broken(&data),
            })
        }
    }

    fn read_image(&self, path: &Path) -> Result<RgbaImage> {
        let data = fs::read(path)?;
        self.codec
            .decode(&data)
            .map_err(|e| TnlError::decode(format!("{}: {}", path.display(), e)))
    }
}

/// A full-size buffer that does not start with an image signature
fn looks_like_tnl(data: &[u8]) -> bool {
    data.len() == TNL_SIZE && !matches!(image::guess_format(data), Ok(ImageFormat::Jpeg))
}
