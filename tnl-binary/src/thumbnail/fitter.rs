//! Fitting arbitrary images into a TNL-sized JPEG
//!
//! A source is first resolved to a profile (explicitly or by aspect ratio),
//! then resized to that profile's exact dimensions and encoded at quality
//! 95. Quality drops by 5 until the JPEG fits [`TNL_JPEG_MAX_SIZE`]. A
//! source that is already a small enough JPEG of the right size is passed
//! through untouched.

use super::codec::{ImageJpegCodec, JpegCodec};
use crate::texture::helpers::ImageOps;
use image::{ImageFormat, RgbaImage};
use tnl_core::{
    FitOptions, ImageProfile, QUALITY_STEP, Result, START_QUALITY, TNL_JPEG_MAX_SIZE, TnlError,
};
use tracing::debug;

/// Result of fitting a source image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittedThumbnail {
    /// JPEG bytes, at most [`TNL_JPEG_MAX_SIZE`] long
    pub jpeg: Vec<u8>,
    /// Profile whose dimensions the JPEG has
    pub profile: ImageProfile,
    /// Quality of the final encode, `None` when the source was passed through
    pub quality: Option<u8>,
}

impl FittedThumbnail {
    /// Whether the source bytes were returned unchanged
    pub fn is_passthrough(&self) -> bool {
        self.quality.is_none()
    }
}

/// Resizes and re-encodes images to satisfy a profile and the TNL byte budget
pub struct JpegFitter<C: JpegCodec = ImageJpegCodec> {
    codec: C,
    options: FitOptions,
}

impl JpegFitter<ImageJpegCodec> {
    /// Create a fitter using the `image` crate codec
    pub fn new(options: FitOptions) -> Self {
        Self::with_codec(options, ImageJpegCodec)
    }
}

impl<C: JpegCodec> JpegFitter<C> {
    pub fn with_codec(options: FitOptions, codec: C) -> Self {
        Self { codec, options }
    }

    /// Fit encoded source bytes, passing them through when they already qualify
    pub fn fit_bytes(&self, source: &[u8]) -> Result<FittedThumbnail> {
        let decoded = self.codec.decode(source)?;
        let prepared = self.prepare(decoded);
        let (width, height) = prepared.image.dimensions();

        if !prepared.cropped
            && source.len() <= TNL_JPEG_MAX_SIZE
            && is_jpeg(source)
            && self.options.orientation.accepts_dimensions(width, height)
        {
            let profile = self.options.orientation.resolve(width, height)?;
            debug!(
                "Source JPEG ({} bytes, {}x{}) already fits {}",
                source.len(),
                width,
                height,
                profile
            );
            return Ok(FittedThumbnail {
                jpeg: source.to_vec(),
                profile,
                quality: None,
            });
        }

        self.fit_prepared(&prepared.image)
    }

    /// Fit an already decoded image; always re-encodes
    pub fn fit_image(&self, image: &RgbaImage) -> Result<FittedThumbnail> {
        let prepared = self.prepare(image.clone());
        self.fit_prepared(&prepared.image)
    }

    /// Resize `image` to the exact dimensions of `profile`
    pub fn resize_to_profile(&self, image: &RgbaImage, profile: ImageProfile) -> RgbaImage {
        let (width, height) = profile.dimensions();
        if image.dimensions() == (width, height) {
            return image.clone();
        }
        if self.options.clip {
            ImageOps::cover(image, width, height)
        } else {
            ImageOps::contain(image, width, height)
        }
    }

    fn prepare(&self, image: RgbaImage) -> Prepared {
        if !self.options.autocrop {
            return Prepared {
                image,
                cropped: false,
            };
        }
        let cropped = ImageOps::autocrop(&image);
        let changed = cropped.dimensions() != image.dimensions();
        if changed {
            debug!(
                "Autocropped {}x{} to {}x{}",
                image.width(),
                image.height(),
                cropped.width(),
                cropped.height()
            );
        }
        Prepared {
            image: cropped,
            cropped: changed,
        }
    }

    fn fit_prepared(&self, image: &RgbaImage) -> Result<FittedThumbnail> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(TnlError::invalid_data("Source image has zero dimensions"));
        }
        let profile = self.options.orientation.resolve(width, height)?;
        debug!(
            "Fitting {}x{} (aspect {:.3}) into {} ({})",
            width,
            height,
            width as f64 / height as f64,
            profile,
            if self.options.clip { "cover" } else { "contain" }
        );

        let resized = self.resize_to_profile(image, profile);
        let (jpeg, quality) = self.encode_within_budget(&resized)?;
        Ok(FittedThumbnail {
            jpeg,
            profile,
            quality: Some(quality),
        })
    }

    /// Encode at decreasing quality until the output fits the budget
    fn encode_within_budget(&self, image: &RgbaImage) -> Result<(Vec<u8>, u8)> {
        let mut quality = START_QUALITY;
        loop {
            let jpeg = self.codec.encode(image, quality as u8)?;
            debug!("Encoded at quality {}: {} bytes", quality, jpeg.len());
            if jpeg.len() <= TNL_JPEG_MAX_SIZE {
                return Ok((jpeg, quality as u8));
            }
            quality -= QUALITY_STEP;
            if quality < 0 {
                return Err(TnlError::size_exhausted(TNL_JPEG_MAX_SIZE, jpeg.len()));
            }
        }
    }
}

struct Prepared {
    image: RgbaImage,
    cropped: bool,
}

fn is_jpeg(data: &[u8]) -> bool {
    matches!(image::guess_format(data), Ok(ImageFormat::Jpeg))
}

/// Fit `source` bytes with the given options and codec
pub fn fit_to_profile<C: JpegCodec>(
    source: &[u8],
    options: &FitOptions,
    codec: C,
) -> Result<FittedThumbnail> {
    JpegFitter::with_codec(*options, codec).fit_bytes(source)
}
