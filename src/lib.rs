//! TNL Converter
//!
//! Converts the console's screenshot thumbnails ("TNL" files) to and from
//! JPEG, and its tiled RGB565 raw textures to and from ordinary images.
//!
//! The binary work happens in memory in `tnl-binary`; this crate adds the
//! file-level [`Converter`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use tnl::{Converter, ConverterConfig, Orientation};
//!
//! let mut config = ConverterConfig::default();
//! config.fit.orientation = Orientation::Normal;
//!
//! let converter = Converter::new(config);
//! let fitted = converter.jpeg_to_tnl("screenshot.png", "screenshot.tnl")?;
//! println!("Fitted as {} at quality {:?}", fitted.profile, fitted.quality);
//!
//! converter.tnl_to_jpeg("screenshot.tnl", "extracted.jpg")?;
//! # Ok::<(), tnl::TnlError>(())
//! ```

pub mod converter;

// Re-export from core and binary crates
pub use tnl_core::{
    ConverterConfig, FitOptions, ImageProfile, Orientation, Result, TnlError, constants::*,
};

pub use tnl_binary::{
    FittedThumbnail, ImageJpegCodec, JpegCodec, JpegFitter, RawTexture, TileRegion, TnlFile,
    decode_container, decode_raw_texture, encode_container, encode_raw_texture, fit_to_profile,
    is_broken,
};

pub use converter::{CheckReport, Converter, ThumbnailKind};
