//! TNL Binary Formats
//!
//! This crate handles the console's binary thumbnail formats:
//! - TNL containers (length-prefixed, CRC-32 checked, zero padded JPEG)
//! - Raw tiled RGB565 textures (two Morton-swizzled canvases)
//!
//! # Features
//!
//! - **Container framing**: extract and build fixed-size TNL files
//! - **Swizzling**: bijective coordinate <-> byte offset mapping
//! - **Thumbnail fitting**: resize and re-encode any image into the TNL byte budget
//! - **Broken thumbnail detection**: spot output of a known faulty encoder
//!
//! # Example
//!
//! ```rust,no_run
//! use tnl_binary::{encode_container, JpegFitter};
//! use tnl_core::{FitOptions, Orientation};
//!
//! let source = std::fs::read("screenshot.png")?;
//! let fitter = JpegFitter::new(FitOptions::new(Orientation::Auto));
//! let fitted = fitter.fit_bytes(&source)?;
//! let tnl = encode_container(&fitted.jpeg)?;
//! std::fs::write("screenshot.tnl", tnl)?;
//! # Ok::<(), tnl_core::TnlError>(())
//! ```

pub mod container;
pub mod detector;
pub mod reader;
pub mod texture;
pub mod thumbnail;

pub use container::{TnlFile, TnlHeader, crc32, decode_container, encode_container, verify_checksum};
pub use detector::{is_broken, is_broken_tnl, sentinel_count};
pub use reader::{BinaryReader, ByteOrder};
pub use texture::{RawTexture, TileRegion, decode_raw_texture, encode_raw_texture};
pub use thumbnail::{FittedThumbnail, ImageJpegCodec, JpegCodec, JpegFitter, fit_to_profile};
