//! Raw texture processing
//!
//! The console keeps its native thumbnail textures as RGB565 samples in
//! Morton-tiled 8x8 blocks. This module is organized as:
//! - `pixel` - RGB565 <-> RGBA8 conversion
//! - `swizzle` - coordinate <-> byte offset mapping for each tiled region
//! - `raw` - decoding and encoding of whole raw buffers
//! - `helpers` - resizing and export utilities
//!
//! # Examples
//!
//! ```rust,no_run
//! use tnl_binary::texture::{decode_raw_texture, to_screen, TextureExporter};
//!
//! let data = std::fs::read("thumbnail.raw")?;
//! let (tall, strip) = decode_raw_texture(&data)?;
//! TextureExporter::export_auto(&to_screen(&tall), "tall.png", 100)?;
//! TextureExporter::export_auto(&to_screen(&strip), "strip.png", 100)?;
//! # Ok::<(), tnl_core::TnlError>(())
//! ```

pub mod helpers;
pub mod pixel;
pub mod raw;
pub mod swizzle;

pub use helpers::{ImageOps, TextureExporter};
pub use pixel::{pack_rgba, packed_to_rgb565, rgb565_to_rgba, rgba_to_rgb565};
pub use raw::{RawTexture, decode_raw_texture, encode_raw_texture};
pub use swizzle::{TileRegion, from_screen, morton_offset, to_screen};
