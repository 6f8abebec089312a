//! Fixed sizes and offsets of the console's thumbnail and texture layouts.

/// Total size of a TNL container
pub const TNL_SIZE: usize = 0xC800;

/// Largest JPEG payload a TNL container can hold
pub const TNL_JPEG_MAX_SIZE: usize = 0xC7F8;

/// Size of the checksum + length header
pub const TNL_HEADER_SIZE: usize = 8;

/// Offset of the big-endian payload length
pub const TNL_LENGTH_OFFSET: usize = 4;

/// Minimum size of a raw tiled texture buffer
pub const RAW_TEXTURE_SIZE: usize = 0x157C0;

/// Canvas width of the tall region
pub const TALL_WIDTH: u32 = 168;
/// Canvas height of the tall region
pub const TALL_HEIGHT: u32 = 216;
/// Byte offset of the tall region
pub const TALL_BASE_OFFSET: usize = 0;

/// Canvas width of the strip region
pub const STRIP_WIDTH: u32 = 32;
/// Canvas height of the strip region
pub const STRIP_HEIGHT: u32 = 240;
/// Byte offset of the strip region
pub const STRIP_BASE_OFFSET: usize = 0x11B80;

/// Word repeated throughout thumbnails produced by a known broken encoder
pub const BROKEN_SENTINEL: u32 = 0xA280_0A28;

/// Fraction of sentinel bytes above which a thumbnail counts as broken
pub const BROKEN_RATIO: f64 = 0.5;

/// First JPEG quality tried when re-encoding
pub const START_QUALITY: i32 = 95;

/// Quality decrement between re-encode attempts
pub const QUALITY_STEP: i32 = 5;

/// Default JPEG quality for exported raw textures
pub const DEFAULT_EXPORT_QUALITY: u8 = 100;
