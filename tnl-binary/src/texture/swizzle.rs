//! Morton (Z-order) tiling of the console's texture memory
//!
//! Pixels are stored in 8x8 blocks. Inside a block the low three bits of x
//! and y are interleaved (x in the even bits, y in the odd bits); blocks are
//! laid out left to right, then in 8-row bands top to bottom. Each sample is
//! two bytes.

use image::{RgbaImage, imageops};

/// Interleave the low three bits of `x` and `y` into a 6-bit block index
#[inline]
pub fn morton_index(x: u32, y: u32) -> u32 {
    let mut i = (x & 7) | ((y & 7) << 8);
    i = (i ^ (i << 2)) & 0x1313;
    i = (i ^ (i << 1)) & 0x1515;
    (i | (i >> 7)) & 0x3F
}

/// Byte offset of pixel `(x, y)` in a tiled canvas of stride `width`
#[inline]
pub fn morton_offset(x: u32, y: u32, width: u32, base_offset: usize) -> usize {
    let block_offset = (x & !7) * 8;
    let row_offset = (y & !7) * width;
    (morton_index(x, y) + block_offset + row_offset) as usize * 2 + base_offset
}

/// Split a 6-bit block index back into the low bits of `(x, y)`
#[inline]
pub fn morton_split(index: u32) -> (u32, u32) {
    let x = (index & 1) | ((index >> 1) & 2) | ((index >> 2) & 4);
    let y = ((index >> 1) & 1) | ((index >> 2) & 2) | ((index >> 3) & 4);
    (x, y)
}

/// One independently addressed tiled canvas inside a raw texture buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    pub width: u32,
    pub height: u32,
    pub base_offset: usize,
}

impl TileRegion {
    /// Region A: 168x216 canvas at offset 0
    pub const TALL: TileRegion = TileRegion {
        width: tnl_core::TALL_WIDTH,
        height: tnl_core::TALL_HEIGHT,
        base_offset: tnl_core::TALL_BASE_OFFSET,
    };

    /// Region B: 32x240 canvas at offset 0x11B80
    pub const STRIP: TileRegion = TileRegion {
        width: tnl_core::STRIP_WIDTH,
        height: tnl_core::STRIP_HEIGHT,
        base_offset: tnl_core::STRIP_BASE_OFFSET,
    };

    /// Byte offset of canvas pixel `(x, y)`
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        morton_offset(x, y, self.width, self.base_offset)
    }

    /// Canvas coordinate stored at `offset`, if the offset belongs to this region
    pub fn coord(&self, offset: usize) -> Option<(u32, u32)> {
        let rel = offset.checked_sub(self.base_offset)?;
        if rel % 2 != 0 {
            return None;
        }
        let sample = (rel / 2) as u32;
        let band = self.width * 8;
        let y_hi = sample / band * 8;
        let within_band = sample % band;
        let x_hi = within_band / 64 * 8;
        let (x_lo, y_lo) = morton_split(within_band % 64);
        let (x, y) = (x_hi + x_lo, y_hi + y_lo);
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// One past the last byte written by this region
    pub fn end_offset(&self) -> usize {
        self.base_offset + (self.width * self.height * 2) as usize
    }

    /// Dimensions of the region as shown on screen (canvas rotated a quarter turn)
    pub fn screen_dimensions(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    /// Screen pixel shown for canvas pixel `(x, y)`
    #[inline]
    pub fn screen_coord(&self, x: u32, y: u32) -> (u32, u32) {
        (y, self.width - 1 - x)
    }
}

/// Rotate a canvas-oriented image into screen orientation
pub fn to_screen(canvas: &RgbaImage) -> RgbaImage {
    imageops::rotate270(canvas)
}

/// Rotate a screen-oriented image back into canvas orientation
pub fn from_screen(screen: &RgbaImage) -> RgbaImage {
    imageops::rotate90(screen)
}
