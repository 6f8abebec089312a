//! Image fitting utilities
//!
//! Resizing policies used when an image has to land on a fixed canvas:
//! cover (scale to fill, crop the overflow) and contain (scale to fit, pad
//! the remainder), plus trimming of uniform borders.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Filter used for every resize
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Padding colour for letterboxed images
pub const PAD_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Image fitting helpers
pub struct ImageOps;

impl ImageOps {
    /// Largest `(width, height)` with the source aspect ratio inside `target`
    pub fn contain_size(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
        let (sw, sh) = source;
        let (tw, th) = target;
        if sw == 0 || sh == 0 {
            return (0, 0);
        }
        let scale = f64::min(tw as f64 / sw as f64, th as f64 / sh as f64);
        let w = ((sw as f64 * scale).round() as u32).clamp(1, tw);
        let h = ((sh as f64 * scale).round() as u32).clamp(1, th);
        (w, h)
    }

    /// Smallest `(width, height)` with the source aspect ratio covering `target`
    pub fn cover_size(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
        let (sw, sh) = source;
        let (tw, th) = target;
        if sw == 0 || sh == 0 {
            return target;
        }
        let scale = f64::max(tw as f64 / sw as f64, th as f64 / sh as f64);
        let w = ((sw as f64 * scale).round() as u32).max(tw);
        let h = ((sh as f64 * scale).round() as u32).max(th);
        (w, h)
    }

    /// Scale to fit inside `width` x `height` and pad, centred, to exactly that size
    pub fn contain(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(width, height, PAD_COLOR);
        let (fw, fh) = Self::contain_size(image.dimensions(), (width, height));
        if fw == 0 || fh == 0 {
            return canvas;
        }
        let fitted = if (fw, fh) == image.dimensions() {
            image.clone()
        } else {
            imageops::resize(image, fw, fh, RESIZE_FILTER)
        };
        let x = (width - fw) / 2;
        let y = (height - fh) / 2;
        imageops::overlay(&mut canvas, &fitted, x as i64, y as i64);
        canvas
    }

    /// Scale to fill `width` x `height` and crop the centre
    pub fn cover(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
        if image.width() == 0 || image.height() == 0 {
            return RgbaImage::from_pixel(width, height, PAD_COLOR);
        }
        let (cw, ch) = Self::cover_size(image.dimensions(), (width, height));
        let scaled = if (cw, ch) == image.dimensions() {
            image.clone()
        } else {
            imageops::resize(image, cw, ch, RESIZE_FILTER)
        };
        let x = (cw - width) / 2;
        let y = (ch - height) / 2;
        imageops::crop_imm(&scaled, x, y, width, height).to_image()
    }

    /// Trim borders that share the top-left pixel's colour.
    ///
    /// An image made of a single colour is returned unchanged.
    pub fn autocrop(image: &RgbaImage) -> RgbaImage {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return image.clone();
        }
        let border = *image.get_pixel(0, 0);
        let row_uniform = |y: u32| (0..width).all(|x| *image.get_pixel(x, y) == border);
        let col_uniform =
            |x: u32, top: u32, bottom: u32| (top..bottom).all(|y| *image.get_pixel(x, y) == border);

        let Some(top) = (0..height).find(|&y| !row_uniform(y)) else {
            return image.clone();
        };
        let bottom = (top..height).rev().find(|&y| !row_uniform(y)).map_or(height, |y| y + 1);
        let left = (0..width).find(|&x| !col_uniform(x, top, bottom)).unwrap_or(0);
        let right = (left..width)
            .rev()
            .find(|&x| !col_uniform(x, top, bottom))
            .map_or(width, |x| x + 1);

        imageops::crop_imm(image, left, top, right - left, bottom - top).to_image()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contain_size() {
        assert_eq!(ImageOps::contain_size((1280, 720), (320, 240)), (320, 180));
        assert_eq!(ImageOps::contain_size((100, 400), (320, 240)), (60, 240));
        assert_eq!(ImageOps::contain_size((320, 240), (320, 240)), (320, 240));
    }

    #[test]
    fn test_cover_size() {
        assert_eq!(ImageOps::cover_size((1280, 720), (320, 240)), (427, 240));
        assert_eq!(ImageOps::cover_size((100, 400), (720, 81)), (720, 2880));
    }

    #[test]
    fn test_contain_pads_to_exact_size() {
        let image = RgbaImage::from_pixel(1280, 720, Rgba([255, 255, 255, 255]));
        let out = ImageOps::contain(&image, 320, 240);
        assert_eq!(out.dimensions(), (320, 240));
        // 30 rows of padding above and below
        assert_eq!(*out.get_pixel(160, 0), PAD_COLOR);
        assert_eq!(*out.get_pixel(160, 239), PAD_COLOR);
        assert_eq!(*out.get_pixel(160, 120), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_cover_fills_exact_size() {
        let image = RgbaImage::from_pixel(1280, 720, Rgba([10, 20, 30, 255]));
        let out = ImageOps::cover(&image, 720, 81);
        assert_eq!(out.dimensions(), (720, 81));
        assert!(out.pixels().all(|p| *p == Rgba([10, 20, 30, 255])));
    }

    #[test]
    fn test_autocrop_trims_border() {
        let mut image = RgbaImage::from_pixel(10, 8, Rgba([0, 0, 0, 255]));
        for y in 2..5 {
            for x in 3..7 {
                image.put_pixel(x, y, Rgba([200, 0, 0, 255]));
            }
        }
        let cropped = ImageOps::autocrop(&image);
        assert_eq!(cropped.dimensions(), (4, 3));
        assert!(cropped.pixels().all(|p| *p == Rgba([200, 0, 0, 255])));
    }

    #[test]
    fn test_autocrop_uniform_image_unchanged() {
        let image = RgbaImage::from_pixel(5, 5, Rgba([1, 2, 3, 255]));
        assert_eq!(ImageOps::autocrop(&image), image);
    }
}
