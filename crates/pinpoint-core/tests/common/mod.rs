#![allow(dead_code)]

use image::{Rgb, RgbImage};
use pinpoint_core::text::{TextMetrics, TextSize};

/// Mid-grey so that both the dark label background and bright glyphs show up.
pub const BASE_GREY: Rgb<u8> = Rgb([128, 128, 128]);

/// Uniform grey image of the given size.
pub fn grey_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, BASE_GREY)
}

/// Image with a horizontal gradient, so accidental copies of the wrong
/// buffer are easy to spot.
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = ((x * 255) / width.max(1)) as u8;
        Rgb([v, (y % 256) as u8, 255 - v])
    })
}

/// Every character is `char_width` wide and `height` tall.
pub struct FixedMetrics {
    pub char_width: i32,
    pub height: i32,
}

impl TextMetrics for FixedMetrics {
    fn measure(&self, text: &str) -> TextSize {
        TextSize {
            width: text.chars().count() as i32 * self.char_width,
            height: self.height,
        }
    }
}

/// Number of pixels that differ between two equally sized images.
pub fn changed_pixels(a: &RgbImage, b: &RgbImage) -> usize {
    a.pixels().zip(b.pixels()).filter(|(p, q)| p != q).count()
}
