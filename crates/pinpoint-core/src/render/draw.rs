use image::{Rgb, RgbImage};

use crate::geometry::{LabelBox, PixelPos};
use crate::text::BitmapFont;

/// Blend `src` over `dst` with opacity `alpha` in [0, 1].
pub fn blend(dst: Rgb<u8>, src: Rgb<u8>, alpha: f32) -> Rgb<u8> {
    let a = alpha.clamp(0.0, 1.0);
    let inv = 1.0 - a;
    let mix = |d: u8, s: u8| (f32::from(d) * inv + f32::from(s) * a).round().clamp(0.0, 255.0) as u8;
    Rgb([
        mix(dst[0], src[0]),
        mix(dst[1], src[1]),
        mix(dst[2], src[2]),
    ])
}

fn put_clipped(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// One-pixel line across the full width at row `y`. No-op when off-canvas.
pub fn draw_hline(img: &mut RgbImage, y: i32, color: Rgb<u8>) {
    if y < 0 || y as u32 >= img.height() {
        return;
    }
    for x in 0..img.width() {
        img.put_pixel(x, y as u32, color);
    }
}

/// One-pixel line across the full height at column `x`. No-op when off-canvas.
pub fn draw_vline(img: &mut RgbImage, x: i32, color: Rgb<u8>) {
    if x < 0 || x as u32 >= img.width() {
        return;
    }
    for y in 0..img.height() {
        img.put_pixel(x as u32, y, color);
    }
}

/// Fill the box (edges inclusive) with `color` at opacity `alpha`, clipped
/// to the image.
pub fn fill_box_alpha(img: &mut RgbImage, b: &LabelBox, color: Rgb<u8>, alpha: f32) {
    if img.width() == 0 || img.height() == 0 {
        return;
    }
    let max_x = img.width() as i32 - 1;
    let max_y = img.height() as i32 - 1;
    let (left, right) = (b.x1.min(b.x2), b.x1.max(b.x2));
    let (top, bottom) = (b.y1.min(b.y2), b.y1.max(b.y2));
    if right < 0 || bottom < 0 || left > max_x || top > max_y {
        return;
    }
    let (x0, x1) = (left.max(0), right.min(max_x));
    let (y0, y1) = (top.max(0), bottom.min(max_y));

    for y in y0..=y1 {
        for x in x0..=x1 {
            let px = img.get_pixel_mut(x as u32, y as u32);
            *px = blend(*px, color, alpha);
        }
    }
}

/// Draw opaque glyphs with their baseline-left point at `baseline`.
pub fn draw_text(img: &mut RgbImage, font: &BitmapFont, text: &str, baseline: PixelPos, color: Rgb<u8>) {
    font.for_each_pixel(text, baseline, |x, y| put_clipped(img, x, y, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_half() {
        let out = blend(Rgb([200, 100, 0]), Rgb([0, 0, 0]), 0.5);
        assert_eq!(out, Rgb([100, 50, 0]));
    }

    #[test]
    fn test_blend_extremes() {
        let dst = Rgb([10, 20, 30]);
        let src = Rgb([200, 210, 220]);
        assert_eq!(blend(dst, src, 0.0), dst);
        assert_eq!(blend(dst, src, 1.0), src);
    }

    #[test]
    fn test_lines_outside_canvas_are_ignored() {
        let mut img = RgbImage::new(4, 4);
        draw_hline(&mut img, -1, Rgb([255, 0, 0]));
        draw_hline(&mut img, 4, Rgb([255, 0, 0]));
        draw_vline(&mut img, 9, Rgb([255, 0, 0]));
        assert!(img.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_fill_box_is_clipped() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([100, 100, 100]));
        let b = LabelBox { x1: -3, y1: -3, x2: 1, y2: 1 };
        fill_box_alpha(&mut img, &b, Rgb([0, 0, 0]), 0.5);
        assert_eq!(*img.get_pixel(0, 0), Rgb([50, 50, 50]));
        assert_eq!(*img.get_pixel(1, 1), Rgb([50, 50, 50]));
        assert_eq!(*img.get_pixel(2, 2), Rgb([100, 100, 100]));
    }

    #[test]
    fn test_fill_box_fully_outside_is_noop() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([100, 100, 100]));
        let b = LabelBox { x1: 10, y1: 0, x2: 20, y2: 3 };
        fill_box_alpha(&mut img, &b, Rgb([0, 0, 0]), 0.5);
        assert!(img.pixels().all(|p| *p == Rgb([100, 100, 100])));
    }
}
