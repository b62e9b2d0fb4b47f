use font8x8::{UnicodeFonts, BASIC_FONTS};

use crate::consts::GLYPH_CELL;
use crate::geometry::PixelPos;

/// Rendered extent of a single line of text, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextSize {
    pub width: i32,
    pub height: i32,
}

/// Font metrics the layout engine measures labels with.
pub trait TextMetrics {
    fn measure(&self, text: &str) -> TextSize;
}

/// Fixed-cell bitmap font backed by the `font8x8` basic Latin set.
///
/// Every glyph occupies an 8x8 cell multiplied by an integer scale. Characters
/// outside the set render as `?`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Side length of one scaled glyph cell.
    pub fn cell(&self) -> i32 {
        GLYPH_CELL * self.scale as i32
    }

    /// Call `plot` for every lit pixel of `text` drawn with its baseline-left
    /// point at `baseline`. Coordinates may fall outside any canvas; callers clip.
    pub fn for_each_pixel(&self, text: &str, baseline: PixelPos, mut plot: impl FnMut(i32, i32)) {
        let s = self.scale as i32;
        let top = baseline.y.saturating_sub(self.cell());
        let mut cursor_x = baseline.x;

        for ch in text.chars() {
            let glyph = BASIC_FONTS
                .get(ch)
                .or_else(|| BASIC_FONTS.get('?'))
                .unwrap_or([0; 8]);

            for (row_idx, row_bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_CELL {
                    if (row_bits >> col) & 1 == 0 {
                        continue;
                    }
                    let px = cursor_x.saturating_add(col * s);
                    let py = top.saturating_add(row_idx as i32 * s);
                    for sy in 0..s {
                        for sx in 0..s {
                            plot(px.saturating_add(sx), py.saturating_add(sy));
                        }
                    }
                }
            }
            cursor_x = cursor_x.saturating_add(self.cell());
        }
    }
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TextMetrics for BitmapFont {
    fn measure(&self, text: &str) -> TextSize {
        TextSize {
            width: text.chars().count() as i32 * self.cell(),
            height: self.cell(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_scales_with_char_count() {
        let font = BitmapFont::new(2);
        let size = font.measure("(0.000, 0.000)");
        assert_eq!(size, TextSize { width: 14 * 16, height: 16 });
    }

    #[test]
    fn test_zero_scale_is_promoted() {
        assert_eq!(BitmapFont::new(0).scale(), 1);
    }

    #[test]
    fn test_pixels_stay_inside_cell() {
        let font = BitmapFont::default();
        let baseline = PixelPos::new(10, 30);
        let mut count = 0;
        font.for_each_pixel("X", baseline, |x, y| {
            assert!((10..18).contains(&x), "x = {x}");
            assert!((22..30).contains(&y), "y = {y}");
            count += 1;
        });
        assert!(count > 0);
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut count = 0;
        BitmapFont::default().for_each_pixel("  ", PixelPos::new(0, 8), |_, _| count += 1);
        assert_eq!(count, 0);
    }
}
