use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::LABEL_PADDING;

/// Integer pixel position in image space. `y` grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shifted copy. Saturates at the `i32` range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for PixelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for PixelPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Width and height of the drawing surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl CanvasSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn of(image: &image::RgbImage) -> Self {
        let (w, h) = image.dimensions();
        Self {
            width: w as i32,
            height: h as i32,
        }
    }

    pub fn contains(&self, pos: PixelPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }
}

/// Screen rectangle occupied by a label, background padding included.
///
/// `(x1, y1)` is the top-left corner and `(x2, y2)` the bottom-right one.
/// Boxes only live for a single render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LabelBox {
    /// Box for a text of the given size whose baseline-left point is `anchor`.
    pub fn around_text(anchor: PixelPos, text_width: i32, text_height: i32) -> Self {
        Self {
            x1: anchor.x.saturating_sub(LABEL_PADDING),
            y1: anchor.y.saturating_sub(text_height).saturating_sub(LABEL_PADDING),
            x2: anchor.x.saturating_add(text_width).saturating_add(LABEL_PADDING),
            y2: anchor.y.saturating_add(LABEL_PADDING),
        }
    }

    /// Baseline-left point of the text this box was built around.
    pub fn text_origin(&self) -> PixelPos {
        PixelPos::new(
            self.x1.saturating_add(LABEL_PADDING),
            self.y2.saturating_sub(LABEL_PADDING),
        )
    }

    pub fn width(&self) -> i32 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> i32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Strict intersection test: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &LabelBox) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2 && self.y1 < other.y2 && other.y1 < self.y2
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x1 = self.x1.saturating_add(dx);
        self.x2 = self.x2.saturating_add(dx);
        self.y1 = self.y1.saturating_add(dy);
        self.y2 = self.y2.saturating_add(dy);
    }
}
