pub mod draw;

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    ABOVE_AXIS_OFFSET, AXIS_X_LABEL_INSET, AXIS_Y_LABEL_BASELINE, AXIS_Y_LABEL_FLIP_OFFSET,
    AXIS_Y_LABEL_OFFSET, BELOW_AXIS_OFFSET, DEFAULT_BACKGROUND_ALPHA, ORIGIN_LABEL_OFFSET,
    POINT_LABEL_BOTTOM_ZONE, POINT_LABEL_OFFSET, POINT_LABEL_RAISE, POINT_LABEL_RIGHT_ZONE,
    SEQUENCE_NUMBER_OFFSET,
};
use crate::error::{PinpointError, Result};
use crate::geometry::{CanvasSize, LabelBox, PixelPos};
use crate::layout::place_label;
use crate::session::{DisplaySettings, Point, Session};
use crate::text::BitmapFont;
use crate::transform::to_physical;

/// Text shown next to the origin. Always the zero coordinate.
pub const ORIGIN_TEXT: &str = "(0.000, 0.000)";

/// Colours and glyph sizes of the overlay. Colours are RGB triples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub axis_color: [u8; 3],
    pub label_color: [u8; 3],
    pub origin_color: [u8; 3],
    pub number_color: [u8; 3],
    pub background_color: [u8; 3],
    /// Opacity of the rectangle drawn under every label, in [0, 1].
    pub background_alpha: f32,
    /// Integer magnification of the 8x8 label glyphs.
    pub label_scale: u32,
    /// Integer magnification of the 8x8 sequence-number glyphs.
    pub number_scale: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            axis_color: [255, 0, 0],
            label_color: [255, 255, 255],
            origin_color: [255, 255, 255],
            number_color: [255, 255, 0],
            background_color: [0, 0, 0],
            background_alpha: DEFAULT_BACKGROUND_ALPHA,
            label_scale: 1,
            number_scale: 1,
        }
    }
}

impl OverlayStyle {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.background_alpha) {
            return Err(PinpointError::Config(format!(
                "background_alpha must be within [0, 1], got {}",
                self.background_alpha
            )));
        }
        if self.label_scale == 0 || self.number_scale == 0 {
            return Err(PinpointError::Config(
                "label_scale and number_scale must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// One text element of the overlay, in paint order.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayItem {
    /// Text over a translucent background box, placed by the layout engine.
    Label {
        text: String,
        bounds: LabelBox,
        color: Rgb<u8>,
    },
    /// Bare glyphs at a fixed offset, no background and no overlap avoidance.
    Marker {
        text: String,
        baseline: PixelPos,
        color: Rgb<u8>,
    },
}

/// Composites axes, markers and labels over a pristine copy of the base image.
///
/// Stateless between calls: two renders with the same inputs produce the same
/// bytes, and label boxes never outlive the pass that placed them.
#[derive(Clone, Debug)]
pub struct OverlayRenderer {
    style: OverlayStyle,
    label_font: BitmapFont,
    number_font: BitmapFont,
}

impl Default for OverlayRenderer {
    fn default() -> Self {
        Self::new(OverlayStyle::default())
    }
}

impl OverlayRenderer {
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            label_font: BitmapFont::new(style.label_scale),
            number_font: BitmapFont::new(style.number_scale),
            style,
        }
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    pub fn render_session(&self, base: &RgbImage, session: &Session) -> RgbImage {
        self.render(base, session.origin(), session.points(), session.settings())
    }

    /// Produce the display frame. Without an origin the frame is a plain copy
    /// of `base`.
    pub fn render(
        &self,
        base: &RgbImage,
        origin: Option<PixelPos>,
        points: &[Point],
        settings: &DisplaySettings,
    ) -> RgbImage {
        let mut frame = base.clone();
        let Some(origin) = origin else {
            return frame;
        };

        let axis = Rgb(self.style.axis_color);
        draw::draw_hline(&mut frame, origin.y, axis);
        draw::draw_vline(&mut frame, origin.x, axis);

        let items = self.plan(CanvasSize::of(&frame), origin, points, settings);
        for item in &items {
            self.paint(&mut frame, item);
        }

        debug!(points = points.len(), items = items.len(), "rendered overlay");
        frame
    }

    /// Lay out every text element of the overlay without drawing anything.
    ///
    /// Axis and origin labels are placed first and take part in overlap
    /// avoidance for the coordinate labels that follow. Sequence numbers are
    /// never moved and never block anything.
    pub fn plan(
        &self,
        canvas: CanvasSize,
        origin: PixelPos,
        points: &[Point],
        settings: &DisplaySettings,
    ) -> Vec<OverlayItem> {
        let mut items = Vec::with_capacity(3 + 2 * points.len());
        let mut boxes: Vec<LabelBox> = Vec::with_capacity(3 + points.len());
        let label_color = Rgb(self.style.label_color);

        let fixed = [
            ("X", x_label_anchor(canvas, origin), label_color),
            ("Y", y_label_anchor(canvas, origin), label_color),
            (ORIGIN_TEXT, origin_label_anchor(origin), Rgb(self.style.origin_color)),
        ];
        for (text, desired, color) in fixed {
            let bounds = place_label(&self.label_font, text, desired, canvas, &[]);
            boxes.push(bounds);
            items.push(OverlayItem::Label {
                text: text.to_string(),
                bounds,
                color,
            });
        }

        for point in points {
            items.push(OverlayItem::Marker {
                text: point.sequence_index.to_string(),
                baseline: point.pixel.offset(SEQUENCE_NUMBER_OFFSET, -SEQUENCE_NUMBER_OFFSET),
                color: Rgb(self.style.number_color),
            });

            if !settings.labels_visible {
                continue;
            }

            let coord = to_physical(point.pixel, origin, settings.scale_factor, settings.unit_per_pixel);
            let text = coord.to_string();
            let desired = point_label_anchor(canvas, point.pixel);
            let bounds = place_label(&self.label_font, &text, desired, canvas, &boxes);
            boxes.push(bounds);
            items.push(OverlayItem::Label {
                text,
                bounds,
                color: label_color,
            });
        }

        items
    }

    fn paint(&self, frame: &mut RgbImage, item: &OverlayItem) {
        match item {
            OverlayItem::Label { text, bounds, color } => {
                draw::fill_box_alpha(
                    frame,
                    bounds,
                    Rgb(self.style.background_color),
                    self.style.background_alpha,
                );
                draw::draw_text(frame, &self.label_font, text, bounds.text_origin(), *color);
            }
            OverlayItem::Marker {
                text,
                baseline,
                color,
            } => draw::draw_text(frame, &self.number_font, text, *baseline, *color),
        }
    }
}

/// "X" sits above the horizontal axis near the right edge, or below it when
/// the axis hugs the top.
fn x_label_anchor(canvas: CanvasSize, origin: PixelPos) -> PixelPos {
    let x = canvas.width.saturating_sub(AXIS_X_LABEL_INSET);
    PixelPos::new(x, beside_axis_y(origin.y))
}

/// "Y" sits right of the vertical axis near the top, or left of it when the
/// axis hugs the right edge.
fn y_label_anchor(canvas: CanvasSize, origin: PixelPos) -> PixelPos {
    let flip_at = canvas.width.saturating_sub(AXIS_Y_LABEL_FLIP_OFFSET);
    if origin.x.saturating_add(AXIS_Y_LABEL_OFFSET) > flip_at {
        PixelPos::new(origin.x.saturating_sub(AXIS_Y_LABEL_FLIP_OFFSET), AXIS_Y_LABEL_BASELINE)
    } else {
        PixelPos::new(origin.x.saturating_add(AXIS_Y_LABEL_OFFSET), AXIS_Y_LABEL_BASELINE)
    }
}

fn origin_label_anchor(origin: PixelPos) -> PixelPos {
    PixelPos::new(origin.x.saturating_add(ORIGIN_LABEL_OFFSET), beside_axis_y(origin.y))
}

/// Baseline just above the horizontal axis, or just below it when the axis
/// hugs the top edge.
fn beside_axis_y(axis_y: i32) -> i32 {
    if axis_y.saturating_sub(ABOVE_AXIS_OFFSET) < 0 {
        axis_y.saturating_add(BELOW_AXIS_OFFSET)
    } else {
        axis_y - ABOVE_AXIS_OFFSET
    }
}

/// Right of the point by default; left of it near the right edge; raised
/// near the bottom edge.
fn point_label_anchor(canvas: CanvasSize, pixel: PixelPos) -> PixelPos {
    let x = if pixel.x > canvas.width.saturating_sub(POINT_LABEL_RIGHT_ZONE) {
        pixel.x.saturating_sub(POINT_LABEL_RIGHT_ZONE)
    } else {
        pixel.x.saturating_add(POINT_LABEL_OFFSET)
    };
    let y = if pixel.y > canvas.height.saturating_sub(POINT_LABEL_BOTTOM_ZONE) {
        pixel.y.saturating_sub(POINT_LABEL_RAISE)
    } else {
        pixel.y
    };
    PixelPos::new(x, y)
}
