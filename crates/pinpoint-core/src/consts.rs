/// Default multiplier applied to every physical coordinate.
pub const DEFAULT_SCALE_FACTOR: f64 = 1.0;

/// Default physical length of one pixel.
pub const DEFAULT_UNIT_PER_PIXEL: f64 = 0.1;

/// Number of decimal digits used whenever a coordinate is shown to the user.
pub const COORD_PRECISION: usize = 3;

/// Padding between the glyphs and the edge of a label's background box.
pub const LABEL_PADDING: i32 = 2;

/// Vertical distance a label moves on each overlap-avoidance attempt.
pub const OVERLAP_SHIFT_STEP: i32 = 15;

/// Overlap-avoidance attempts before the last candidate is accepted as-is.
pub const MAX_OVERLAP_ATTEMPTS: usize = 10;

/// Distance kept between a clamped label box and the canvas edge.
pub const EDGE_MARGIN: i32 = 5;

/// Width and height of one unscaled `font8x8` glyph cell.
pub const GLYPH_CELL: i32 = 8;

/// X axis label: inset from the right edge of the canvas.
pub const AXIS_X_LABEL_INSET: i32 = 25;

/// Y axis label: baseline distance from the top of the canvas.
pub const AXIS_Y_LABEL_BASELINE: i32 = 25;

/// Y axis label: horizontal offset to the right of the vertical axis.
pub const AXIS_Y_LABEL_OFFSET: i32 = 8;

/// Y axis label: horizontal offset when flipped to the left of the axis.
pub const AXIS_Y_LABEL_FLIP_OFFSET: i32 = 30;

/// Labels sitting above the horizontal axis use this baseline offset.
pub const ABOVE_AXIS_OFFSET: i32 = 8;

/// Labels flipped below the horizontal axis use this baseline offset.
pub const BELOW_AXIS_OFFSET: i32 = 15;

/// Origin label: horizontal offset from the origin.
pub const ORIGIN_LABEL_OFFSET: i32 = 12;

/// Sequence number: offset to the right of and above the point.
pub const SEQUENCE_NUMBER_OFFSET: i32 = 5;

/// Coordinate label: default horizontal offset to the right of the point.
pub const POINT_LABEL_OFFSET: i32 = 15;

/// Points closer than this to the right edge get their label on the left.
pub const POINT_LABEL_RIGHT_ZONE: i32 = 150;

/// Points closer than this to the bottom edge get their label raised.
pub const POINT_LABEL_BOTTOM_ZONE: i32 = 30;

/// Baseline lift applied to a raised coordinate label.
pub const POINT_LABEL_RAISE: i32 = 20;

/// Default opacity of the label background rectangle.
pub const DEFAULT_BACKGROUND_ALPHA: f32 = 0.5;
