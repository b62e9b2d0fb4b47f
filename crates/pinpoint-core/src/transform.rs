use std::fmt;

use serde::Serialize;

use crate::consts::COORD_PRECISION;
use crate::geometry::PixelPos;

/// A position in user units, relative to the origin.
///
/// Never stored: always recomputed from the pixel position and the current
/// settings, so changing the scale re-labels every point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PhysicalCoord {
    pub x: f64,
    pub y: f64,
}

impl fmt::Display for PhysicalCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.prec$}, {:.prec$})",
            self.x,
            self.y,
            prec = COORD_PRECISION
        )
    }
}

/// Map a pixel to physical units relative to `origin`.
///
/// The pixel difference is taken in `f64`, so every `i32` input is valid.
/// No rounding happens here; fixed precision is applied only when the
/// coordinate is displayed.
pub fn to_physical(
    pixel: PixelPos,
    origin: PixelPos,
    scale_factor: f64,
    unit_per_pixel: f64,
) -> PhysicalCoord {
    PhysicalCoord {
        x: (f64::from(pixel.x) - f64::from(origin.x)) * unit_per_pixel * scale_factor,
        y: (f64::from(pixel.y) - f64::from(origin.y)) * unit_per_pixel * scale_factor,
    }
}
