use std::fmt;

use serde::Serialize;

use crate::consts::COORD_PRECISION;
use crate::geometry::PixelPos;
use crate::session::Session;
use crate::transform::PhysicalCoord;

/// Final report of a session: origin, settings and every point's coordinates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportReport {
    pub origin: PixelPos,
    pub scale_factor: f64,
    pub unit_per_pixel: f64,
    pub points: Vec<ExportedPoint>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportedPoint {
    pub sequence_index: usize,
    pub pixel: PixelPos,
    pub physical: PhysicalCoord,
}

impl ExportReport {
    /// Snapshot `session`. `None` while no origin has been set.
    pub fn from_session(session: &Session) -> Option<Self> {
        let origin = session.origin()?;
        let settings = session.settings();
        let points = session
            .points()
            .iter()
            .filter_map(|p| {
                Some(ExportedPoint {
                    sequence_index: p.sequence_index,
                    pixel: p.pixel,
                    physical: session.physical(p)?,
                })
            })
            .collect();

        Some(Self {
            origin,
            scale_factor: settings.scale_factor,
            unit_per_pixel: settings.unit_per_pixel,
            points,
        })
    }
}

fn fmt_pixel(pos: PixelPos) -> String {
    format!(
        "({:.prec$}, {:.prec$})",
        f64::from(pos.x),
        f64::from(pos.y),
        prec = COORD_PRECISION
    )
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Origin: {}", fmt_pixel(self.origin))?;
        write!(
            f,
            "Scale factor: {:.prec$}, unit per pixel: {:.prec$}",
            self.scale_factor,
            self.unit_per_pixel,
            prec = COORD_PRECISION
        )?;
        for point in &self.points {
            write!(f, "\n{point}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ExportedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point {}: pixel {}, relative {}",
            self.sequence_index,
            fmt_pixel(self.pixel),
            self.physical
        )
    }
}
