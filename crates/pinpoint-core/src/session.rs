use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DEFAULT_SCALE_FACTOR, DEFAULT_UNIT_PER_PIXEL};
use crate::error::InputError;
use crate::geometry::PixelPos;
use crate::transform::{to_physical, PhysicalCoord};

/// A recorded click. `sequence_index` is the 1-based insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Point {
    pub pixel: PixelPos,
    pub sequence_index: usize,
}

/// Which numeric display setting a value is meant for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingKind {
    ScaleFactor,
    UnitPerPixel,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingKind::ScaleFactor => write!(f, "Scale factor"),
            SettingKind::UnitPerPixel => write!(f, "Unit per pixel"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Multiplier applied uniformly to every physical coordinate (step size).
    pub scale_factor: f64,
    /// Physical length represented by one pixel.
    pub unit_per_pixel: f64,
    /// Draw the per-point coordinate labels.
    pub labels_visible: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            scale_factor: DEFAULT_SCALE_FACTOR,
            unit_per_pixel: DEFAULT_UNIT_PER_PIXEL,
            labels_visible: false,
        }
    }
}

impl DisplaySettings {
    pub fn get(&self, kind: SettingKind) -> f64 {
        match kind {
            SettingKind::ScaleFactor => self.scale_factor,
            SettingKind::UnitPerPixel => self.unit_per_pixel,
        }
    }
}

/// Check that `value` is a usable setting: finite and strictly positive.
pub fn validate_setting(kind: SettingKind, value: f64) -> Result<f64, InputError> {
    if value.is_nan() || value.is_infinite() {
        return Err(InputError::NotANumber {
            kind,
            input: value.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive { kind, value });
    }
    Ok(value)
}

/// Parse free text typed by the user into a valid setting value.
pub fn parse_setting(kind: SettingKind, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        kind,
        input: trimmed.to_string(),
    })?;
    validate_setting(kind, value)
}

/// Origin, recorded points and display settings of one annotation session.
///
/// Mutated only through the methods below. Rendering is the caller's job and
/// must follow every successful mutation.
#[derive(Clone, Debug, Default)]
pub struct Session {
    origin: Option<PixelPos>,
    points: Vec<Point>,
    settings: DisplaySettings,
    next_index: usize,
}

impl Session {
    pub fn new(settings: DisplaySettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn origin(&self) -> Option<PixelPos> {
        self.origin
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// Set the origin. Only the first call has an effect; returns whether it did.
    pub fn set_origin(&mut self, pos: PixelPos) -> bool {
        if self.origin.is_some() {
            debug!(%pos, "origin already set, ignoring");
            return false;
        }
        self.origin = Some(pos);
        true
    }

    /// Append a point. Silently ignored while no origin is set.
    pub fn add_point(&mut self, pos: PixelPos) -> Option<Point> {
        if self.origin.is_none() {
            debug!(%pos, "no origin yet, point ignored");
            return None;
        }
        self.next_index += 1;
        let point = Point {
            pixel: pos,
            sequence_index: self.next_index,
        };
        self.points.push(point);
        Some(point)
    }

    pub fn set_scale_factor(&mut self, value: f64) -> Result<(), InputError> {
        self.settings.scale_factor = validate_setting(SettingKind::ScaleFactor, value)?;
        Ok(())
    }

    pub fn set_unit_per_pixel(&mut self, value: f64) -> Result<(), InputError> {
        self.settings.unit_per_pixel = validate_setting(SettingKind::UnitPerPixel, value)?;
        Ok(())
    }

    /// Parse `raw` and store it as the given setting. On error nothing changes.
    pub fn apply_setting(&mut self, kind: SettingKind, raw: &str) -> Result<f64, InputError> {
        let value = parse_setting(kind, raw)?;
        match kind {
            SettingKind::ScaleFactor => self.settings.scale_factor = value,
            SettingKind::UnitPerPixel => self.settings.unit_per_pixel = value,
        }
        Ok(value)
    }

    /// Flip label visibility and return the new state.
    pub fn toggle_labels(&mut self) -> bool {
        self.settings.labels_visible = !self.settings.labels_visible;
        self.settings.labels_visible
    }

    /// Drop every point; the origin stays and numbering restarts at 1.
    pub fn clear_points(&mut self) {
        self.points.clear();
        self.next_index = 0;
    }

    /// Drop every point and the origin.
    pub fn reset_all(&mut self) {
        self.clear_points();
        self.origin = None;
    }

    /// Physical coordinate of `point` under the current settings.
    pub fn physical(&self, point: &Point) -> Option<PhysicalCoord> {
        let origin = self.origin?;
        Some(to_physical(
            point.pixel,
            origin,
            self.settings.scale_factor,
            self.settings.unit_per_pixel,
        ))
    }
}
