use std::ops::ControlFlow;

use image::RgbImage;
use tracing::{info, warn};

use crate::config::PinpointConfig;
use crate::error::{InputError, PinpointError, Result};
use crate::export::ExportReport;
use crate::geometry::{CanvasSize, PixelPos};
use crate::render::OverlayRenderer;
use crate::session::{Point, Session, SettingKind};

/// Non-numeric user commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleLabels,
    ClearPoints,
    ResetAll,
    Quit,
}

/// What a keyboard key asks the annotator to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    /// Open the modal prompt for a numeric setting.
    Prompt(SettingKind),
}

/// Default key bindings, case-insensitive. Esc and `q` both quit.
pub fn key_action(key: char) -> Option<KeyAction> {
    match key.to_ascii_lowercase() {
        's' => Some(KeyAction::Prompt(SettingKind::ScaleFactor)),
        'p' => Some(KeyAction::Prompt(SettingKind::UnitPerPixel)),
        'h' => Some(KeyAction::Command(Command::ToggleLabels)),
        'c' => Some(KeyAction::Command(Command::ClearPoints)),
        'r' => Some(KeyAction::Command(Command::ResetAll)),
        'q' | '\u{1b}' => Some(KeyAction::Command(Command::Quit)),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    OriginSet(PixelPos),
    PointAdded(Point),
    /// The click fell outside the image.
    Ignored,
}

/// Event-driven front of the core: owns the session and the base image and
/// re-renders the display frame after every state change.
///
/// All methods run to completion on the caller's thread; front ends must
/// funnel every event through one `Annotator` on a single queue.
pub struct Annotator {
    base: RgbImage,
    session: Session,
    renderer: OverlayRenderer,
    frame: RgbImage,
}

impl Annotator {
    pub fn new(base: RgbImage, config: &PinpointConfig) -> Result<Self> {
        config.validate()?;
        check_dimensions(&base)?;

        let session = Session::new(config.display.clone());
        let renderer = OverlayRenderer::new(config.style.clone());
        let frame = renderer.render_session(&base, &session);
        Ok(Self {
            base,
            session,
            renderer,
            frame,
        })
    }

    /// Latest composite frame, ready for the display sink.
    pub fn frame(&self) -> &RgbImage {
        &self.frame
    }

    pub fn base(&self) -> &RgbImage {
        &self.base
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.base.dimensions()
    }

    fn rerender(&mut self) {
        self.frame = self.renderer.render_session(&self.base, &self.session);
    }

    /// First click sets the origin; every later click records a point.
    pub fn on_primary_click(&mut self, pos: PixelPos) -> ClickOutcome {
        if !CanvasSize::of(&self.base).contains(pos) {
            warn!(%pos, "click outside the image ignored");
            return ClickOutcome::Ignored;
        }

        let outcome = if self.session.set_origin(pos) {
            info!("Origin set at {pos}");
            ClickOutcome::OriginSet(pos)
        } else {
            match self.session.add_point(pos) {
                Some(point) => {
                    if let Some(coord) = self.session.physical(&point) {
                        info!(
                            "Added point {}: pixel {}, relative {}",
                            point.sequence_index, point.pixel, coord
                        );
                    }
                    ClickOutcome::PointAdded(point)
                }
                None => ClickOutcome::Ignored,
            }
        };

        self.rerender();
        outcome
    }

    /// Apply a value typed into the modal prompt for `kind`.
    ///
    /// On error the session is untouched and no render happens.
    pub fn on_numeric_setting(&mut self, kind: SettingKind, raw: &str) -> std::result::Result<f64, InputError> {
        match self.session.apply_setting(kind, raw) {
            Ok(value) => {
                info!("{kind} set to {value:.3}");
                self.rerender();
                Ok(value)
            }
            Err(e) => {
                warn!("{e}");
                Err(e)
            }
        }
    }

    /// Run a command. `Quit` breaks the caller's event loop and leaves the
    /// state as it is so results can still be exported.
    pub fn on_command(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::ToggleLabels => {
                let visible = self.session.toggle_labels();
                info!("Coordinate labels {}", if visible { "on" } else { "off" });
            }
            Command::ClearPoints => {
                self.session.clear_points();
                info!("Cleared all points");
            }
            Command::ResetAll => {
                self.session.reset_all();
                info!("Reset origin and points");
            }
            Command::Quit => return ControlFlow::Break(()),
        }
        self.rerender();
        ControlFlow::Continue(())
    }

    /// Swap in a new base image. Points and origin belong to the old image, so
    /// the session is reset; display settings are kept.
    pub fn replace_image(&mut self, base: RgbImage) -> Result<()> {
        check_dimensions(&base)?;
        self.base = base;
        self.session.reset_all();
        self.rerender();
        Ok(())
    }

    /// Adopt a new style and display settings without touching origin or points.
    pub fn apply_config(&mut self, config: &PinpointConfig) -> Result<()> {
        config.validate()?;
        self.session.set_scale_factor(config.display.scale_factor)?;
        self.session.set_unit_per_pixel(config.display.unit_per_pixel)?;
        if self.session.settings().labels_visible != config.display.labels_visible {
            self.session.toggle_labels();
        }
        self.renderer = OverlayRenderer::new(config.style.clone());
        self.rerender();
        Ok(())
    }

    /// Read-only summary of the session for final reporting.
    pub fn export_results(&self) -> Option<ExportReport> {
        ExportReport::from_session(&self.session)
    }
}

fn check_dimensions(base: &RgbImage) -> Result<()> {
    let (width, height) = base.dimensions();
    if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(PinpointError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(key_action('S'), Some(KeyAction::Prompt(SettingKind::ScaleFactor)));
        assert_eq!(key_action('p'), Some(KeyAction::Prompt(SettingKind::UnitPerPixel)));
        assert_eq!(key_action('H'), Some(KeyAction::Command(Command::ToggleLabels)));
        assert_eq!(key_action('c'), Some(KeyAction::Command(Command::ClearPoints)));
        assert_eq!(key_action('r'), Some(KeyAction::Command(Command::ResetAll)));
        assert_eq!(key_action('\u{1b}'), Some(KeyAction::Command(Command::Quit)));
        assert_eq!(key_action('x'), None);
    }

    #[test]
    fn test_zero_sized_image_rejected() {
        let result = Annotator::new(RgbImage::new(0, 10), &PinpointConfig::default());
        assert!(matches!(
            result,
            Err(PinpointError::InvalidDimensions { width: 0, height: 10 })
        ));
    }
}
