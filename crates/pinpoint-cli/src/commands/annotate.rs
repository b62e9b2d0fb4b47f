use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use pinpoint_core::annotator::{Annotator, ClickOutcome, Command};
use pinpoint_core::geometry::PixelPos;
use pinpoint_core::io::image_io::{load_image, save_image};
use pinpoint_core::session::SettingKind;
use tracing::debug;

use super::{load_config, parse_pixel_pos};
use crate::summary::print_export_report;

#[derive(Args)]
pub struct AnnotateArgs {
    /// Input image
    pub file: PathBuf,

    /// Origin pixel as X,Y
    #[arg(long, value_parser = parse_pixel_pos, allow_hyphen_values = true)]
    pub origin: PixelPos,

    /// Point pixel as X,Y; repeat for more points, numbered in order
    #[arg(long = "point", value_parser = parse_pixel_pos, allow_hyphen_values = true)]
    pub points: Vec<PixelPos>,

    /// Scale factor applied to every coordinate (overrides config)
    #[arg(long)]
    pub scale: Option<String>,

    /// Physical units per pixel (overrides config)
    #[arg(long)]
    pub unit: Option<String>,

    /// Draw coordinate labels next to the points
    #[arg(long)]
    pub labels: bool,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output image path
    #[arg(short, long, default_value = "annotated.png")]
    pub output: PathBuf,
}

pub fn run(args: &AnnotateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let base = load_image(&args.file)?;
    let mut annotator = Annotator::new(base, &config)?;
    apply_overrides(&mut annotator, args)?;

    if annotator.on_primary_click(args.origin) == ClickOutcome::Ignored {
        let (w, h) = annotator.dimensions();
        bail!("Origin {} lies outside the {w}x{h} image", args.origin);
    }
    for &pos in &args.points {
        if annotator.on_primary_click(pos) == ClickOutcome::Ignored {
            eprintln!("Skipping point {pos}: outside the image");
        }
    }

    save_image(annotator.frame(), &args.output)?;
    println!("Saved annotated image to {}", args.output.display());

    print_export_report(annotator.export_results().as_ref());
    Ok(())
}

/// Command-line settings win over the config file. `--labels` only ever
/// turns labels on.
fn apply_overrides(annotator: &mut Annotator, args: &AnnotateArgs) -> Result<()> {
    if let Some(ref raw) = args.scale {
        annotator.on_numeric_setting(SettingKind::ScaleFactor, raw)?;
    }
    if let Some(ref raw) = args.unit {
        annotator.on_numeric_setting(SettingKind::UnitPerPixel, raw)?;
    }
    if args.labels && !annotator.session().settings().labels_visible {
        if let ControlFlow::Continue(()) = annotator.on_command(Command::ToggleLabels) {
            debug!("coordinate labels on");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use pinpoint_core::config::PinpointConfig;

    fn args(labels: bool, scale: Option<&str>) -> AnnotateArgs {
        AnnotateArgs {
            file: PathBuf::from("in.png"),
            origin: PixelPos::new(0, 0),
            points: Vec::new(),
            scale: scale.map(str::to_string),
            unit: None,
            labels,
            config: None,
            output: PathBuf::from("out.png"),
        }
    }

    fn annotator(config: &PinpointConfig) -> Annotator {
        Annotator::new(RgbImage::new(20, 10), config).unwrap()
    }

    #[test]
    fn test_labels_flag_turns_labels_on() {
        let mut a = annotator(&PinpointConfig::default());
        apply_overrides(&mut a, &args(true, None)).unwrap();
        assert!(a.session().settings().labels_visible);

        // Applying again must not toggle them back off.
        apply_overrides(&mut a, &args(true, None)).unwrap();
        assert!(a.session().settings().labels_visible);
    }

    #[test]
    fn test_labels_flag_keeps_config_labels() {
        let mut config = PinpointConfig::default();
        config.display.labels_visible = true;
        let mut a = annotator(&config);
        apply_overrides(&mut a, &args(false, None)).unwrap();
        assert!(a.session().settings().labels_visible);
        apply_overrides(&mut a, &args(true, None)).unwrap();
        assert!(a.session().settings().labels_visible);
    }

    #[test]
    fn test_scale_override_is_validated() {
        let mut a = annotator(&PinpointConfig::default());
        apply_overrides(&mut a, &args(false, Some("2.5"))).unwrap();
        assert_eq!(a.session().settings().scale_factor, 2.5);
        assert!(apply_overrides(&mut a, &args(false, Some("-1"))).is_err());
        assert_eq!(a.session().settings().scale_factor, 2.5);
    }
}
