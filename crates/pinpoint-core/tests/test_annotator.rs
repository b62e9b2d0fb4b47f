mod common;

use std::ops::ControlFlow;

use approx::assert_abs_diff_eq;
use common::{changed_pixels, grey_image};
use pinpoint_core::annotator::{Annotator, ClickOutcome, Command};
use pinpoint_core::config::PinpointConfig;
use pinpoint_core::error::InputError;
use pinpoint_core::geometry::PixelPos;
use pinpoint_core::render::OverlayStyle;
use pinpoint_core::session::{DisplaySettings, SettingKind};

fn annotator(width: u32, height: u32) -> Annotator {
    Annotator::new(grey_image(width, height), &PinpointConfig::default()).unwrap()
}

#[test]
fn test_initial_frame_is_base() {
    let a = annotator(200, 100);
    assert_eq!(a.frame(), a.base());
    assert_eq!(a.dimensions(), (200, 100));
    assert!(a.export_results().is_none());
}

#[test]
fn test_first_click_sets_origin_then_points() {
    let mut a = annotator(300, 200);

    assert_eq!(
        a.on_primary_click(PixelPos::new(100, 100)),
        ClickOutcome::OriginSet(PixelPos::new(100, 100))
    );
    assert_ne!(a.frame(), a.base());

    match a.on_primary_click(PixelPos::new(150, 130)) {
        ClickOutcome::PointAdded(p) => {
            assert_eq!(p.pixel, PixelPos::new(150, 130));
            assert_eq!(p.sequence_index, 1);
        }
        other => panic!("expected a point, got {other:?}"),
    }
    assert_eq!(a.session().origin(), Some(PixelPos::new(100, 100)));
    assert_eq!(a.session().points().len(), 1);
}

#[test]
fn test_click_outside_image_is_ignored() {
    let mut a = annotator(50, 50);
    assert_eq!(a.on_primary_click(PixelPos::new(50, 10)), ClickOutcome::Ignored);
    assert_eq!(a.on_primary_click(PixelPos::new(-1, 10)), ClickOutcome::Ignored);
    assert_eq!(a.session().origin(), None);
}

#[test]
fn test_worked_example_through_export() {
    let mut a = annotator(400, 300);
    a.on_primary_click(PixelPos::new(100, 100));
    a.on_numeric_setting(SettingKind::ScaleFactor, "2.0").unwrap();
    a.on_primary_click(PixelPos::new(150, 130));

    let report = a.export_results().unwrap();
    assert_eq!(report.points.len(), 1);
    assert_abs_diff_eq!(report.points[0].physical.x, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(report.points[0].physical.y, 6.0, epsilon = 1e-9);
    assert_eq!(report.points[0].physical.to_string(), "(10.000, 6.000)");
}

#[test]
fn test_invalid_setting_keeps_state_and_frame() {
    let mut a = annotator(200, 200);
    a.on_primary_click(PixelPos::new(20, 20));
    a.on_primary_click(PixelPos::new(40, 40));
    a.on_command(Command::ToggleLabels);
    let before = a.frame().clone();

    for raw in ["-1", "abc", "0"] {
        let err = a.on_numeric_setting(SettingKind::ScaleFactor, raw).unwrap_err();
        assert!(matches!(
            err,
            InputError::NotANumber { .. } | InputError::NotPositive { .. }
        ));
    }

    assert_eq!(a.session().settings().scale_factor, 1.0);
    assert_eq!(a.frame(), &before);
}

#[test]
fn test_valid_setting_relabels_frame() {
    let mut a = annotator(200, 200);
    a.on_primary_click(PixelPos::new(20, 20));
    a.on_primary_click(PixelPos::new(60, 70));
    a.on_command(Command::ToggleLabels);
    let before = a.frame().clone();

    assert_eq!(a.on_numeric_setting(SettingKind::UnitPerPixel, "0.5"), Ok(0.5));
    assert!(changed_pixels(&before, a.frame()) > 0);
}

#[test]
fn test_commands() {
    let mut a = annotator(200, 200);
    a.on_primary_click(PixelPos::new(10, 10));
    a.on_primary_click(PixelPos::new(20, 20));
    a.on_primary_click(PixelPos::new(30, 30));

    assert_eq!(a.on_command(Command::ToggleLabels), ControlFlow::Continue(()));
    assert!(a.session().settings().labels_visible);

    assert_eq!(a.on_command(Command::ClearPoints), ControlFlow::Continue(()));
    assert!(a.session().points().is_empty());
    assert_eq!(a.session().origin(), Some(PixelPos::new(10, 10)));

    // Origin kept, so the next click is a point numbered from 1 again.
    match a.on_primary_click(PixelPos::new(40, 40)) {
        ClickOutcome::PointAdded(p) => assert_eq!(p.sequence_index, 1),
        other => panic!("expected a point, got {other:?}"),
    }

    assert_eq!(a.on_command(Command::ResetAll), ControlFlow::Continue(()));
    assert_eq!(a.session().origin(), None);
    assert_eq!(a.frame(), a.base());

    // After a reset the next click sets a new origin.
    assert_eq!(
        a.on_primary_click(PixelPos::new(5, 5)),
        ClickOutcome::OriginSet(PixelPos::new(5, 5))
    );
}

#[test]
fn test_quit_breaks_and_keeps_state() {
    let mut a = annotator(100, 100);
    a.on_primary_click(PixelPos::new(10, 10));
    a.on_primary_click(PixelPos::new(20, 30));

    assert_eq!(a.on_command(Command::Quit), ControlFlow::Break(()));
    let report = a.export_results().unwrap();
    assert_eq!(report.points.len(), 1);
}

#[test]
fn test_replace_image_resets_session() {
    let mut a = annotator(100, 100);
    a.on_primary_click(PixelPos::new(10, 10));
    a.on_numeric_setting(SettingKind::ScaleFactor, "3").unwrap();

    a.replace_image(grey_image(64, 32)).unwrap();
    assert_eq!(a.dimensions(), (64, 32));
    assert_eq!(a.session().origin(), None);
    assert_eq!(a.session().settings().scale_factor, 3.0);
    assert_eq!(a.frame(), a.base());
}

#[test]
fn test_config_settings_and_style_are_applied() {
    let config = PinpointConfig {
        display: DisplaySettings {
            scale_factor: 2.0,
            unit_per_pixel: 0.5,
            labels_visible: true,
        },
        style: OverlayStyle {
            axis_color: [0, 0, 255],
            ..OverlayStyle::default()
        },
    };
    let mut a = Annotator::new(grey_image(100, 100), &config).unwrap();
    a.on_primary_click(PixelPos::new(50, 50));

    assert_eq!(*a.frame().get_pixel(0, 50), image::Rgb([0, 0, 255]));
    assert!(a.session().settings().labels_visible);

    a.apply_config(&PinpointConfig::default()).unwrap();
    assert_eq!(*a.frame().get_pixel(0, 50), image::Rgb([255, 0, 0]));
    assert!(!a.session().settings().labels_visible);
    assert_eq!(a.session().settings().unit_per_pixel, 0.1);
    assert_eq!(a.session().origin(), Some(PixelPos::new(50, 50)));
}

#[test]
fn test_invalid_config_rejected() {
    let config = PinpointConfig {
        display: DisplaySettings {
            scale_factor: 0.0,
            ..DisplaySettings::default()
        },
        ..PinpointConfig::default()
    };
    assert!(Annotator::new(grey_image(10, 10), &config).is_err());
}
